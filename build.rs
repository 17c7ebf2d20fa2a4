fn main() -> Result<(), Box<dyn std::error::Error>> {
    let protoc = protoc_bin_vendored::protoc_bin_path()
        .expect("A protoc binary should be vendored for this platform.");
    std::env::set_var("PROTOC", protoc);

    tonic_build::compile_protos("proto/auth/v1/user.proto")?;

    Ok(())
}
