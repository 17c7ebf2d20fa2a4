use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 50051;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("application.host", DEFAULT_HOST)?
        .set_default("application.port", i64::from(DEFAULT_PORT))?
        .set_default("log_level", DEFAULT_LOG_LEVEL)
}

/// Reads the settings from, in increasing order of precedence: the built-in
/// defaults, `configuration/base.yaml` when present, and `APP_` prefixed
/// environment variables (`APP_APPLICATION__PORT=50052`).
pub fn get_configuration() -> Result<Settings, ConfigError> {
    defaults()?
        .add_source(config::File::with_name("configuration/base").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
