pub mod app;
pub mod config;
pub mod proto;
pub mod telemetry;
