use crate::error::AppError;
use config::{builder::DefaultState, Config as Cfg, ConfigBuilder, Environment, File};
use serde::Deserialize;

/// Listener settings shared by every service.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC collector, e.g. `http://tempo:4317`. Export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    /// Emit JSON log lines instead of human-readable text.
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
            json: default_json(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    true
}

/// Layered configuration builder: optional `<file_name>.{yaml,toml,json}`
/// in the working directory, then `APP__`-prefixed environment variables.
///
/// `.env` is loaded first so its entries behave like real environment
/// variables. Services add their own defaults before calling `build()`.
pub fn builder(file_name: &str) -> ConfigBuilder<DefaultState> {
    dotenvy::dotenv().ok();

    Cfg::builder()
        .add_source(File::with_name(file_name).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
}

/// Build and deserialize a configuration tree.
pub fn load<T>(builder: ConfigBuilder<DefaultState>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    let config = builder.build()?;
    Ok(config.try_deserialize()?)
}
