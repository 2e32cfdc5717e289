use serde::Deserialize;
use service_core::config::{self as core_config, ServerConfig, TelemetryConfig};
use service_core::error::AppError;

pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub service: ServiceSettings,
}

/// How the server names itself in response bodies.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    /// Reported as `server` by the health endpoint.
    #[serde(default = "default_label")]
    pub label: String,
    /// Used in the index greeting: `Hello from <display_name>!`.
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            label: default_label(),
            display_name: default_display_name(),
        }
    }
}

fn default_label() -> String {
    "flask".to_string()
}

fn default_display_name() -> String {
    "Flask".to_string()
}

impl Settings {
    /// Load from `configuration.*` and `APP__*` variables on top of the
    /// service defaults (all interfaces, port 5001).
    pub fn load() -> Result<Self, AppError> {
        let builder = core_config::builder("configuration")
            .set_default("server.port", i64::from(DEFAULT_PORT))?;

        core_config::load(builder)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                ..ServerConfig::default()
            },
            telemetry: TelemetryConfig::default(),
            service: ServiceSettings::default(),
        }
    }
}
