//! Gateway configuration: built-in defaults, then an optional TOML file, then
//! `VOYAGELUX__*` environment overrides.

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

pub const CONFIG_PATH_ENV: &str = "VOYAGELUX_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            app_name: "VoyageLux Agent Studio".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_filter: "info".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load using `VOYAGELUX_CONFIG` (or `config/gateway.toml`) as the file source.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// A missing file is not an error; defaults and environment still apply.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_filter", defaults.log_filter)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        builder
            .add_source(config::Environment::with_prefix("VOYAGELUX").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
