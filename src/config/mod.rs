//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `SHORTUUID_WORKER__<SECTION>__<KEY>` pattern

mod server;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Codec defaults.
    #[serde(default)]
    pub codec: CodecConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{SHORTUUID_PROFILE}.toml` (if `SHORTUUID_PROFILE` is set)
    /// 3. Environment variables with `SHORTUUID_WORKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration with files taken from `dir` instead of `config/`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let profile =
            std::env::var("SHORTUUID_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(&profile).to_string_lossy()).required(false))
            // SHORTUUID_WORKER__CODEC__CASE_SENSITIVE=true -> codec.case_sensitive = true
            .add_source(
                Environment::with_prefix("SHORTUUID_WORKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        if self.codec.max_batch == 0 {
            return Err(ConfigError::Message(
                "codec.max_batch cannot be 0".to_string(),
            ));
        }

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be 'text' or 'json', got '{}'",
                self.observability.log_format
            )));
        }

        Ok(())
    }
}

/// Codec defaults applied when a request leaves them out.
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Use base 62 (case-sensitive) instead of base 36.
    #[serde(default)]
    pub case_sensitive: bool,

    /// Maximum number of random ids per request.
    #[serde(default = "default_max_batch")]
    pub max_batch: u32,
}

const fn default_max_batch() -> u32 {
    1000
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_batch: default_max_batch(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Install the Prometheus recorder behind `/metrics`.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: default_metrics_enabled(),
        }
    }
}
