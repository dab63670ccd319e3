//! TOML-based configuration for TruthPulse
//!
//! Settings live in `truthpulse.toml`. Every section and key is optional, so
//! an empty file (or no file at all) yields a working local server.
//!
//! A handful of `TRUTHPULSE_*` environment variables override the file; they
//! are applied after parsing and before validation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "truthpulse.toml";

/// Environment variable overriding `server.host`.
pub const ENV_HOST: &str = "TRUTHPULSE_HOST";
/// Environment variable overriding `server.port`.
pub const ENV_PORT: &str = "TRUTHPULSE_PORT";
/// Environment variable overriding `server.log_level`.
pub const ENV_LOG_LEVEL: &str = "TRUTHPULSE_LOG_LEVEL";

/// Root configuration structure loaded from truthpulse.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TruthPulseConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Default `tracing` filter; `RUST_LOG` still wins when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Maximum accepted request body, in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_body_limit() -> usize {
    64 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind; host names are resolved by the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, coloured
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

// ============= CORS Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allow every origin, method and header
    #[serde(default = "default_true")]
    pub allow_any_origin: bool,

    /// Explicit origins, used when `allow_any_origin` is false
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: true,
            allowed_origins: Vec::new(),
        }
    }
}

// ============= UI Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Serve the embedded front-end (only effective with the `ui` feature)
    #[serde(default = "default_true")]
    pub embed: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { embed: true }
    }
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable '{name}' has an invalid value '{value}'")]
    InvalidEnvOverride { name: String, value: String },
}

impl TruthPulseConfig {
    /// Load configuration from a TOML file, apply environment overrides and
    /// validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load `path` if it exists. A missing file falls back to defaults unless
    /// the caller named it explicitly.
    pub fn load_or_default<P: AsRef<Path>>(path: P, explicit: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() || explicit {
            return Self::load(path);
        }

        debug!("No configuration at {:?}, using defaults", path);
        let mut config = Self::default();
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML without touching the environment.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `TRUTHPULSE_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnvOverride {
                name: ENV_PORT.to_string(),
                value: port.clone(),
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.server.log_level = level;
        }
        Ok(())
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.server.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.log_level must not be empty".to_string(),
            ));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "server.body_limit_bytes must be greater than zero".to_string(),
            ));
        }
        if !self.cors.allow_any_origin && self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::ValidationError(
                "cors.allowed_origins must list at least one origin when cors.allow_any_origin is false"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Render the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn create_test_config() -> String {
        r#"
[server]
host = "0.0.0.0"
port = 8080
log_level = "debug"
log_format = "json"

[cors]
allow_any_origin = false
allowed_origins = ["http://localhost:8081"]

[ui]
embed = false
"#
        .to_string()
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_parse_config() {
        let config = TruthPulseConfig::parse(&create_test_config()).expect("Failed to parse config");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert!(!config.cors.allow_any_origin);
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:8081"]);
        assert!(!config.ui.embed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = TruthPulseConfig::parse("").unwrap();

        assert_eq!(config, TruthPulseConfig::default());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.server.log_format, LogFormat::Pretty);
        assert_eq!(config.server.body_limit_bytes, 65536);
        assert!(config.cors.allow_any_origin);
        assert!(config.ui.embed);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = TruthPulseConfig::parse("[server]\nport = 4100\n").unwrap();
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_parse_error() {
        let err = TruthPulseConfig::parse("[server\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));

        let err = TruthPulseConfig::parse("[server]\nlog_format = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let mut config = TruthPulseConfig::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_host() {
        let mut config = TruthPulseConfig::default();
        config.server.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_requires_origins_when_restricted() {
        let mut config = TruthPulseConfig::default();
        config.cors.allow_any_origin = false;
        assert!(config.validate().is_err());

        config.cors.allowed_origins.push("https://truthpulse.example".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = TruthPulseConfig::default();
        config
            .apply_env_overrides(env(&[
                (ENV_HOST, "0.0.0.0"),
                (ENV_PORT, " 9090 "),
                (ENV_LOG_LEVEL, "truthpulse=trace"),
            ]))
            .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.log_level, "truthpulse=trace");
    }

    #[test]
    fn test_env_override_bad_port() {
        let mut config = TruthPulseConfig::default();
        let err = config
            .apply_env_overrides(env(&[(ENV_PORT, "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvOverride { .. }));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_bind_addr() {
        let mut config = TruthPulseConfig::default();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:3000");

        config.server.host = "localhost".to_string();
        config.server.port = 8080;
        assert_eq!(config.server.bind_addr(), "localhost:8080");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(matches!(
            TruthPulseConfig::load(&path),
            Err(ConfigError::FileNotFound(_))
        ));
        assert!(TruthPulseConfig::load_or_default(&path, true).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"[server]\nlog_level = \"warn\"\n").unwrap();

        let config = TruthPulseConfig::load(&path).unwrap();
        assert_eq!(config.server.log_level, "warn");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = TruthPulseConfig::parse(&create_test_config()).unwrap();
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(TruthPulseConfig::parse(&rendered).unwrap(), config);
    }
}
