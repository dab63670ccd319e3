/// TOML configuration (`truthpulse.toml`) with environment overrides.
pub mod toml_config;
