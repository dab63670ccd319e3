//! Init command implementation
//!
//! Scaffolds a `truthpulse.toml` and `.env.example` in a directory.

use super::output::Output;
use crate::utils::toml_config::{DEFAULT_CONFIG_FILE, ENV_HOST, ENV_LOG_LEVEL, ENV_PORT};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the init operation
#[derive(Debug, PartialEq, Eq)]
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// Project already exists (truthpulse.toml found)
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing TruthPulse");

    let base_path = &config.path;

    let config_path = base_path.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() && !config.force {
        output.warning(&format!("{} already exists!", DEFAULT_CONFIG_FILE));
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    if !base_path.exists() {
        if let Err(e) = fs::create_dir_all(base_path) {
            output.error(&format!("Failed to create {}: {}", base_path.display(), e));
            return InitResult::Error(e.to_string());
        }
    }

    output.subheader("Creating configuration files");

    let toml_content = generate_config_toml(&config);
    if let Err(e) = write_file(&config_path, &toml_content, config.force) {
        output.error(&format!("Failed to create {}: {}", DEFAULT_CONFIG_FILE, e));
        return InitResult::Error(e.to_string());
    }
    output.created("config", DEFAULT_CONFIG_FILE);

    let env_example_path = base_path.join(".env.example");
    if env_example_path.exists() && !config.force {
        output.skipped(".env.example", "already exists");
    } else if let Err(e) = write_file(&env_example_path, &generate_env_example(), config.force) {
        output.error(&format!("Failed to create .env.example: {}", e));
        return InitResult::Error(e.to_string());
    } else {
        output.created("env", ".env.example");
    }

    output.complete("TruthPulse initialized successfully!");

    output.header("Next Steps");
    output.newline();
    output.info("1. Start the server:");
    output.command("truthpulse-server");
    output.newline();
    output.info("2. Optionally build and embed the front-end:");
    output.command("cd ui && trunk build --release");
    output.command("cargo run --features ui");

    output.hint(&format!(
        "Server will be available at http://{}:{}",
        config.host, config.port
    ));

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(()); // Skip existing files unless force is true
    }
    fs::write(path, content)
}

fn generate_config_toml(config: &InitConfig) -> String {
    format!(
        r#"# TruthPulse configuration
# Every key is optional; the values below are the defaults unless noted.

[server]
host = "{host}"
port = {port}
log_level = "info"
# "pretty" for terminals, "json" for log collectors
log_format = "pretty"
body_limit_bytes = 65536

[cors]
allow_any_origin = true
# allowed_origins = ["http://localhost:8080"]

[ui]
# Serve the embedded front-end (binary must be built with --features ui)
embed = true
"#,
        host = config.host,
        port = config.port
    )
}

fn generate_env_example() -> String {
    format!(
        r#"# TruthPulse environment overrides
# Copy to .env; values here win over truthpulse.toml.

# {ENV_HOST}=0.0.0.0
# {ENV_PORT}=3000
# {ENV_LOG_LEVEL}=info

# Fine-grained tracing filter (takes precedence over log_level)
# RUST_LOG=truthpulse=debug,tower_http=debug
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::toml_config::TruthPulseConfig;
    use tempfile::TempDir;

    fn create_test_config(temp_dir: &TempDir) -> InitConfig {
        InitConfig {
            path: temp_dir.path().to_path_buf(),
            force: false,
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }

    #[test]
    fn test_generated_toml_parses() {
        let config = InitConfig {
            path: PathBuf::from("/tmp"),
            force: false,
            host: "0.0.0.0".to_string(),
            port: 8080,
        };

        let content = generate_config_toml(&config);
        let parsed = TruthPulseConfig::parse(&content).expect("generated config must parse");

        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 8080);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_generate_env_example() {
        let content = generate_env_example();

        assert!(content.contains("TRUTHPULSE_HOST"));
        assert!(content.contains("TRUTHPULSE_PORT"));
        assert!(content.contains("TRUTHPULSE_LOG_LEVEL"));
        assert!(content.contains("RUST_LOG"));
    }

    #[test]
    fn test_write_file_skips_existing_without_force() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("test.txt");

        fs::write(&file_path, "original").expect("Failed to write");

        assert!(write_file(&file_path, "new content", false).is_ok());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");

        assert!(write_file(&file_path, "new content", true).is_ok());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }

    #[test]
    fn test_run_creates_all_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = run(create_test_config(&temp_dir), &Output::no_color());

        assert_eq!(result, InitResult::Success);
        assert!(temp_dir.path().join(DEFAULT_CONFIG_FILE).exists());
        assert!(temp_dir.path().join(".env.example").exists());
    }

    #[test]
    fn test_run_creates_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested = temp_dir.path().join("site/config");
        let config = InitConfig {
            path: nested.clone(),
            force: false,
            host: "127.0.0.1".to_string(),
            port: 3000,
        };

        assert_eq!(run(config, &Output::no_color()), InitResult::Success);
        assert!(nested.join(DEFAULT_CONFIG_FILE).exists());
    }

    #[test]
    fn test_run_already_exists_without_force() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILE), "existing").expect("Failed to write");

        let result = run(create_test_config(&temp_dir), &Output::no_color());

        assert_eq!(result, InitResult::AlreadyExists);
        let content = fs::read_to_string(temp_dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(content, "existing");
    }

    #[test]
    fn test_run_force_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILE), "existing").expect("Failed to write");

        let config = InitConfig {
            force: true,
            ..create_test_config(&temp_dir)
        };
        let result = run(config, &Output::no_color());

        assert_eq!(result, InitResult::Success);
        let content = fs::read_to_string(temp_dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert!(content.contains("[server]"));
        assert!(!content.contains("existing"));
    }
}
