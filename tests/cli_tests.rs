//! CLI Integration Tests for TruthPulse
//!
//! Runs the built `truthpulse-server` binary for everything except `serve`.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run truthpulse-server with arguments, without colours
fn run_truthpulse(args: &[&str], working_dir: Option<&std::path::Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_truthpulse-server"));
    cmd.arg("--no-color").args(args);
    cmd.env_remove("TRUTHPULSE_HOST")
        .env_remove("TRUTHPULSE_PORT")
        .env_remove("TRUTHPULSE_LOG_LEVEL");

    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    cmd.output().expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let output = run_truthpulse(&["--help"], None);

    assert!(output.status.success());
    let stdout = stdout(&output);

    assert!(stdout.contains("TruthPulse"));
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("init"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("pages"));
}

#[test]
fn test_version_command() {
    let output = run_truthpulse(&["--version"], None);

    assert!(output.status.success());
    assert!(stdout(&output).contains("truthpulse-server"));
}

// =============================================================================
// Init Command Tests
// =============================================================================

#[test]
fn test_init_creates_files() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_truthpulse(&["init", "--port", "4100"], Some(temp_dir.path()));
    assert!(output.status.success());

    let config = fs::read_to_string(temp_dir.path().join("truthpulse.toml")).unwrap();
    assert!(config.contains("port = 4100"));
    assert!(temp_dir.path().join(".env.example").exists());
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("truthpulse.toml"), "# mine\n").unwrap();

    let output = run_truthpulse(&["init"], Some(temp_dir.path()));
    assert!(output.status.success());
    assert!(stdout(&output).contains("already exists"));

    let config = fs::read_to_string(temp_dir.path().join("truthpulse.toml")).unwrap();
    assert_eq!(config, "# mine\n");
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("truthpulse.toml"), "# mine\n").unwrap();

    let output = run_truthpulse(&["init", "--force"], Some(temp_dir.path()));
    assert!(output.status.success());

    let config = fs::read_to_string(temp_dir.path().join("truthpulse.toml")).unwrap();
    assert!(config.contains("[server]"));
}

// =============================================================================
// Config Command Tests
// =============================================================================

#[test]
fn test_config_without_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_truthpulse(&["config"], Some(temp_dir.path()));
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("127.0.0.1:3000"));
    assert!(stdout.contains("no (defaults)"));
}

#[test]
fn test_config_validate_after_init() {
    let temp_dir = TempDir::new().unwrap();
    assert!(run_truthpulse(&["init"], Some(temp_dir.path())).status.success());

    let output = run_truthpulse(&["config", "--validate"], Some(temp_dir.path()));
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("truthpulse.toml is valid"));
    assert!(!stdout.contains("defaults are valid"));
}

#[test]
fn test_config_validate_without_file_reports_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_truthpulse(&["config", "--validate"], Some(temp_dir.path()));
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("no truthpulse.toml; defaults are valid"));
    assert!(!stdout.contains("truthpulse.toml is valid"));
}

#[test]
fn test_config_full_prints_toml() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("truthpulse.toml"),
        "[server]\nport = 5005\n",
    )
    .unwrap();

    let output = run_truthpulse(&["config", "--full"], Some(temp_dir.path()));
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("[server]"));
    assert!(stdout.contains("port = 5005"));
    assert!(stdout.contains("[cors]"));
}

#[test]
fn test_config_invalid_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("truthpulse.toml"), "[server]\nport = 0\n").unwrap();

    let output = run_truthpulse(&["config", "--validate"], Some(temp_dir.path()));
    assert!(!output.status.success());
}

#[test]
fn test_explicit_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_truthpulse(&["config", "--config", "absent.toml"], Some(temp_dir.path()));
    assert!(!output.status.success());
}

// =============================================================================
// Pages Command Tests
// =============================================================================

#[test]
fn test_pages_lists_routes() {
    let output = run_truthpulse(&["pages"], None);
    assert!(output.status.success());

    let stdout = stdout(&output);
    for path in ["/verify", "/trends", "/chat", "/about"] {
        assert!(stdout.contains(path), "missing {path}");
    }
    assert!(stdout.contains("Home"));
}
