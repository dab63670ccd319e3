//! CLI module for TruthPulse
//!
//! Provides command-line interface parsing and handling for the truthpulse-server binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod init;
pub mod output;

use crate::utils::toml_config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TruthPulse AI - claim verification demo server
///
/// Serves the TruthPulse front-end and a small JSON API that scores claims
/// with a random truth score and exposes the weekly trend datasets.
#[derive(Parser, Debug)]
#[command(
    name = "truthpulse-server",
    version,
    about = "TruthPulse AI - Detect Misinformation",
    long_about = "Serves the TruthPulse AI demo site and its JSON API.\n\n\
                  Truth scores are drawn at random; the claim text is never analysed.\n\
                  Run without arguments to start the server, or use 'init' to scaffold a config file.",
    after_help = "EXAMPLES:\n    \
                  truthpulse-server init                    # Write truthpulse.toml and .env.example\n    \
                  truthpulse-server                         # Start the server\n    \
                  truthpulse-server --config site.toml      # Use a custom config file\n    \
                  truthpulse-server config --validate       # Check the config without serving\n    \
                  truthpulse-server pages                   # List the site's pages"
)]
pub struct Cli {
    /// Path to the configuration file [default: truthpulse.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (the default when no subcommand is given)
    Serve,

    /// Write a starter truthpulse.toml and .env.example
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files without prompting
        #[arg(short, long)]
        force: bool,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "3000")]
        port: u16,
    },

    /// Show configuration information
    Config {
        /// Print the effective configuration as TOML
        #[arg(short = 'f', long)]
        full: bool,

        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },

    /// List the site's pages and their routes
    Pages,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Configuration file to read, falling back to `truthpulse.toml`.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Whether `--config` was given; a missing explicit file is an error.
    pub fn config_is_explicit(&self) -> bool {
        self.config.is_some()
    }
}
