//! CLI module for the MyBestApp API
//!
//! Provides command-line interface parsing for the mybestapp-api binary.
//! Uses clap for argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// MyBestApp API
///
/// A demonstration REST API with echo endpoints, body repetition,
/// file upload metadata echo, and OpenAPI documentation.
#[derive(Parser, Debug)]
#[command(
    name = "mybestapp-api",
    version,
    about = "MyBestApp API server",
    long_about = "A demonstration REST API with echo endpoints, body repetition,\n\
                  file upload metadata echo, and OpenAPI documentation.\n\n\
                  Run without arguments to start the server with defaults.",
    after_help = "EXAMPLES:\n    \
                  mybestapp-api                          # Start with mybestapp.toml or defaults\n    \
                  mybestapp-api --config custom.toml     # Use a custom config file\n    \
                  mybestapp-api --host 0.0.0.0 --port 80 # Override the bind address"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "mybestapp.toml")]
    pub config: PathBuf,

    /// Host address to bind, overrides the configuration file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides the configuration file
    #[arg(long)]
    pub port: Option<u16>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let cli = Cli::parse_from(["mybestapp-api"]);
        assert_eq!(cli.config, PathBuf::from("mybestapp.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "mybestapp-api",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--verbose",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cli.port, Some(8080));
        assert!(cli.verbose);
    }
}
