//! TOML-based configuration for the MyBestApp API.
//!
//! Settings are read from a TOML file (`mybestapp.toml` by default) and can
//! be overridden with `MYBESTAPP_*` environment variables. A missing file
//! yields the defaults so the server starts with no configuration at all.

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Root configuration structure loaded from mybestapp.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS allow-list; no CORS layer is installed while it is empty.
    #[serde(default)]
    pub cors: CorsConfig,
}

// ============= Server Configuration =============

/// Bind address and logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Default tracing filter, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format: `"pretty"` or `"json"`.
    #[serde(default = "default_log_format")]
    pub log_format: String,
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

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

// ============= CORS Configuration =============

/// Cross-origin request policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Browser origins allowed to call the API, e.g. `http://localhost:5173`.
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Whether credentialed requests are allowed from those origins.
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,
}

fn default_allow_credentials() -> bool {
    true
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allow_credentials: default_allow_credentials(),
        }
    }
}

// ============= Loading =============

impl AppConfig {
    /// Load configuration from a TOML file, then apply environment overrides.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = path.as_ref();
        let mut config = if path.exists() {
            let raw = fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            toml::from_str(&raw).map_err(|e| {
                AppError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("MYBESTAPP_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("MYBESTAPP_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(%port, "Ignoring invalid MYBESTAPP_PORT"),
            }
        }
        if let Ok(level) = env::var("MYBESTAPP_LOG_LEVEL") {
            self.server.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_level, "info");
        assert!(config.cors.allowed_origins.is_empty());
        assert!(config.cors.allow_credentials);
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            log_level = "debug"
            log_format = "json"

            [cors]
            allowed_origins = ["http://localhost:5173", "https://app.example.com"]
            allow_credentials = false
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, "json");
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert!(!config.cors.allow_credentials);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 4000
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.log_level, "info");
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("does-not-exist.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mybestapp.toml");
        fs::write(&path, "[server]\nport = 9999\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mybestapp.toml");
        fs::write(&path, "[server\nport = oops").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
