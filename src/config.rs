//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::endpoints::DEFAULT_API_BASE;
use crate::service::ServiceConfig;
use crate::store::POSTS_PER_PAGE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Posts API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Settings for the post service
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_secs.saturating_mul(1000),
        }
    }
}

/// Store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Zero is rejected at parse time
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: NonZeroUsize,
}

fn default_posts_per_page() -> NonZeroUsize {
    POSTS_PER_PAGE
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            posts_per_page: default_posts_per_page(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("foodics-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("FOODICS_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(per_page) = std::env::var("FOODICS_POSTS_PER_PAGE") {
            match per_page.parse() {
                Ok(n) => self.store.posts_per_page = n,
                Err(_) => tracing::warn!("Ignoring invalid FOODICS_POSTS_PER_PAGE: {}", per_page),
            }
        }

        if let Ok(level) = std::env::var("FOODICS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FOODICS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Foodics Dashboard Configuration
#
# Environment variables override these settings:
# - FOODICS_API_URL
# - FOODICS_POSTS_PER_PAGE
# - FOODICS_LOG_LEVEL
# - FOODICS_LOG_FORMAT

[api]
# Base URL of the posts API
base_url = "https://jsonplaceholder.typicode.com"

# Request timeout in seconds
request_timeout_secs = 10

[store]
# Posts shown per page (must be greater than zero)
posts_per_page = 10

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.api.request_timeout_secs, 10);
        assert_eq!(config.store.posts_per_page.get(), 10);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let file = write_config(&generate_default_config());
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, Config::default().api.base_url);
        assert_eq!(config.store.posts_per_page, POSTS_PER_PAGE);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("[store]\nposts_per_page = 25\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.store.posts_per_page.get(), 25);
        assert_eq!(config.api.request_timeout_secs, 10);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let file = write_config("[store]\nposts_per_page = 0\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_service_config_conversion() {
        let api = ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 3,
        };
        let service = api.service_config();
        assert_eq!(service.base_url, "http://localhost:3000");
        assert_eq!(service.request_timeout_ms, 3000);
    }
}
