//! Application Configuration Module
//!
//! Loads the backend location and log level from the environment
//! (and an optional `.env` file).

use std::env;
use tracing::Level;

/// Holds all configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
    pub log_level: Level,
}

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
    #[error("Invalid log level provided for RUST_LOG: {0}")]
    InvalidLogLevel(String),
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// *   `NEXUS_API_BASE_URL`: (Optional) Origin of the backend. Defaults to `http://localhost:3000`.
    /// *   `NEXUS_API_ENDPOINT`: (Optional) Path of the action endpoint. Defaults to `/api/gemini`.
    /// *   `RUST_LOG`: (Optional) The logging level. Defaults to "INFO".
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = var("NEXUS_API_BASE_URL");
        if let Some(url) = &base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue(
                    "NEXUS_API_BASE_URL".to_string(),
                    url.clone(),
                ));
            }
        }

        let endpoint = var("NEXUS_API_ENDPOINT");

        let log_level_str = var("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(log_level_str))?;

        Ok(Self {
            base_url,
            endpoint,
            log_level,
        })
    }

    pub fn client_config(&self) -> nexus_client::Config {
        let mut builder = nexus_client::Config::builder();
        if let Some(base_url) = &self.base_url {
            builder = builder.with_base_url(base_url);
        }
        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.base_url.is_none());
        assert_eq!(config.client_config().endpoint(), "/api/gemini");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("NEXUS_API_BASE_URL", "https://nexus.example"),
            ("NEXUS_API_ENDPOINT", "/api/v2"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(
            config.client_config().endpoint_url(),
            "https://nexus.example/api/v2"
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("RUST_LOG", "chatty")]),
            Err(ConfigError::InvalidLogLevel(_))
        ));
        assert!(matches!(
            load(&[("NEXUS_API_BASE_URL", "localhost:3000")]),
            Err(ConfigError::InvalidValue(_, _))
        ));
    }
}
