//! Client configuration.
//!
//! Loaded from environment variables with fallback to defaults.

use std::env;

/// Where the backend API lives.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, including the `/api` prefix.
    pub api_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// `SAUDA_API_URL` defaults to a local development backend.
    pub fn load() -> Result<Self, ConfigError> {
        let api_url = env::var("SAUDA_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string());

        Self::with_api_url(api_url)
    }

    /// Build a config from an explicit base URL.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_url = api_url.into().trim_end_matches('/').to_string();

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("SAUDA_API_URL".to_string()));
        }

        Ok(ClientConfig { api_url })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_api_url_strips_trailing_slash() {
        let config = ClientConfig::with_api_url("http://localhost:8000/api/").unwrap();
        assert_eq!(config.api_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_with_api_url_rejects_non_http() {
        assert!(ClientConfig::with_api_url("localhost:8000").is_err());
        assert!(ClientConfig::with_api_url("").is_err());
    }
}
