//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FRONTIER_BOOKS_API_URL` - Backend base URL (default: the hosted store)
//! - `FRONTIER_BOOKS_DATA_DIR` - Local data directory (default: `.frontier_books`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Hosted backend used when `FRONTIER_BOOKS_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://findthefrontier.ca/frontier_books";

/// Data directory used when `FRONTIER_BOOKS_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = ".frontier_books";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API
    pub api_url: Url,
    /// Directory holding the session token and cart mirror
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `FRONTIER_BOOKS_API_URL` is set but does not
    /// parse as an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_api_url(&get_env_or_default(
            "FRONTIER_BOOKS_API_URL",
            DEFAULT_API_URL,
        ))?;
        let data_dir = PathBuf::from(get_env_or_default(
            "FRONTIER_BOOKS_DATA_DIR",
            DEFAULT_DATA_DIR,
        ));

        Ok(Self { api_url, data_dir })
    }

    /// Base URL with any trailing slash removed, ready for path joining.
    #[must_use]
    pub fn api_base(&self) -> String {
        self.api_url.as_str().trim_end_matches('/').to_string()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate the backend base URL.
fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        ConfigError::InvalidEnvVar("FRONTIER_BOOKS_API_URL".to_string(), e.to_string())
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "FRONTIER_BOOKS_API_URL".to_string(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_api_url_parses() {
        assert!(parse_api_url(DEFAULT_API_URL).is_ok());
    }

    #[test]
    fn rejects_unparseable_urls() {
        assert!(parse_api_url("not a url").is_err());
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(parse_api_url("ftp://findthefrontier.ca").is_err());
    }

    #[test]
    fn api_base_trims_trailing_slash() {
        let config = ClientConfig {
            api_url: parse_api_url("http://localhost:8000/").unwrap(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        };
        assert_eq!(config.api_base(), "http://localhost:8000");

        let config = ClientConfig {
            api_url: parse_api_url(DEFAULT_API_URL).unwrap(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        };
        assert_eq!(config.api_base(), DEFAULT_API_URL);
    }
}
