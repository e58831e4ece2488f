//! Resolution of the ledger API endpoint

use std::time::Duration;

use anyhow::{anyhow, Result};
use url::Url;

/// Base URL used when neither the flag nor the environment sets one
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Environment variable consulted when no --api-url flag is given
pub const API_URL_ENV: &str = "LEDGERBOARD_API_URL";

/// How long a single request may run before it is abandoned
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved connection settings for the ledger API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Resolve the base URL: flag, then environment, then the default
    pub fn resolve(flag: Option<&str>) -> Result<Self> {
        let candidate = match flag {
            Some(value) => value.to_string(),
            None => std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        };

        let parsed =
            Url::parse(&candidate).map_err(|e| anyhow!("Invalid API URL '{}': {}", candidate, e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(anyhow!(
                "Unsupported URL scheme '{}' (expected http or https)",
                parsed.scheme()
            ));
        }

        Ok(Self {
            base_url: candidate.trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_takes_precedence_and_trailing_slash_is_trimmed() {
        let config = ApiConfig::resolve(Some("http://localhost:9000/")).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_env_then_default_resolution() {
        std::env::set_var(API_URL_ENV, "https://ledger.example.com");
        let from_env = ApiConfig::resolve(None).unwrap();
        assert_eq!(from_env.base_url, "https://ledger.example.com");

        std::env::remove_var(API_URL_ENV);
        let fallback = ApiConfig::resolve(None).unwrap();
        assert_eq!(fallback.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_rejects_urls_that_are_not_http() {
        assert!(ApiConfig::resolve(Some("ftp://localhost")).is_err());
        assert!(ApiConfig::resolve(Some("not a url")).is_err());
    }
}
