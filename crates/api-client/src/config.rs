//! Configuration for the Siteglot API client
//!
//! Supports environment-based configuration with production defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default production API URL
const DEFAULT_API_URL: &str = "https://api.siteglot.io/v1";

/// Default hosted editor URL
const DEFAULT_EDITOR_URL: &str = "https://editor.siteglot.io";

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (typically a local service stub)
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Production
    }
}

impl Environment {
    /// Parse from environment variable
    pub fn from_env() -> Self {
        match env::var("SITEGLOT_ENV")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" | "local" => Self::Development,
            "staging" | "stage" => Self::Staging,
            _ => Self::Production,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for the Siteglot API
    pub api_url: String,
    /// Hosted editor URL (derived default)
    pub editor_url: String,
    /// Request timeout
    #[serde(with = "secs_serde")]
    pub timeout: Duration,
    /// Current environment
    pub environment: Environment,
}

mod secs_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            editor_url: DEFAULT_EDITOR_URL.to_string(),
            timeout: Duration::from_secs(120),
            environment: Environment::default(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `SITEGLOT_API_URL`: Base URL for the Siteglot API
    /// - `SITEGLOT_EDITOR_URL`: Hosted editor URL
    /// - `SITEGLOT_ENV`: Environment (development/staging/production)
    /// - `SITEGLOT_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let environment = Environment::from_env();

        let api_url =
            env::var("SITEGLOT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let editor_url =
            env::var("SITEGLOT_EDITOR_URL").unwrap_or_else(|_| DEFAULT_EDITOR_URL.to_string());

        // Translation-file generation can take a while server-side, so the
        // default timeout is generous.
        let timeout = env::var("SITEGLOT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(120));

        Ok(Self {
            api_url,
            editor_url,
            timeout,
            environment,
        })
    }

    /// Create development configuration (local service)
    #[must_use]
    pub fn development() -> Self {
        Self {
            api_url: "http://localhost:4000/v1".to_string(),
            editor_url: "http://localhost:4100".to_string(),
            timeout: Duration::from_secs(10),
            environment: Environment::Development,
        }
    }

    /// Builder-style method to set the API URL
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Builder-style method to set the editor URL
    #[must_use]
    pub fn with_editor_url(mut self, url: impl Into<String>) -> Self {
        self.editor_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.api_url.is_empty() {
            return Err(ApiError::config("api_url cannot be empty"));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ApiError::config("api_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.api_url.contains("siteglot.io"));
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_development_config() {
        let config = ClientConfig::development();
        assert!(config.api_url.contains("localhost"));
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_api_url("https://staging-api.siteglot.io/v1")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.api_url, "https://staging-api.siteglot.io/v1");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_validation() {
        let valid = ClientConfig::default();
        assert!(valid.validate().is_ok());

        let invalid = ClientConfig::default().with_api_url("");
        assert!(invalid.validate().is_err());

        let bad_scheme = ClientConfig::default().with_api_url("ftp://siteglot.io");
        assert!(bad_scheme.validate().is_err());
    }
}
