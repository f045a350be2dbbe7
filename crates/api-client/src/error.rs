//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Remote failures are surfaced as-is; nothing here is retried or interpreted
/// beyond status-code classification.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file I/O during a streaming call failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No stored CLI token and no token in the environment
    #[error("Not logged in - run `siteglot login` first")]
    NotAuthenticated,

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Interactive login did not complete in time
    #[error("Login not confirmed after {0} seconds")]
    LoginTimeout(u64),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }

    /// Check if this is an authentication failure (401/403 or no token)
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::NotAuthenticated => true,
            Self::ApiResponse { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(ApiError::api_response(404, "missing").is_client_error());
        assert!(ApiError::api_response(502, "bad gateway").is_server_error());
        assert!(ApiError::api_response(401, "denied").is_auth_error());
        assert!(ApiError::NotAuthenticated.is_auth_error());
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::api_response(409, "site already exists");
        assert_eq!(err.to_string(), "API error (409): site already exists");
    }
}
