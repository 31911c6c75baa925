//! Error types for the odds feed integration.
//!
//! Provides typed errors for API communication, rate limiting, and
//! response decoding failures.

use thiserror::Error;

/// Errors that can occur when talking to the odds feed.
#[derive(Debug, Error)]
pub enum OddsApiError {
    /// API request failed.
    #[error("API error: {status_code} - {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Error message from the feed.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimit {
        /// Seconds to wait before retry.
        retry_after_secs: u64,
    },

    /// Network error.
    #[error("network error: {0}")]
    Network(String),

    /// Request timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl OddsApiError {
    /// Creates an API error from status code and message.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a rate limit error.
    pub fn rate_limit(retry_after_secs: u64) -> Self {
        Self::RateLimit { retry_after_secs }
    }

    /// Returns true if the error indicates the request should be retried later.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) | Self::RateLimit { .. } => true,
            Self::Api { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }

    /// Returns the suggested retry delay in seconds, if applicable.
    #[must_use]
    pub fn retry_delay_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after_secs } => Some(*retry_after_secs),
            Self::Network(_) | Self::Timeout(_) => Some(1),
            Self::Api { status_code, .. } if *status_code >= 500 => Some(2),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OddsApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for OddsApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for odds feed operations.
pub type Result<T> = std::result::Result<T, OddsApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Error Construction Tests ====================

    #[test]
    fn test_api_error_construction() {
        let err = OddsApiError::api(400, "bad request");
        assert!(matches!(
            err,
            OddsApiError::Api {
                status_code: 400,
                ..
            }
        ));
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("bad request"));
    }

    #[test]
    fn test_rate_limit_error_construction() {
        let err = OddsApiError::rate_limit(60);
        assert!(err.to_string().contains("60"));
        assert_eq!(err.retry_delay_secs(), Some(60));
    }

    // ==================== Transient Classification Tests ====================

    #[test]
    fn test_network_error_is_transient() {
        let err = OddsApiError::Network("connection refused".to_string());
        assert!(err.is_transient());
        assert_eq!(err.retry_delay_secs(), Some(1));
    }

    #[test]
    fn test_server_error_is_transient() {
        let err = OddsApiError::api(503, "service unavailable");
        assert!(err.is_transient());
        assert_eq!(err.retry_delay_secs(), Some(2));
    }

    #[test]
    fn test_client_error_is_not_transient() {
        let err = OddsApiError::api(401, "bad key");
        assert!(!err.is_transient());
        assert_eq!(err.retry_delay_secs(), None);
    }

    #[test]
    fn test_configuration_error_is_not_transient() {
        let err = OddsApiError::Configuration("missing API key".to_string());
        assert!(!err.is_transient());
    }
}
