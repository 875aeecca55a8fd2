//! Error types for Cloze API calls.
//!
//! Every failed call resolves to exactly one [`ApiError`] variant, so callers
//! can branch on the kind of failure:
//!
//! - [`ApiError::Authentication`]: HTTP 401, fix the credentials
//! - [`ApiError::RateLimit`]: HTTP 429, slow down and retry
//! - [`ApiError::Validation`]: the call was malformed and never sent
//! - [`ApiError::Api`]: anything else (transport failures, non-JSON bodies,
//!   and responses carrying a non-zero `errorcode`)
//!
//! # Example
//!
//! ```rust,ignore
//! use cloze_sdk::ApiError;
//!
//! match client.account().profile().await {
//!     Ok(profile) => println!("Profile: {profile}"),
//!     Err(ApiError::Authentication { .. }) => println!("Check your API key"),
//!     Err(ApiError::RateLimit { .. }) => println!("Slow down"),
//!     Err(ApiError::Validation { message }) => println!("Bad call: {message}"),
//!     Err(ApiError::Api { message, errorcode, .. }) => {
//!         println!("API error {errorcode:?}: {message}");
//!     }
//! }
//! ```

use thiserror::Error;

use crate::clients::http_response::InboundResponse;

/// Message carried by [`ApiError::RateLimit`].
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded";

/// Message carried by [`ApiError::Authentication`].
pub const AUTHENTICATION_MESSAGE: &str =
    "Authentication failed. Check your API key or OAuth token.";

/// Message used when an error response has no `message` field.
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// A classified failure of a Cloze API call.
///
/// Values are created once and never mutated. The optional `response` holds
/// the raw response that produced the error, for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The API rejected the credentials (HTTP 401).
    #[error("{message}")]
    Authentication {
        /// Human-readable description.
        message: String,
        /// The originating response.
        response: Option<InboundResponse>,
    },

    /// The API is throttling requests (HTTP 429).
    #[error("{message}")]
    RateLimit {
        /// Human-readable description.
        message: String,
        /// The originating response.
        response: Option<InboundResponse>,
    },

    /// Caller-supplied arguments violated a precondition; nothing was sent.
    #[error("{message}")]
    Validation {
        /// Human-readable description.
        message: String,
    },

    /// Any other failure.
    #[error("{message}")]
    Api {
        /// Human-readable description.
        message: String,
        /// The application error code from the response body, if any.
        errorcode: Option<i64>,
        /// The originating response; `None` for transport failures.
        response: Option<InboundResponse>,
    },
}

impl ApiError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates the error for an exchange that could not be completed.
    #[must_use]
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Api {
            message: format!("Request failed: {cause}"),
            errorcode: None,
            response: None,
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::RateLimit { message, .. }
            | Self::Validation { message }
            | Self::Api { message, .. } => message,
        }
    }

    /// Returns the application error code, if the API supplied one.
    #[must_use]
    pub const fn errorcode(&self) -> Option<i64> {
        match self {
            Self::Api { errorcode, .. } => *errorcode,
            _ => None,
        }
    }

    /// Returns the response that produced this error, if any.
    #[must_use]
    pub const fn response(&self) -> Option<&InboundResponse> {
        match self {
            Self::Authentication { response, .. }
            | Self::RateLimit { response, .. }
            | Self::Api { response, .. } => response.as_ref(),
            Self::Validation { .. } => None,
        }
    }

    /// Returns `true` if repeating the same call later may succeed.
    ///
    /// Only rate limiting qualifies; other failures need a change on the
    /// caller's side first.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let error = ApiError::RateLimit {
            message: RATE_LIMIT_MESSAGE.to_string(),
            response: None,
        };
        assert_eq!(error.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn test_transport_error_has_no_code_or_response() {
        let error = ApiError::transport("connection refused");
        assert_eq!(error.message(), "Request failed: connection refused");
        assert!(error.errorcode().is_none());
        assert!(error.response().is_none());
        assert!(matches!(error, ApiError::Api { .. }));
    }

    #[test]
    fn test_errorcode_only_on_api_variant() {
        let error = ApiError::Api {
            message: "API error: Invalid data".to_string(),
            errorcode: Some(1),
            response: None,
        };
        assert_eq!(error.errorcode(), Some(1));

        let error = ApiError::validation("bad");
        assert!(error.errorcode().is_none());
    }

    #[test]
    fn test_response_is_kept_for_diagnostics() {
        let response = InboundResponse::new(401, "nope");
        let error = ApiError::Authentication {
            message: AUTHENTICATION_MESSAGE.to_string(),
            response: Some(response.clone()),
        };
        assert_eq!(error.response(), Some(&response));
    }

    #[test]
    fn test_only_rate_limit_is_retryable() {
        assert!(ApiError::RateLimit {
            message: RATE_LIMIT_MESSAGE.to_string(),
            response: None,
        }
        .is_retryable());
        assert!(!ApiError::Authentication {
            message: AUTHENTICATION_MESSAGE.to_string(),
            response: None,
        }
        .is_retryable());
        assert!(!ApiError::validation("x").is_retryable());
        assert!(!ApiError::transport("timeout").is_retryable());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &ApiError::validation("x");
        let _ = error;
    }
}
