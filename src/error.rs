//! Error types for the Cloze API SDK.
//!
//! This module contains the error type returned while building a client
//! configuration or a client. Errors raised while executing API calls live
//! in [`crate::clients::ApiError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use cloze_sdk::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Every variant is raised before any network access takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither an API key nor an OAuth token was supplied.
    #[error("Either api_key or oauth_token must be provided")]
    MissingCredentials,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Cloze API key.")]
    EmptyApiKey,

    /// OAuth token cannot be empty.
    #[error("OAuth token cannot be empty. Please provide a valid OAuth 2.0 access token.")]
    EmptyOAuthToken,

    /// A credential or header value contains characters that cannot be sent
    /// in an HTTP header (control characters such as `\n`).
    #[error("Invalid {field}: the value contains characters that are not allowed in an HTTP header.")]
    InvalidHeaderValue {
        /// Which value was rejected (`API key`, `OAuth token`, `user agent prefix`).
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://api.cloze.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Request timeout is invalid.
    #[error("Invalid timeout '{value}'. Expected a positive number of seconds.")]
    InvalidTimeout {
        /// The invalid value that was provided.
        value: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The reason reported by the HTTP library.
        reason: String,
    },
}
