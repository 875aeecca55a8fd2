//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use std::fmt;

/// Checks that `value` can be sent as (part of) an HTTP header value.
pub(super) fn ensure_header_safe(value: &str, field: &'static str) -> Result<(), ConfigError> {
    HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|_| ConfigError::InvalidHeaderValue { field })
}

/// A validated Cloze API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output. Cloze API keys grant full account access, so they are treated
/// as secrets.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, and
    /// [`ConfigError::InvalidHeaderValue`] if it cannot be sent in a header.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        ensure_header_safe(&key, "API key")?;
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated OAuth 2.0 access token.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `OAuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::OAuthToken;
///
/// let token = OAuthToken::new("access-token").unwrap();
/// assert_eq!(format!("{:?}", token), "OAuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthToken(String);

impl OAuthToken {
    /// Creates a new validated OAuth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyOAuthToken`] if the token is empty, and
    /// [`ConfigError::InvalidHeaderValue`] if it cannot be sent in a header.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyOAuthToken);
        }
        ensure_header_safe(&token, "OAuth token")?;
        Ok(Self(token))
    }
}

impl AsRef<str> for OAuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OAuthToken(*****)")
    }
}

/// A validated API base URL.
///
/// The URL must use the `http` or `https` scheme and have a non-empty host.
/// Trailing slashes are removed so that versioned paths such as
/// `/v1/user/profile` can be appended directly.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::BaseUrl;
///
/// let url = BaseUrl::new("https://api.cloze.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.cloze.com");
/// assert_eq!(url.host_name(), Some("api.cloze.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        // Query strings and fragments would break path joining
        if remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_oauth_token_rejects_empty_string() {
        assert!(matches!(
            OAuthToken::new(""),
            Err(ConfigError::EmptyOAuthToken)
        ));
    }

    #[test]
    fn test_oauth_token_masks_value_in_debug() {
        let token = OAuthToken::new("bearer-value").unwrap();
        assert_eq!(format!("{:?}", token), "OAuthToken(*****)");
        assert_eq!(token.as_ref(), "bearer-value");
    }

    #[test]
    fn test_credentials_reject_header_breaking_characters() {
        assert!(matches!(
            ApiKey::new("key\nX-Injected: 1"),
            Err(ConfigError::InvalidHeaderValue { field: "API key" })
        ));
        assert!(matches!(
            OAuthToken::new("tok\ren"),
            Err(ConfigError::InvalidHeaderValue {
                field: "OAuth token"
            })
        ));
        assert!(ApiKey::new("key-with_symbols.123").is_ok());
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("https://api.cloze.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("api.cloze.com"));

        // With port
        let url = BaseUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("localhost"));

        // With path prefix
        let url = BaseUrl::new("https://proxy.example.com/cloze/").unwrap();
        assert_eq!(url.as_ref(), "https://proxy.example.com/cloze");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        // No scheme
        assert!(BaseUrl::new("api.cloze.com").is_err());

        // Empty host
        assert!(BaseUrl::new("https://").is_err());

        // Unsupported scheme
        assert!(BaseUrl::new("ftp://api.cloze.com").is_err());

        // Query string
        assert!(BaseUrl::new("https://api.cloze.com?x=1").is_err());
    }
}
