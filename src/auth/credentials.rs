//! Credential handling for Cloze API authentication.
//!
//! This module provides the [`Credentials`] type, which holds the API key
//! and/or OAuth token a client authenticates with and decides how each is
//! presented on the wire.

use crate::config::{ApiKey, OAuthToken};
use crate::error::ConfigError;

/// Authentication material for Cloze API calls.
///
/// At least one of an API key or an OAuth token is always present. When both
/// are supplied, the OAuth token is used for the `Authorization` header and
/// the API key is never sent as a query parameter.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::{ApiKey, Credentials, OAuthToken};
///
/// let credentials = Credentials::new(
///     Some(ApiKey::new("key").unwrap()),
///     Some(OAuthToken::new("token").unwrap()),
/// )
/// .unwrap();
///
/// assert_eq!(credentials.bearer_token(), "token");
/// assert!(credentials.query_api_key().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    api_key: Option<ApiKey>,
    oauth_token: Option<OAuthToken>,
}

impl Credentials {
    /// Creates credentials from an optional API key and an optional OAuth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if both are `None`.
    pub fn new(
        api_key: Option<ApiKey>,
        oauth_token: Option<OAuthToken>,
    ) -> Result<Self, ConfigError> {
        if api_key.is_none() && oauth_token.is_none() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(Self {
            api_key,
            oauth_token,
        })
    }

    /// Creates API-key-only credentials.
    #[must_use]
    pub const fn from_api_key(api_key: ApiKey) -> Self {
        Self {
            api_key: Some(api_key),
            oauth_token: None,
        }
    }

    /// Creates OAuth-token-only credentials.
    #[must_use]
    pub const fn from_oauth_token(oauth_token: OAuthToken) -> Self {
        Self {
            api_key: None,
            oauth_token: Some(oauth_token),
        }
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the OAuth token, if configured.
    #[must_use]
    pub const fn oauth_token(&self) -> Option<&OAuthToken> {
        self.oauth_token.as_ref()
    }

    /// Returns the token sent as `Authorization: Bearer <token>`.
    ///
    /// The OAuth token wins when both credentials are present.
    #[must_use]
    pub fn bearer_token(&self) -> &str {
        match (&self.oauth_token, &self.api_key) {
            (Some(token), _) => token.as_ref(),
            (None, Some(key)) => key.as_ref(),
            // Unreachable through the public constructors
            (None, None) => "",
        }
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.bearer_token())
    }

    /// Returns the API key to send as the `api_key` query parameter.
    ///
    /// Only API-key clients get the query fallback; `None` whenever an OAuth
    /// token is configured.
    #[must_use]
    pub fn query_api_key(&self) -> Option<&str> {
        if self.oauth_token.is_some() {
            return None;
        }
        self.api_key.as_ref().map(AsRef::as_ref)
    }

    /// Returns `true` if requests are authenticated with the OAuth token.
    #[must_use]
    pub const fn uses_oauth(&self) -> bool {
        self.oauth_token.is_some()
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};
