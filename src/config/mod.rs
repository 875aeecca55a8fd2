//! Configuration types for the Cloze API SDK.
//!
//! This module provides the configuration used to construct a
//! [`ClozeClient`](crate::ClozeClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClozeConfig`]: The immutable configuration holding credentials and transport settings
//! - [`ClozeConfigBuilder`]: A builder for constructing [`ClozeConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`OAuthToken`]: A validated OAuth access token newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use cloze_sdk::{ApiKey, ClozeConfig};
//! use std::time::Duration;
//!
//! let config = ClozeConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.cloze.com");
//! ```

mod newtypes;

use newtypes::ensure_header_safe;

pub use newtypes::{ApiKey, BaseUrl, OAuthToken};

use std::time::Duration;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.cloze.com";

/// Cloze API release this SDK targets.
pub const API_VERSION: &str = "2025.10";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "CLOZE_API_KEY";
/// Environment variable holding the OAuth access token.
pub const ENV_OAUTH_TOKEN: &str = "CLOZE_OAUTH_TOKEN";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "CLOZE_BASE_URL";
/// Environment variable overriding the timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "CLOZE_TIMEOUT_SECS";
/// Environment variable that disables TLS verification when set to `false`.
pub const ENV_SSL_VERIFY: &str = "CLOZE_SSL_VERIFY";

/// Configuration for the Cloze API SDK.
///
/// Holds the credentials and transport settings for a client. A config is
/// validated once by [`ClozeConfigBuilder::build`] and never changes after.
///
/// # Thread Safety
///
/// `ClozeConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::{ClozeConfig, OAuthToken};
///
/// let config = ClozeConfig::builder()
///     .oauth_token(OAuthToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.verify_tls());
/// assert!(config.credentials().uses_oauth());
/// ```
#[derive(Clone, Debug)]
pub struct ClozeConfig {
    credentials: Credentials,
    base_url: BaseUrl,
    timeout: Duration,
    verify_tls: bool,
    user_agent_prefix: Option<String>,
}

impl ClozeConfig {
    /// Creates a new builder for constructing a `ClozeConfig`.
    #[must_use]
    pub fn builder() -> ClozeConfigBuilder {
        ClozeConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads `CLOZE_API_KEY`, `CLOZE_OAUTH_TOKEN`, `CLOZE_BASE_URL`,
    /// `CLOZE_TIMEOUT_SECS` and `CLOZE_SSL_VERIFY`. Empty variables are
    /// treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if no credential is set or a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// This is the implementation behind [`from_env`](Self::from_env), exposed
    /// so that callers can source settings from somewhere other than the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if no credential is set or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();

        if let Some(key) = get(ENV_API_KEY) {
            builder = builder.api_key(ApiKey::new(key)?);
        }
        if let Some(token) = get(ENV_OAUTH_TOKEN) {
            builder = builder.oauth_token(OAuthToken::new(token)?);
        }
        if let Some(url) = get(ENV_BASE_URL) {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout { value: raw })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(verify) = get(ENV_SSL_VERIFY) {
            builder = builder.verify_tls(!verify.trim().eq_ignore_ascii_case("false"));
        }

        builder.build()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the `User-Agent` header value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> String {
        let prefix = self
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        format!("{prefix}cloze-sdk-rust/{}", crate::SDK_VERSION)
    }
}

// Verify ClozeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClozeConfig>();
};

/// Builder for constructing [`ClozeConfig`] instances.
///
/// At least one of `api_key` or `oauth_token` is required. All other fields
/// have defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.cloze.com`
/// - `timeout`: 30 seconds
/// - `verify_tls`: `true`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClozeConfigBuilder {
    api_key: Option<ApiKey>,
    oauth_token: Option<OAuthToken>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    verify_tls: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl ClozeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the OAuth access token.
    ///
    /// When both an API key and a token are set, the token is used for the
    /// `Authorization` header.
    #[must_use]
    pub fn oauth_token(mut self, token: OAuthToken) -> Self {
        self.oauth_token = Some(token);
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets whether TLS certificates are verified.
    ///
    /// Disabling verification is meant for testing against local servers only.
    #[must_use]
    pub const fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = Some(verify);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClozeConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if neither `api_key` nor
    /// `oauth_token` is set, [`ConfigError::InvalidTimeout`] for a zero
    /// timeout, and [`ConfigError::InvalidHeaderValue`] for a user agent
    /// prefix that cannot be sent in a header.
    pub fn build(self) -> Result<ClozeConfig, ConfigError> {
        let credentials = Credentials::new(self.api_key, self.oauth_token)?;

        if let Some(prefix) = &self.user_agent_prefix {
            ensure_header_safe(prefix, "user agent prefix")?;
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: format!("{timeout:?}"),
            });
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(ClozeConfig {
            credentials,
            base_url,
            timeout,
            verify_tls: self.verify_tls.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_builder_requires_a_credential() {
        let result = ClozeConfigBuilder::new().build();
        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ClozeConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.verify_tls());
        assert!(config.user_agent_prefix().is_none());
        assert!(!config.credentials().uses_oauth());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ClozeConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .oauth_token(OAuthToken::new("token").unwrap())
            .base_url(BaseUrl::new("https://custom.api.com").unwrap())
            .timeout(Duration::from_secs(60))
            .verify_tls(false)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://custom.api.com");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(!config.verify_tls());
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert!(config.credentials().uses_oauth());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = ClozeConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
    }

    #[test]
    fn test_builder_rejects_user_agent_prefix_with_newline() {
        let result = ClozeConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .user_agent_prefix("MyApp/1.0\r\nX-Injected: 1")
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderValue {
                field: "user agent prefix"
            })
        ));
    }

    #[test]
    fn test_user_agent_format() {
        let config = ClozeConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();
        assert!(config.user_agent().starts_with("cloze-sdk-rust/"));

        let config = ClozeConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        assert!(config.user_agent().starts_with("MyApp/1.0 | cloze-sdk-rust/"));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = ClozeConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "env-key"),
            (ENV_BASE_URL, "http://localhost:9000"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_SSL_VERIFY, "false"),
        ]))
        .unwrap();

        assert_eq!(config.credentials().query_api_key(), Some("env-key"));
        assert_eq!(config.base_url().as_ref(), "http://localhost:9000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(!config.verify_tls());
    }

    #[test]
    fn test_from_lookup_verifies_tls_unless_explicitly_false() {
        let config =
            ClozeConfig::from_lookup(lookup_from(&[(ENV_OAUTH_TOKEN, "t"), (ENV_SSL_VERIFY, "0")]))
                .unwrap();
        assert!(config.verify_tls());

        let config = ClozeConfig::from_lookup(lookup_from(&[(ENV_OAUTH_TOKEN, "t")])).unwrap();
        assert!(config.verify_tls());
    }

    #[test]
    fn test_from_lookup_treats_empty_values_as_unset() {
        let result = ClozeConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, ""),
            (ENV_OAUTH_TOKEN, "  "),
        ]));
        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let result =
            ClozeConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "k"), (ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidTimeout { value }) if value == "soon"
        ));
    }

    #[test]
    fn test_from_lookup_rejects_key_with_control_characters() {
        let result = ClozeConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "key\n")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderValue { field: "API key" })
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClozeConfig>();
    }
}
