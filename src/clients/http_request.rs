//! HTTP request types for the Cloze API SDK.
//!
//! This module provides the two request representations used by the client:
//!
//! - [`ApiRequest`]: what a caller asks for (method, path, query, body, and
//!   whether the API key should travel in the query string)
//! - [`OutboundRequest`]: the fully specified request with headers and the
//!   final query string, produced by [`OutboundRequest::build`] without any I/O

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::auth::Credentials;
use crate::clients::errors::ApiError;

/// HTTP methods used by the Cloze API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar query parameter value.
///
/// Booleans render as `true` / `false`.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::clients::QueryValue;
///
/// assert_eq!(QueryValue::from(true).to_string(), "true");
/// assert_eq!(QueryValue::from(25_u32).to_string(), "25");
/// assert_eq!(QueryValue::from("team").to_string(), "team");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! query_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

query_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Query parameters keyed by name.
///
/// Ordering carries no meaning to the API; a `BTreeMap` keeps rendered URLs
/// deterministic.
pub type QueryParams = BTreeMap<String, QueryValue>;

/// A call to the Cloze API as described by the caller.
///
/// Use [`ApiRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::clients::{ApiRequest, HttpMethod};
/// use serde_json::json;
///
/// let request = ApiRequest::builder(HttpMethod::Get, "/v1/people/find")
///     .query_param("pagesize", 50)
///     .query_param("countonly", false)
///     .build();
///
/// let request = ApiRequest::builder(HttpMethod::Post, "/v1/people/create")
///     .body(json!({"name": "Ada Lovelace"}))
///     .build();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The versioned API path, starting with `/`.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: Option<QueryParams>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Whether to add the API key as an `api_key` query parameter.
    pub api_key_in_query: bool,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    path: String,
    query: Option<QueryParams>,
    body: Option<serde_json::Value>,
    api_key_in_query: bool,
}

impl ApiRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            api_key_in_query: false,
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query
            .get_or_insert_with(QueryParams::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Requests that the API key be sent as an `api_key` query parameter.
    ///
    /// Ignored for clients authenticated with an OAuth token.
    #[must_use]
    pub const fn api_key_in_query(mut self, enabled: bool) -> Self {
        self.api_key_in_query = enabled;
        self
    }

    /// Builds the [`ApiRequest`].
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            path: self.path,
            query: self.query,
            body: self.body,
            api_key_in_query: self.api_key_in_query,
        }
    }
}

/// A fully specified request, ready to hand to a [`Transport`](crate::clients::Transport).
///
/// Built fresh for every call and never reused.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The versioned API path, starting with `/`.
    pub path: String,
    /// The final query parameters, including `api_key` when injected.
    pub query: QueryParams,
    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// Headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl OutboundRequest {
    /// Builds the outbound request for `request`.
    ///
    /// Sets `Accept`, `Content-Type`, `User-Agent` and `Authorization`
    /// headers, copies the caller's query parameters and adds `api_key` when
    /// requested and the credentials hold an API key but no OAuth token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the path does not start with `/`.
    pub fn build(
        request: &ApiRequest,
        credentials: &Credentials,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        if !request.path.starts_with('/') {
            return Err(ApiError::validation(format!(
                "Invalid API path '{}': paths must begin with '/'",
                request.path
            )));
        }

        let mut query = request.query.clone().unwrap_or_default();
        if request.api_key_in_query {
            if let Some(api_key) = credentials.query_api_key() {
                query.insert("api_key".to_string(), QueryValue::from(api_key));
            }
        }

        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), user_agent.to_string());
        headers.insert(
            "Authorization".to_string(),
            credentials.authorization_header(),
        );

        Ok(Self {
            method: request.method,
            path: request.path.clone(),
            query,
            body: request.body.clone(),
            headers,
        })
    }

    /// Returns the query string, percent-encoded and without a leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&value.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns the full request URL against `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if self.query.is_empty() {
            format!("{base}{}", self.path)
        } else {
            format!("{base}{}?{}", self.path, self.query_string())
        }
    }

    /// Returns the serialized JSON body, if any.
    #[must_use]
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, OAuthToken};
    use serde_json::json;

    const UA: &str = "cloze-sdk-rust/test";

    fn api_key_credentials() -> Credentials {
        Credentials::from_api_key(ApiKey::new("test_key").unwrap())
    }

    fn oauth_credentials() -> Credentials {
        Credentials::from_oauth_token(OAuthToken::new("test_token").unwrap())
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_query_value_rendering() {
        assert_eq!(QueryValue::from(true).to_string(), "true");
        assert_eq!(QueryValue::from(false).to_string(), "false");
        assert_eq!(QueryValue::from(-3_i32).to_string(), "-3");
        assert_eq!(QueryValue::from(1.5).to_string(), "1.5");
        assert_eq!(QueryValue::from("a b").to_string(), "a b");
    }

    #[test]
    fn test_builder_defaults() {
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/user/profile").build();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/v1/user/profile");
        assert!(request.query.is_none());
        assert!(request.body.is_none());
        assert!(!request.api_key_in_query);
    }

    #[test]
    fn test_build_sets_fixed_headers() {
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/user/profile").build();
        let outbound = OutboundRequest::build(&request, &api_key_credentials(), UA).unwrap();

        assert_eq!(outbound.headers["Accept"], "application/json");
        assert_eq!(outbound.headers["Content-Type"], "application/json");
        assert_eq!(outbound.headers["User-Agent"], UA);
        assert_eq!(outbound.headers["Authorization"], "Bearer test_key");
    }

    #[test]
    fn test_build_uses_oauth_token_for_authorization() {
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/user/profile").build();
        let outbound = OutboundRequest::build(&request, &oauth_credentials(), UA).unwrap();
        assert_eq!(outbound.headers["Authorization"], "Bearer test_token");
    }

    #[test]
    fn test_build_injects_api_key_for_api_key_client() {
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/user/profile")
            .api_key_in_query(true)
            .build();
        let outbound = OutboundRequest::build(&request, &api_key_credentials(), UA).unwrap();

        assert_eq!(
            outbound.query.get("api_key"),
            Some(&QueryValue::from("test_key"))
        );
    }

    #[test]
    fn test_build_never_injects_api_key_for_oauth_client() {
        let credentials = Credentials::new(
            Some(ApiKey::new("test_key").unwrap()),
            Some(OAuthToken::new("test_token").unwrap()),
        )
        .unwrap();
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/user/profile")
            .api_key_in_query(true)
            .build();
        let outbound = OutboundRequest::build(&request, &credentials, UA).unwrap();

        assert!(!outbound.query.contains_key("api_key"));
    }

    #[test]
    fn test_build_without_flag_does_not_inject_api_key() {
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/user/profile").build();
        let outbound = OutboundRequest::build(&request, &api_key_credentials(), UA).unwrap();
        assert!(outbound.query.is_empty());
    }

    #[test]
    fn test_build_copies_body_and_query() {
        let request = ApiRequest::builder(HttpMethod::Post, "/v1/people/create")
            .query_param("pagesize", 10)
            .body(json!({"name": "Ada"}))
            .build();
        let outbound = OutboundRequest::build(&request, &api_key_credentials(), UA).unwrap();

        assert_eq!(outbound.body, Some(json!({"name": "Ada"})));
        assert_eq!(outbound.body_text().as_deref(), Some(r#"{"name":"Ada"}"#));
        assert_eq!(outbound.query.get("pagesize"), Some(&QueryValue::Integer(10)));
    }

    #[test]
    fn test_build_keeps_empty_body() {
        let request = ApiRequest::builder(HttpMethod::Post, "/v1/people/update")
            .body(json!({}))
            .build();
        let outbound = OutboundRequest::build(&request, &api_key_credentials(), UA).unwrap();
        assert_eq!(outbound.body_text().as_deref(), Some("{}"));
    }

    #[test]
    fn test_build_rejects_relative_path() {
        let request = ApiRequest::builder(HttpMethod::Get, "v1/user/profile").build();
        let result = OutboundRequest::build(&request, &api_key_credentials(), UA);
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }

    #[test]
    fn test_url_encodes_query() {
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/people/find")
            .query_param("freeformquery", "ada lovelace")
            .query_param("countonly", true)
            .build();
        let outbound = OutboundRequest::build(&request, &api_key_credentials(), UA).unwrap();

        assert_eq!(
            outbound.url("https://api.cloze.com/"),
            "https://api.cloze.com/v1/people/find?countonly=true&freeformquery=ada%20lovelace"
        );
    }

    #[test]
    fn test_url_without_query() {
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/webhooks").build();
        let outbound = OutboundRequest::build(&request, &oauth_credentials(), UA).unwrap();
        assert_eq!(
            outbound.url("https://api.cloze.com"),
            "https://api.cloze.com/v1/webhooks"
        );
    }
}
