//! Transport layer for the Cloze API SDK.
//!
//! A [`Transport`] performs exactly one HTTP exchange. Any exchange that
//! completes yields an [`InboundResponse`], including 4xx and 5xx statuses;
//! only a failure to complete the exchange at all (DNS, connection, TLS,
//! timeout) is a [`TransportError`].
//!
//! [`ReqwestTransport`] is the default implementation. Tests and callers
//! with special needs can supply their own via
//! [`ClozeClient::with_transport`](crate::ClozeClient::with_transport).

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::clients::http_request::{HttpMethod, OutboundRequest};
use crate::clients::http_response::InboundResponse;
use crate::config::{BaseUrl, ClozeConfig};
use crate::error::ConfigError;

/// An HTTP exchange that could not be completed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    /// Description of the underlying cause.
    pub message: String,
}

impl TransportError {
    /// Creates a new transport error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations hold no per-call state and never retry.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends `request` and returns the status and raw body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the exchange could not be completed.
    async fn send(&self, request: &OutboundRequest) -> Result<InboundResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest`.
///
/// Timeout and TLS verification come from the [`ClozeConfig`] the transport
/// was built with.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: BaseUrl,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying client cannot be
    /// created (for example when TLS initialization fails).
    pub fn new(config: &ClozeConfig) -> Result<Self, ConfigError> {
        if !config.verify_tls() {
            tracing::warn!(
                "TLS certificate verification is disabled for {}; use this only for testing",
                config.base_url()
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.verify_tls())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<InboundResponse, TransportError> {
        let url = request.url(self.base_url.as_ref());

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body_text() {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(InboundResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::clients::http_request::ApiRequest;
    use crate::config::ApiKey;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ClozeConfig {
        ClozeConfig::builder()
            .api_key(ApiKey::new("test_key").unwrap())
            .base_url(BaseUrl::new(server.uri()).unwrap())
            .build()
            .unwrap()
    }

    fn outbound(request: &ApiRequest) -> OutboundRequest {
        let credentials = Credentials::from_api_key(ApiKey::new("test_key").unwrap());
        OutboundRequest::build(request, &credentials, "cloze-sdk-rust/test").unwrap()
    }

    #[tokio::test]
    async fn test_send_returns_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/user/profile"))
            .and(header("Authorization", "Bearer test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"errorcode":0}"#))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(&config_for(&mock_server)).unwrap();
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/user/profile").build();
        let response = transport.send(&outbound(&request)).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"errorcode":0}"#);
    }

    #[tokio::test]
    async fn test_error_statuses_are_responses_not_failures() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/people/delete"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(&config_for(&mock_server)).unwrap();
        let request = ApiRequest::builder(HttpMethod::Delete, "/v1/people/delete")
            .query_param("identifier", "ada@example.com")
            .build();
        let response = transport.send(&outbound(&request)).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, "boom");
    }

    #[tokio::test]
    async fn test_send_forwards_query_and_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/people/create"))
            .and(query_param("api_key", "test_key"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({"name": "Ada"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(&config_for(&mock_server)).unwrap();
        let request = ApiRequest::builder(HttpMethod::Post, "/v1/people/create")
            .body(serde_json::json!({"name": "Ada"}))
            .api_key_in_query(true)
            .build();
        let response = transport.send(&outbound(&request)).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/user/profile"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let config = ClozeConfig::builder()
            .api_key(ApiKey::new("test_key").unwrap())
            .base_url(BaseUrl::new(mock_server.uri()).unwrap())
            .timeout(std::time::Duration::from_millis(200))
            .build()
            .unwrap();

        let transport = ReqwestTransport::new(&config).unwrap();
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/user/profile").build();
        let error = transport.send(&outbound(&request)).await.unwrap_err();

        assert!(!error.message.is_empty());
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let config = ClozeConfig::builder()
            .api_key(ApiKey::new("test_key").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:1").unwrap())
            .build()
            .unwrap();

        let transport = ReqwestTransport::new(&config).unwrap();
        let request = ApiRequest::builder(HttpMethod::Get, "/v1/user/profile").build();
        let result = transport.send(&outbound(&request)).await;

        assert!(result.is_err());
    }
}
