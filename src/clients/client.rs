//! Client core for the Cloze API.
//!
//! This module provides [`ClozeClient`], the single entry point every
//! resource module goes through.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::errors::ApiError;
use crate::clients::http_request::{ApiRequest, HttpMethod, OutboundRequest, QueryParams};
use crate::clients::http_response::interpret;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::ClozeConfig;
use crate::error::ConfigError;
use crate::resources::{
    Account, Analytics, Companies, People, Projects, RecordKind, RecordResource, Team, Timeline,
    Webhooks,
};

/// Client for the Cloze API.
///
/// The client owns an immutable [`ClozeConfig`] and a [`Transport`]. Each
/// call to [`execute`](Self::execute) builds a request, performs exactly one
/// exchange and classifies the response. There is no retry, caching or
/// queuing inside the client.
///
/// # Thread Safety
///
/// `ClozeClient` is `Send + Sync` and holds no per-call state, so one client
/// can serve concurrent calls from many tasks.
///
/// # Example
///
/// ```rust,ignore
/// use cloze_sdk::{ApiKey, ClozeClient, ClozeConfig};
///
/// let config = ClozeConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .build()?;
/// let client = ClozeClient::new(config)?;
///
/// let profile = client.account().profile().await?;
/// println!("Signed in as {}", profile["user"]["email"]);
/// ```
#[derive(Debug, Clone)]
pub struct ClozeClient {
    config: ClozeConfig,
    transport: Arc<dyn Transport>,
    user_agent: String,
}

// Verify ClozeClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClozeClient>();
};

impl ClozeClient {
    /// Creates a client that talks HTTP through [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be created.
    pub fn new(config: ClozeConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client from environment variables.
    ///
    /// See [`ClozeConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment holds no credential, a value
    /// is invalid, or the HTTP client cannot be created.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClozeConfig::from_env()?)
    }

    /// Creates a client that uses the given transport.
    #[must_use]
    pub fn with_transport(config: ClozeConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent = config.user_agent();
        Self {
            config,
            transport,
            user_agent,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClozeConfig {
        &self.config
    }

    /// Executes one API call.
    ///
    /// Builds the outbound request, performs the exchange and hands the
    /// response to [`interpret`]. A failed exchange is reported as
    /// `ApiError::Api` with the message `"Request failed: <cause>"`, and no
    /// response is interpreted in that case.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let outbound = OutboundRequest::build(&request, self.config.credentials(), &self.user_agent)?;

        tracing::debug!("Sending {} {}", outbound.method, outbound.path);

        let response = self
            .transport
            .send(&outbound)
            .await
            .map_err(ApiError::transport)?;

        tracing::debug!(
            "Received status {} for {} {}",
            response.status,
            outbound.method,
            outbound.path
        );

        interpret(response)
    }

    /// Sends a GET request with optional query parameters.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn get(&self, path: &str, query: Option<QueryParams>) -> Result<Value, ApiError> {
        let mut builder = ApiRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.execute(builder.build()).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn post(&self, path: &str, body: impl Into<Value>) -> Result<Value, ApiError> {
        self.execute(ApiRequest::builder(HttpMethod::Post, path).body(body).build())
            .await
    }

    /// Sends a DELETE request with optional query parameters.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn delete(&self, path: &str, query: Option<QueryParams>) -> Result<Value, ApiError> {
        let mut builder = ApiRequest::builder(HttpMethod::Delete, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.execute(builder.build()).await
    }

    /// Account endpoints (`/v1/user/...`).
    #[must_use]
    pub const fn account(&self) -> Account<'_> {
        Account::new(self)
    }

    /// Analytics endpoints (`/v1/analytics/...`).
    #[must_use]
    pub const fn analytics(&self) -> Analytics<'_> {
        Analytics::new(self)
    }

    /// Company endpoints (`/v1/companies/...`).
    #[must_use]
    pub const fn companies(&self) -> Companies<'_> {
        RecordResource::for_kind(self, RecordKind::Companies)
    }

    /// People endpoints (`/v1/people/...`).
    #[must_use]
    pub const fn people(&self) -> People<'_> {
        RecordResource::for_kind(self, RecordKind::People)
    }

    /// Project endpoints (`/v1/projects/...`).
    #[must_use]
    pub const fn projects(&self) -> Projects<'_> {
        RecordResource::for_kind(self, RecordKind::Projects)
    }

    /// Team endpoints (`/v1/team/...`).
    #[must_use]
    pub const fn team(&self) -> Team<'_> {
        Team::new(self)
    }

    /// Timeline endpoints (`/v1/timeline/...` and `/v1/messages/...`).
    #[must_use]
    pub const fn timeline(&self) -> Timeline<'_> {
        Timeline::new(self)
    }

    /// Webhook endpoints (`/v1/webhooks/...`).
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }
}
