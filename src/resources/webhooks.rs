//! Webhook subscription endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloze_sdk::resources::Subscription;
//!
//! let subscription = Subscription::new("person.change", "https://example.com/hooks/cloze")
//!     .scope("team")
//!     .client_reference("crm-sync")
//!     .ttl(3600);
//! let created = client.webhooks().subscribe(&subscription).await?;
//!
//! client
//!     .webhooks()
//!     .unsubscribe("person.change", None, Some("crm-sync"))
//!     .await?;
//! ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::clients::ApiError;
use crate::resources::to_body;
use crate::ClozeClient;

/// Message of the validation error raised by [`Webhooks::unsubscribe`].
const MISSING_SUBSCRIPTION_ID: &str = "Either uniqueid or client_reference must be provided";

/// A webhook subscription request.
///
/// Optional fields that are unset or empty are left out of the request
/// body. `ttl` is sent as a string and omitted when zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Subscription {
    /// Event type, e.g. `person.change` or `project.audit.change`.
    pub event: String,
    /// Callback URL for notifications.
    pub target_url: String,
    /// Subscription scope (`local`, `team`, `hierarchy:/X/Y/Z`, ...).
    #[serde(skip_serializing_if = "is_blank")]
    pub scope: Option<String>,
    /// Filter objects narrowing which changes are delivered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Value>,
    /// Client implementation information, e.g. `human`.
    #[serde(skip_serializing_if = "is_blank")]
    pub client_type: Option<String>,
    /// Caller-chosen name that can later be used to unsubscribe.
    #[serde(skip_serializing_if = "is_blank")]
    pub client_reference: Option<String>,
    /// Lifetime of the subscription in seconds.
    #[serde(skip_serializing_if = "is_unset_ttl", serialize_with = "ttl_as_string")]
    pub ttl: Option<u64>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn is_unset_ttl(ttl: &Option<u64>) -> bool {
    matches!(ttl, None | Some(0))
}

fn ttl_as_string<S: Serializer>(ttl: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match ttl {
        Some(ttl) => serializer.collect_str(ttl),
        None => serializer.serialize_none(),
    }
}

impl Subscription {
    /// Creates a subscription for `event` delivered to `target_url`.
    #[must_use]
    pub fn new(event: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            target_url: target_url.into(),
            ..Self::default()
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Adds a filter object.
    #[must_use]
    pub fn filter(mut self, filter: Value) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the client type.
    #[must_use]
    pub fn client_type(mut self, client_type: impl Into<String>) -> Self {
        self.client_type = Some(client_type.into());
        self
    }

    /// Sets the client reference.
    #[must_use]
    pub fn client_reference(mut self, client_reference: impl Into<String>) -> Self {
        self.client_reference = Some(client_reference.into());
        self
    }

    /// Sets the lifetime in seconds.
    #[must_use]
    pub const fn ttl(mut self, seconds: u64) -> Self {
        self.ttl = Some(seconds);
        self
    }
}

/// Webhook endpoints under `/v1/webhooks/...`.
#[derive(Clone, Copy, Debug)]
pub struct Webhooks<'a> {
    client: &'a ClozeClient,
}

impl<'a> Webhooks<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a ClozeClient) -> Self {
        Self { client }
    }

    /// Lists active subscriptions.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/webhooks", None).await
    }

    /// Subscribes to change events. The response carries the `uniqueid`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn subscribe(&self, subscription: &Subscription) -> Result<Value, ApiError> {
        self.client
            .post("/v1/webhooks/subscribe", to_body(subscription)?)
            .await
    }

    /// Cancels a subscription identified by `uniqueid` or `client_reference`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if neither
    /// identifier is given (or both are empty); otherwise the classified
    /// [`ApiError`] of the call.
    pub async fn unsubscribe(
        &self,
        event: &str,
        uniqueid: Option<&str>,
        client_reference: Option<&str>,
    ) -> Result<Value, ApiError> {
        let uniqueid = uniqueid.filter(|id| !id.is_empty());
        let client_reference = client_reference.filter(|reference| !reference.is_empty());
        if uniqueid.is_none() && client_reference.is_none() {
            return Err(ApiError::validation(MISSING_SUBSCRIPTION_ID));
        }

        let mut body = Map::new();
        body.insert("event".to_string(), Value::from(event));
        if let Some(uniqueid) = uniqueid {
            body.insert("uniqueid".to_string(), Value::from(uniqueid));
        }
        if let Some(client_reference) = client_reference {
            body.insert("client_reference".to_string(), Value::from(client_reference));
        }

        self.client
            .post("/v1/webhooks/unsubscribe", Value::Object(body))
            .await
    }
}
