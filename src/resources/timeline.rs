//! Timeline endpoints: communications, content, to-dos and message opens.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, QueryParams};
use crate::resources::to_body;
use crate::ClozeClient;

/// Parameters for [`Timeline::message_opens`].
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use cloze_sdk::resources::MessageOpensParams;
///
/// let since = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let params = MessageOpensParams::new().since(since).user("ada@example.com");
/// assert_eq!(params.from, Some(1_735_689_600_000));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageOpensParams {
    /// Start of the window, in milliseconds since the Unix epoch (UTC).
    pub from: Option<i64>,
    /// Restrict to one team member.
    pub user: Option<String>,
}

impl MessageOpensParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start of the window in epoch milliseconds.
    #[must_use]
    pub fn from_millis(mut self, millis: i64) -> Self {
        self.from = Some(millis);
        self
    }

    /// Sets the start of the window from a UTC timestamp.
    #[must_use]
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.from = Some(since.timestamp_millis());
        self
    }

    /// Restricts results to one team member.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    fn into_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(from) = self.from {
            query.insert("from".to_string(), from.into());
        }
        if let Some(user) = self.user.filter(|user| !user.is_empty()) {
            query.insert("user".to_string(), user.into());
        }
        query
    }
}

/// Timeline endpoints under `/v1/timeline/...` plus `/v1/messages/opens`.
#[derive(Clone, Copy, Debug)]
pub struct Timeline<'a> {
    client: &'a ClozeClient,
}

impl<'a> Timeline<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a ClozeClient) -> Self {
        Self { client }
    }

    /// Adds a communication (email, call, meeting, ...) to the timeline.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn create_communication<T: Serialize + ?Sized>(
        &self,
        item: &T,
    ) -> Result<Value, ApiError> {
        self.client
            .post("/v1/timeline/communication/create", to_body(item)?)
            .await
    }

    /// Adds a content record (note, document, ...) to the timeline.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn create_content<T: Serialize + ?Sized>(
        &self,
        item: &T,
    ) -> Result<Value, ApiError> {
        self.client
            .post("/v1/timeline/content/create", to_body(item)?)
            .await
    }

    /// Creates a to-do.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn create_todo<T: Serialize + ?Sized>(&self, item: &T) -> Result<Value, ApiError> {
        self.client
            .post("/v1/timeline/todo/create", to_body(item)?)
            .await
    }

    /// Lists tracked message opens.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn message_opens(&self, params: MessageOpensParams) -> Result<Value, ApiError> {
        self.client
            .get("/v1/messages/opens", Some(params.into_query()))
            .await
    }
}
