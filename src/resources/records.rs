//! People, company and project endpoints.
//!
//! The three record types share one set of operations under their own path
//! prefix (`/v1/people/...`, `/v1/companies/...`, `/v1/projects/...`).

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, QueryParams, QueryValue};
use crate::resources::params::{FeedParams, FindParams};
use crate::resources::to_body;
use crate::ClozeClient;

/// The kind of record a [`RecordResource`] operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// People (contacts).
    People,
    /// Companies.
    Companies,
    /// Projects (deals).
    Projects,
}

impl RecordKind {
    /// Returns the path segment for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Companies => "companies",
            Self::Projects => "projects",
        }
    }
}

/// Endpoints for one kind of record.
///
/// Obtain one through [`ClozeClient::people`], [`ClozeClient::companies`] or
/// [`ClozeClient::projects`].
#[derive(Clone, Copy, Debug)]
pub struct RecordResource<'a> {
    client: &'a ClozeClient,
    kind: RecordKind,
}

/// People endpoints.
pub type People<'a> = RecordResource<'a>;
/// Company endpoints.
pub type Companies<'a> = RecordResource<'a>;
/// Project endpoints.
pub type Projects<'a> = RecordResource<'a>;

impl<'a> RecordResource<'a> {
    /// Creates a resource for `kind`.
    #[must_use]
    pub const fn for_kind(client: &'a ClozeClient, kind: RecordKind) -> Self {
        Self { client, kind }
    }

    /// Returns the record kind.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    fn path(&self, action: &str) -> String {
        format!("/v1/{}/{action}", self.kind.as_str())
    }

    /// Creates a record, or enhances an existing one that matches.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn create<T: Serialize + ?Sized>(&self, record: &T) -> Result<Value, ApiError> {
        self.client.post(&self.path("create"), to_body(record)?).await
    }

    /// Merges updates into an existing record.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn update<T: Serialize + ?Sized>(&self, record: &T) -> Result<Value, ApiError> {
        self.client.post(&self.path("update"), to_body(record)?).await
    }

    /// Fetches one record by identifier (email, domain, direct id, ...).
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn get(
        &self,
        identifier: &str,
        identifier_type: Option<&str>,
    ) -> Result<Value, ApiError> {
        self.client
            .get(&self.path("get"), Some(identifier_query(identifier, identifier_type)))
            .await
    }

    /// Deletes one record by identifier.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn delete(
        &self,
        identifier: &str,
        identifier_type: Option<&str>,
    ) -> Result<Value, ApiError> {
        self.client
            .delete(&self.path("delete"), Some(identifier_query(identifier, identifier_type)))
            .await
    }

    /// Searches records with page-number pagination.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn find(&self, params: FindParams) -> Result<Value, ApiError> {
        self.client
            .get(&self.path("find"), Some(params.into_query()))
            .await
    }

    /// Retrieves records in bulk with cursor pagination.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn feed(&self, params: FeedParams) -> Result<Value, ApiError> {
        self.client
            .get(&self.path("feed"), Some(params.into_query()))
            .await
    }
}

fn identifier_query(identifier: &str, identifier_type: Option<&str>) -> QueryParams {
    let mut query = QueryParams::new();
    query.insert("identifier".to_string(), QueryValue::from(identifier));
    if let Some(kind) = identifier_type.filter(|kind| !kind.is_empty()) {
        query.insert("identifier_type".to_string(), QueryValue::from(kind));
    }
    query
}
