//! Account endpoints: the signed-in user's profile and configuration.

use std::fmt;

use serde_json::Value;

use crate::clients::{ApiError, QueryParams};
use crate::ClozeClient;

/// Record type used to filter custom fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationType {
    /// Fields attached to people.
    Person,
    /// Fields attached to projects.
    Project,
    /// Fields attached to companies.
    Company,
}

impl RelationType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Project => "project",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account endpoints under `/v1/user/...`.
#[derive(Clone, Copy, Debug)]
pub struct Account<'a> {
    client: &'a ClozeClient,
}

impl<'a> Account<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a ClozeClient) -> Self {
        Self { client }
    }

    /// Lists custom fields, optionally only those of one record type.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn fields(&self, relation_type: Option<RelationType>) -> Result<Value, ApiError> {
        let query = relation_type.map(|relation_type| {
            let mut query = QueryParams::new();
            query.insert("relationtype".to_string(), relation_type.as_str().into());
            query
        });
        self.client.get("/v1/user/fields", query).await
    }

    /// Returns the user's profile.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn profile(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/user/profile", None).await
    }

    /// Lists segments for people.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn segments_people(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/user/segments/people", None).await
    }

    /// Lists segments for projects.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn segments_projects(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/user/segments/projects", None).await
    }

    /// Lists stages for people.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn stages_people(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/user/stages/people", None).await
    }

    /// Lists stages for projects.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn stages_projects(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/user/stages/projects", None).await
    }

    /// Lists the user's next-step templates.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn steps(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/user/steps", None).await
    }

    /// Lists saved views.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn views(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/user/views", None).await
    }
}
