//! Team endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::clients::ApiError;
use crate::resources::wrap_body;
use crate::ClozeClient;

/// Team endpoints under `/v1/team/...`.
#[derive(Clone, Copy, Debug)]
pub struct Team<'a> {
    client: &'a ClozeClient,
}

impl<'a> Team<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a ClozeClient) -> Self {
        Self { client }
    }

    /// Lists team members.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn members(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/team/members/list", None).await
    }

    /// Updates team members. `members` is sent as `{"members": members}`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn update_members<T: Serialize + ?Sized>(
        &self,
        members: &T,
    ) -> Result<Value, ApiError> {
        self.client
            .post("/v1/team/members/update", wrap_body("members", members)?)
            .await
    }

    /// Lists the nodes of the team hierarchy.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn nodes(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/team/nodes", None).await
    }

    /// Lists team roles.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn roles(&self) -> Result<Value, ApiError> {
        self.client.get("/v1/team/roles", None).await
    }
}

#[cfg(test)]
mod tests {
    use crate::clients::HttpMethod;
    use crate::resources::test_support::recording_client;
    use serde_json::json;

    #[tokio::test]
    async fn test_listing_paths() {
        let (client, transport) = recording_client();
        let team = client.team();

        team.members().await.unwrap();
        team.nodes().await.unwrap();
        team.roles().await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].path, "/v1/team/members/list");
        assert_eq!(sent[1].path, "/v1/team/nodes");
        assert_eq!(sent[2].path, "/v1/team/roles");
        assert!(sent.iter().all(|r| r.method == HttpMethod::Get));
    }

    #[tokio::test]
    async fn test_update_members_wraps_list() {
        let (client, transport) = recording_client();
        let members = vec![json!({"email": "ada@example.com", "role": "admin"})];

        client.team().update_members(&members).await.unwrap();

        let sent = transport.last();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.path, "/v1/team/members/update");
        assert_eq!(
            sent.body,
            Some(json!({"members": [{"email": "ada@example.com", "role": "admin"}]}))
        );
    }
}
