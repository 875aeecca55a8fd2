//! Analytics endpoints.
//!
//! Report endpoints take a caller-built query list and send it as
//! `{"queries": ...}`. The query format is documented by Cloze and passed
//! through unchanged.

use serde::Serialize;
use serde_json::Value;

use crate::clients::ApiError;
use crate::resources::wrap_body;
use crate::ClozeClient;

/// Analytics endpoints under `/v1/analytics/...`.
#[derive(Clone, Copy, Debug)]
pub struct Analytics<'a> {
    client: &'a ClozeClient,
}

impl<'a> Analytics<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a ClozeClient) -> Self {
        Self { client }
    }

    async fn report<T: Serialize + ?Sized>(
        &self,
        path: &str,
        queries: &T,
    ) -> Result<Value, ApiError> {
        self.client.post(path, wrap_body("queries", queries)?).await
    }

    /// Runs activity reports.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn activity<T: Serialize + ?Sized>(&self, queries: &T) -> Result<Value, ApiError> {
        self.report("/v1/analytics/activity", queries).await
    }

    /// Runs funnel reports.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn funnel<T: Serialize + ?Sized>(&self, queries: &T) -> Result<Value, ApiError> {
        self.report("/v1/analytics/funnel", queries).await
    }

    /// Runs lead reports.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn leads<T: Serialize + ?Sized>(&self, queries: &T) -> Result<Value, ApiError> {
        self.report("/v1/analytics/leads", queries).await
    }

    /// Runs project reports.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn projects<T: Serialize + ?Sized>(&self, queries: &T) -> Result<Value, ApiError> {
        self.report("/v1/analytics/projects", queries).await
    }

    /// Runs team activity reports.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn team_activity<T: Serialize + ?Sized>(
        &self,
        queries: &T,
    ) -> Result<Value, ApiError> {
        self.report("/v1/analytics/teamactivity", queries).await
    }

    /// Returns when team activity data was last refreshed.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`].
    pub async fn team_activity_update(&self) -> Result<Value, ApiError> {
        self.client
            .get("/v1/analytics/teamactivity/update", None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::clients::HttpMethod;
    use crate::resources::test_support::recording_client;
    use serde_json::json;

    #[tokio::test]
    async fn test_reports_wrap_queries() {
        let (client, transport) = recording_client();
        let queries = json!([{"id": "q1", "measures": ["emails"]}]);
        let analytics = client.analytics();

        analytics.activity(&queries).await.unwrap();
        analytics.funnel(&queries).await.unwrap();
        analytics.leads(&queries).await.unwrap();
        analytics.projects(&queries).await.unwrap();
        analytics.team_activity(&queries).await.unwrap();

        let sent = transport.sent();
        let paths: Vec<&str> = sent.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/v1/analytics/activity",
                "/v1/analytics/funnel",
                "/v1/analytics/leads",
                "/v1/analytics/projects",
                "/v1/analytics/teamactivity",
            ]
        );
        for request in &sent {
            assert_eq!(request.method, HttpMethod::Post);
            assert_eq!(request.body, Some(json!({"queries": queries})));
        }
    }

    #[tokio::test]
    async fn test_team_activity_update_is_get() {
        let (client, transport) = recording_client();

        client.analytics().team_activity_update().await.unwrap();

        let sent = transport.last();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.path, "/v1/analytics/teamactivity/update");
    }
}
