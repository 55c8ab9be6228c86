use crate::services::upstream_client::{UpstreamClient, UpstreamError, UpstreamQuery, UpstreamResponse};

/// Calls against the video provider's search-and-download API.
#[derive(Debug, Clone)]
pub struct VideoApi {
    client: UpstreamClient,
}

impl VideoApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// English results, HD only, sorted by relevance.
    pub async fn search(
        &self,
        query: &str,
        next: Option<&str>,
        kind: Option<&str>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let query = UpstreamQuery::new()
            .required("query", query)
            .required("hl", "en")
            .required("features", "hd")
            .required("sort", "r")
            .optional("next", next)
            .optional("type", kind);
        self.client.get_json("/search", &query).await
    }

    pub async fn video(&self, video_id: &str) -> Result<UpstreamResponse, UpstreamError> {
        let query = UpstreamQuery::new().required("id", video_id);
        self.client.get_json("/video", &query).await
    }

    pub async fn related(
        &self,
        video_id: &str,
        next: Option<&str>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let query = UpstreamQuery::new()
            .required("id", video_id)
            .optional("next", next);
        self.client.get_json("/video/related", &query).await
    }

    pub async fn comments(
        &self,
        video_id: &str,
        next: Option<&str>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let query = UpstreamQuery::new()
            .required("id", video_id)
            .optional("next", next);
        self.client.get_json("/video/comments", &query).await
    }

    pub async fn channel(&self, channel_id: &str) -> Result<UpstreamResponse, UpstreamError> {
        let query = UpstreamQuery::new().required("id", channel_id);
        self.client.get_json("/channel", &query).await
    }
}
