use crate::services::upstream_client::{UpstreamClient, UpstreamError, UpstreamQuery, UpstreamResponse};

pub const DEFAULT_EVENT_TYPE: &str = "prematch";

/// Calls against the odds provider's `kit/v1` API.
#[derive(Debug, Clone)]
pub struct OddsApi {
    client: UpstreamClient,
}

impl OddsApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    pub async fn sports(&self) -> Result<UpstreamResponse, UpstreamError> {
        self.client.get_json("/sports", &UpstreamQuery::new()).await
    }

    pub async fn markets(
        &self,
        sport_id: i64,
        event_type: &str,
        league_ids: Option<i64>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let query = UpstreamQuery::new()
            .required("sport_id", sport_id)
            .required("is_have_odds", "true")
            .required("event_type", event_type)
            .optional("league_ids", league_ids);
        self.client.get_json("/markets", &query).await
    }

    pub async fn leagues(&self, sport_id: i64) -> Result<UpstreamResponse, UpstreamError> {
        let query = UpstreamQuery::new().required("sport_id", sport_id);
        self.client.get_json("/leagues", &query).await
    }

    pub async fn event_details(&self, event_id: &str) -> Result<UpstreamResponse, UpstreamError> {
        let query = UpstreamQuery::new().required("event_id", event_id);
        self.client.get_json("/details", &query).await
    }
}
