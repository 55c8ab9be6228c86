use serde::{Deserialize, Serialize};

use crate::services::odds_api::DEFAULT_EVENT_TYPE;

fn default_event_type() -> String {
    DEFAULT_EVENT_TYPE.to_string()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MarketsQuery {
    #[serde(default = "default_event_type")]
    pub event_type: String,
    pub league_ids: Option<i64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchQuery {
    pub query: String,
    pub next: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VideoQuery {
    pub video_id: String,
}

/// Query of the paginated video listings (related, comments).
#[derive(Debug, Deserialize, Serialize)]
pub struct VideoPageQuery {
    pub video_id: String,
    pub next: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChannelQuery {
    pub channel_id: String,
}
