use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::common::MalformedPayload;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedVideo {
    pub title: Option<String>,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// Search phrase for videos about the first event of an event-detail payload.
pub fn search_phrase_for_event(event_details: &Value) -> Result<String, MalformedPayload> {
    let event = event_details
        .get("events")
        .and_then(|events| events.get(0))
        .ok_or_else(|| MalformedPayload::new("event details without events"))?;
    let home = event.get("home").and_then(Value::as_str);
    let away = event.get("away").and_then(Value::as_str);

    match (home, away) {
        (Some(home), Some(away)) => Ok(format!("{} vs {} betting odds", home, away)),
        _ => Err(MalformedPayload::new("event without home and away participants")),
    }
}

/// Title and id of every video entry of a search payload. Channel and
/// playlist entries are skipped.
pub fn videos_from_search(search: &Value) -> Result<Vec<AggregatedVideo>, MalformedPayload> {
    let contents = search
        .get("contents")
        .and_then(Value::as_array)
        .ok_or_else(|| MalformedPayload::new("search result without contents"))?;

    Ok(contents
        .iter()
        .filter_map(|entry| entry.get("video"))
        .map(|video| AggregatedVideo {
            title: video.get("title").and_then(Value::as_str).map(str::to_string),
            video_id: video.get("videoId").and_then(Value::as_str).map(str::to_string),
        })
        .collect())
}
