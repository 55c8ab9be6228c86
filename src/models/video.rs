use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::common::MalformedPayload;

/// Row of the `video_details` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Video {
    pub id: i64,
    pub video_id: String,
    pub title: Option<String>,
    pub length_seconds: i32,
    pub channel_id: Option<String>,
    pub short_description: Option<String>,
    pub view_count: i64,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
}

/// Columns of a video that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVideo {
    pub video_id: String,
    pub title: Option<String>,
    pub length_seconds: i32,
    pub channel_id: Option<String>,
    pub short_description: Option<String>,
    pub view_count: i64,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamVideoDetails {
    pub title: Option<String>,
    pub length_seconds: Option<Value>,
    pub channel_id: Option<String>,
    pub short_description: Option<String>,
    pub view_count: Option<Value>,
    pub thumbnail: Option<ThumbnailList>,
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThumbnailList {
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Widest thumbnail; the first one wins on ties. `None` for an empty list.
pub fn widest_thumbnail(thumbnails: &[Thumbnail]) -> Option<&Thumbnail> {
    thumbnails.iter().fold(None, |best: Option<&Thumbnail>, candidate| match best {
        Some(best) if best.width.unwrap_or(0) >= candidate.width.unwrap_or(0) => Some(best),
        _ => Some(candidate),
    })
}

impl NewVideo {
    /// Map the `videoDetails` object of a video response.
    pub fn from_upstream(video_id: &str, payload: &Value) -> Result<Self, MalformedPayload> {
        let details = payload
            .get("videoDetails")
            .ok_or_else(|| MalformedPayload::new(format!("video {} has no videoDetails", video_id)))?;
        let details: UpstreamVideoDetails = serde_json::from_value(details.clone())
            .map_err(|e| MalformedPayload::new(format!("video {} details: {}", video_id, e)))?;

        let length_seconds = integer_field("lengthSeconds", details.length_seconds.as_ref())?;
        let length_seconds = i32::try_from(length_seconds)
            .map_err(|_| MalformedPayload::new(format!("lengthSeconds {} out of range", length_seconds)))?;
        let view_count = integer_field("viewCount", details.view_count.as_ref())?;
        let thumbnails = details.thumbnail.unwrap_or_default().thumbnails;
        let thumbnail_url = widest_thumbnail(&thumbnails).map(|thumbnail| thumbnail.url.clone());

        Ok(Self {
            video_id: video_id.to_string(),
            title: details.title,
            length_seconds,
            channel_id: details.channel_id,
            short_description: details.short_description,
            view_count,
            thumbnail_url,
            author: details.author,
        })
    }
}

/// Counters arrive as strings ("212") or numbers; absent means zero.
fn integer_field(name: &str, value: Option<&Value>) -> Result<i64, MalformedPayload> {
    match value {
        None => Ok(0),
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| MalformedPayload::new(format!("{} is not an integer: {}", name, number))),
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<i64>()
            .map_err(|e| MalformedPayload::new(format!("{} is not an integer ({:?}): {}", name, raw, e))),
        Some(other) => Err(MalformedPayload::new(format!("{} has unexpected type: {}", name, other))),
    }
}
