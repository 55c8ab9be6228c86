//! First-seen snapshots of upstream entities.
//!
//! A row is written only the first time an identifier is observed; later
//! fetches of the same identifier never touch the stored row. Every new row
//! is committed in its own transaction, so a failure part-way through a
//! payload keeps the rows committed before it.

use serde_json::Value;
use sqlx::PgPool;

use crate::db::{events, videos};
use crate::models::common::MalformedPayload;
use crate::models::event::{event_id_of, Event};
use crate::models::video::NewVideo;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    MalformedPayload(#[from] MalformedPayload),
}

/// Store every event of an event-detail payload that is not known yet.
/// Returns the number of rows written.
pub async fn record_new_events(pool: &PgPool, payload: &Value) -> Result<usize, PersistError> {
    let upstream_events = payload
        .get("events")
        .and_then(Value::as_array)
        .ok_or_else(|| MalformedPayload::new("event details without an events array"))?;

    let mut inserted = 0;
    for upstream_event in upstream_events {
        let event_id = event_id_of(upstream_event)?;
        if events::event_exists(pool, event_id).await? {
            tracing::debug!("Event {} already stored, skipping", event_id);
            continue;
        }

        let event = Event::from_upstream(upstream_event)?;
        let mut tx = pool.begin().await?;
        if events::insert_event(&mut *tx, &event).await? {
            inserted += 1;
        } else {
            tracing::info!("Event {} was stored concurrently, keeping the existing row", event_id);
        }
        tx.commit().await?;
    }

    Ok(inserted)
}

/// Store the video of a video-detail payload unless it is known already.
/// Returns whether a row was written.
pub async fn record_video(
    pool: &PgPool,
    video_id: &str,
    payload: &Value,
) -> Result<bool, PersistError> {
    if videos::video_exists(pool, video_id).await? {
        tracing::debug!("Video {} already stored, skipping", video_id);
        return Ok(false);
    }

    let video = NewVideo::from_upstream(video_id, payload)?;
    let mut tx = pool.begin().await?;
    let inserted = videos::insert_video(&mut *tx, &video).await?;
    tx.commit().await?;

    if !inserted {
        tracing::info!("Video {} was stored concurrently, keeping the existing row", video_id);
    }
    Ok(inserted)
}
