use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::responses::{internal_error, relay, upstream_failure};
use crate::models::query::{ChannelQuery, SearchQuery, VideoPageQuery, VideoQuery};
use crate::services::{record_video, VideoApi};

pub async fn search_videos(
    query: web::Query<SearchQuery>,
    video_api: web::Data<VideoApi>,
) -> Result<HttpResponse> {
    match video_api
        .search(&query.query, query.next.as_deref(), query.kind.as_deref())
        .await
    {
        Ok(response) => Ok(relay(response)),
        Err(e) => Ok(upstream_failure(&format!("search {:?}", query.query), &e)),
    }
}

/// Fetch video details and keep a snapshot the first time a video is seen
pub async fn get_video_details(
    query: web::Query<VideoQuery>,
    video_api: web::Data<VideoApi>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let video_id = &query.video_id;
    let response = match video_api.video(video_id).await {
        Ok(response) => response,
        Err(e) => return Ok(upstream_failure(&format!("video {}", video_id), &e)),
    };

    if !response.is_success() {
        return Ok(relay(response));
    }

    match record_video(pool.get_ref(), video_id, &response.body).await {
        Ok(inserted) => {
            if inserted {
                tracing::info!("Stored video {}", video_id);
            }
            Ok(relay(response))
        }
        Err(e) => {
            tracing::error!("Failed to store video {}: {}", video_id, e);
            Ok(internal_error("Internal Server Error"))
        }
    }
}

pub async fn get_related_videos(
    query: web::Query<VideoPageQuery>,
    video_api: web::Data<VideoApi>,
) -> Result<HttpResponse> {
    match video_api.related(&query.video_id, query.next.as_deref()).await {
        Ok(response) => Ok(relay(response)),
        Err(e) => Ok(upstream_failure(&format!("videos related to {}", query.video_id), &e)),
    }
}

pub async fn get_video_comments(
    query: web::Query<VideoPageQuery>,
    video_api: web::Data<VideoApi>,
) -> Result<HttpResponse> {
    match video_api.comments(&query.video_id, query.next.as_deref()).await {
        Ok(response) => Ok(relay(response)),
        Err(e) => Ok(upstream_failure(&format!("comments of {}", query.video_id), &e)),
    }
}

pub async fn get_channel(
    query: web::Query<ChannelQuery>,
    video_api: web::Data<VideoApi>,
) -> Result<HttpResponse> {
    match video_api.channel(&query.channel_id).await {
        Ok(response) => Ok(relay(response)),
        Err(e) => Ok(upstream_failure(&format!("channel {}", query.channel_id), &e)),
    }
}
