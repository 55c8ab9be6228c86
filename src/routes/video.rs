use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::video_handler;
use crate::models::query::{ChannelQuery, SearchQuery, VideoPageQuery, VideoQuery};
use crate::services::VideoApi;

#[get("/search")]
pub async fn search(
    query: web::Query<SearchQuery>,
    video_api: web::Data<VideoApi>,
) -> Result<HttpResponse> {
    video_handler::search_videos(query, video_api).await
}

/// Video details; a new video is stored as a side effect
#[get("/video")]
pub async fn get_video(
    query: web::Query<VideoQuery>,
    video_api: web::Data<VideoApi>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    video_handler::get_video_details(query, video_api, pool).await
}

#[get("/video/related")]
pub async fn get_related(
    query: web::Query<VideoPageQuery>,
    video_api: web::Data<VideoApi>,
) -> Result<HttpResponse> {
    video_handler::get_related_videos(query, video_api).await
}

#[get("/video/comments")]
pub async fn get_comments(
    query: web::Query<VideoPageQuery>,
    video_api: web::Data<VideoApi>,
) -> Result<HttpResponse> {
    video_handler::get_video_comments(query, video_api).await
}

#[get("/channel")]
pub async fn get_channel(
    query: web::Query<ChannelQuery>,
    video_api: web::Data<VideoApi>,
) -> Result<HttpResponse> {
    video_handler::get_channel(query, video_api).await
}
