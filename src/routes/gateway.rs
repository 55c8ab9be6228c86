use actix_web::{get, web, HttpResponse, Result};

use crate::gateway::Gateway;
use crate::handlers::gateway_handler;
use crate::models::query::{ChannelQuery, MarketsQuery, SearchQuery, VideoPageQuery, VideoQuery};

#[get("/sports")]
pub async fn sports(gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    gateway_handler::forward_sports(gateway).await
}

#[get("/markets/{sport_id}")]
pub async fn markets(
    path: web::Path<i64>,
    query: web::Query<MarketsQuery>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse> {
    gateway_handler::forward_markets(path.into_inner(), query, gateway).await
}

#[get("/leagues/{sport_id}")]
pub async fn leagues(path: web::Path<i64>, gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    gateway_handler::forward_leagues(path.into_inner(), gateway).await
}

#[get("/event/{event_id}")]
pub async fn event(path: web::Path<String>, gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    gateway_handler::forward_event(path.into_inner(), gateway).await
}

#[get("/search")]
pub async fn search(query: web::Query<SearchQuery>, gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    gateway_handler::forward_search(query, gateway).await
}

#[get("/video")]
pub async fn video(query: web::Query<VideoQuery>, gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    gateway_handler::forward_video(query, gateway).await
}

#[get("/video/related")]
pub async fn related_videos(
    query: web::Query<VideoPageQuery>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse> {
    gateway_handler::forward_related_videos(query, gateway).await
}

#[get("/video/comments")]
pub async fn video_comments(
    query: web::Query<VideoPageQuery>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse> {
    gateway_handler::forward_video_comments(query, gateway).await
}

#[get("/channel")]
pub async fn channel(query: web::Query<ChannelQuery>, gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    gateway_handler::forward_channel(query, gateway).await
}

/// Titles and ids of videos about an event
#[get("/aggregateVideos/{event_id}")]
pub async fn aggregate_videos(path: web::Path<String>, gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    gateway_handler::aggregate_videos(path.into_inner(), gateway).await
}
