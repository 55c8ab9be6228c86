use actix_web::{web, HttpResponse, Result};

use crate::gateway::{Gateway, RoundRobin};
use crate::handlers::responses::{internal_error, relay};
use crate::models::aggregate::{search_phrase_for_event, videos_from_search};
use crate::models::query::{ChannelQuery, MarketsQuery, SearchQuery, VideoPageQuery, VideoQuery};
use crate::services::{UpstreamClient, UpstreamQuery};

/// Forward a call to the next instance of a service and relay its answer.
/// Path parameters travel as single encoded segments.
async fn forward(
    instances: &RoundRobin<UpstreamClient>,
    segments: &[&str],
    query: UpstreamQuery,
    failure_message: &str,
) -> Result<HttpResponse> {
    let instance = instances.next();
    match instance.get_json_at(segments, &query).await {
        Ok(response) => Ok(relay(response)),
        Err(e) => {
            tracing::error!("Forwarding /{} to {} failed: {}", segments.join("/"), instance.base_url(), e);
            Ok(internal_error(failure_message))
        }
    }
}

pub async fn forward_sports(gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    forward(&gateway.odds, &["sports"], UpstreamQuery::new(), "Error fetching sports data").await
}

pub async fn forward_markets(
    sport_id: i64,
    query: web::Query<MarketsQuery>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    let forwarded = UpstreamQuery::new()
        .required("event_type", query.event_type)
        .optional("league_ids", query.league_ids);
    forward(
        &gateway.odds,
        &["markets", &sport_id.to_string()],
        forwarded,
        "Error fetching market data",
    )
    .await
}

pub async fn forward_leagues(sport_id: i64, gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    forward(
        &gateway.odds,
        &["leagues", &sport_id.to_string()],
        UpstreamQuery::new(),
        "Error fetching league data",
    )
    .await
}

pub async fn forward_event(event_id: String, gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    forward(
        &gateway.odds,
        &["event", &event_id],
        UpstreamQuery::new(),
        "Error fetching event details",
    )
    .await
}

pub async fn forward_search(
    query: web::Query<SearchQuery>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    let forwarded = UpstreamQuery::new()
        .required("query", query.query)
        .optional("next", query.next)
        .optional("type", query.kind);
    forward(&gateway.video, &["search"], forwarded, "Error performing video search").await
}

pub async fn forward_video(
    query: web::Query<VideoQuery>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse> {
    let forwarded = UpstreamQuery::new().required("video_id", &query.video_id);
    forward(&gateway.video, &["video"], forwarded, "Error fetching video details").await
}

pub async fn forward_related_videos(
    query: web::Query<VideoPageQuery>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    let forwarded = UpstreamQuery::new()
        .required("video_id", query.video_id)
        .optional("next", query.next);
    forward(&gateway.video, &["video", "related"], forwarded, "Error fetching related video details").await
}

pub async fn forward_video_comments(
    query: web::Query<VideoPageQuery>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    let forwarded = UpstreamQuery::new()
        .required("video_id", query.video_id)
        .optional("next", query.next);
    forward(&gateway.video, &["video", "comments"], forwarded, "Error fetching video comments").await
}

pub async fn forward_channel(
    query: web::Query<ChannelQuery>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse> {
    let forwarded = UpstreamQuery::new().required("channel_id", &query.channel_id);
    forward(&gateway.video, &["channel"], forwarded, "Error fetching channel details").await
}

/// Videos about an event: look the event up, then search for
/// "<home> vs <away> betting odds".
pub async fn aggregate_videos(event_id: String, gateway: web::Data<Gateway>) -> Result<HttpResponse> {
    let odds = gateway.odds.next();
    let event_details = match odds.get_json_at(&["event", &event_id], &UpstreamQuery::new()).await {
        Ok(response) if response.is_success() => response.body,
        Ok(response) => {
            tracing::error!("Event {} lookup answered with status {}", event_id, response.status);
            return Ok(internal_error("Internal Server Error"));
        }
        Err(e) => {
            tracing::error!("Event {} lookup via {} failed: {}", event_id, odds.base_url(), e);
            return Ok(internal_error("Internal Server Error"));
        }
    };

    let phrase = match search_phrase_for_event(&event_details) {
        Ok(phrase) => phrase,
        Err(e) => {
            tracing::error!("Cannot build a search for event {}: {}", event_id, e);
            return Ok(internal_error("Internal Server Error"));
        }
    };

    let video = gateway.video.next();
    let search = match video.get_json_at(&["search"], &UpstreamQuery::new().required("query", &phrase)).await {
        Ok(response) if response.is_success() => response.body,
        Ok(response) => {
            tracing::error!("Search {:?} answered with status {}", phrase, response.status);
            return Ok(internal_error("Internal Server Error"));
        }
        Err(e) => {
            tracing::error!("Search {:?} via {} failed: {}", phrase, video.base_url(), e);
            return Ok(internal_error("Internal Server Error"));
        }
    };

    match videos_from_search(&search) {
        Ok(videos) => Ok(HttpResponse::Ok().json(videos)),
        Err(e) => {
            tracing::error!("Unexpected search result for {:?}: {}", phrase, e);
            Ok(internal_error("Internal Server Error"))
        }
    }
}
