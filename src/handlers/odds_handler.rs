use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::responses::{internal_error, relay, upstream_failure};
use crate::models::query::MarketsQuery;
use crate::services::{record_new_events, OddsApi};

/// List all sports
pub async fn get_sports(odds_api: web::Data<OddsApi>) -> Result<HttpResponse> {
    match odds_api.sports().await {
        Ok(response) => Ok(relay(response)),
        Err(e) => Ok(upstream_failure("sports", &e)),
    }
}

/// List markets of a sport
pub async fn get_markets(
    sport_id: i64,
    query: web::Query<MarketsQuery>,
    odds_api: web::Data<OddsApi>,
) -> Result<HttpResponse> {
    match odds_api.markets(sport_id, &query.event_type, query.league_ids).await {
        Ok(response) => Ok(relay(response)),
        Err(e) => Ok(upstream_failure(&format!("markets of sport {}", sport_id), &e)),
    }
}

/// List leagues of a sport
pub async fn get_leagues(sport_id: i64, odds_api: web::Data<OddsApi>) -> Result<HttpResponse> {
    match odds_api.leagues(sport_id).await {
        Ok(response) => Ok(relay(response)),
        Err(e) => Ok(upstream_failure(&format!("leagues of sport {}", sport_id), &e)),
    }
}

/// Fetch event details and keep a snapshot of every event seen for the first time
pub async fn get_event_details(
    event_id: String,
    odds_api: web::Data<OddsApi>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let response = match odds_api.event_details(&event_id).await {
        Ok(response) => response,
        Err(e) => return Ok(upstream_failure(&format!("event {}", event_id), &e)),
    };

    // Error answers from upstream carry no events worth keeping
    if !response.is_success() {
        return Ok(relay(response));
    }

    match record_new_events(pool.get_ref(), &response.body).await {
        Ok(inserted) => {
            if inserted > 0 {
                tracing::info!("Stored {} new event(s) for request {}", inserted, event_id);
            }
            Ok(relay(response))
        }
        Err(e) => {
            tracing::error!("Failed to store events for request {}: {}", event_id, e);
            Ok(internal_error("Internal Server Error"))
        }
    }
}
