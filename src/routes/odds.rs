use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::odds_handler;
use crate::models::query::MarketsQuery;
use crate::services::OddsApi;

#[get("/sports")]
pub async fn get_sports(odds_api: web::Data<OddsApi>) -> Result<HttpResponse> {
    odds_handler::get_sports(odds_api).await
}

#[get("/markets/{sport_id}")]
pub async fn get_markets(
    path: web::Path<i64>,
    query: web::Query<MarketsQuery>,
    odds_api: web::Data<OddsApi>,
) -> Result<HttpResponse> {
    let sport_id = path.into_inner();
    odds_handler::get_markets(sport_id, query, odds_api).await
}

#[get("/leagues/{sport_id}")]
pub async fn get_leagues(
    path: web::Path<i64>,
    odds_api: web::Data<OddsApi>,
) -> Result<HttpResponse> {
    let sport_id = path.into_inner();
    odds_handler::get_leagues(sport_id, odds_api).await
}

/// Event details; new events are stored as a side effect
#[get("/event/{event_id}")]
pub async fn get_event(
    path: web::Path<String>,
    odds_api: web::Data<OddsApi>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let event_id = path.into_inner();
    odds_handler::get_event_details(event_id, odds_api, pool).await
}
