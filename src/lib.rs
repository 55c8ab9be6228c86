use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod db;
pub mod gateway;
mod handlers;
pub mod models;
mod routes;
pub mod services;
pub mod telemetry;

use crate::gateway::Gateway;
use crate::routes::{init_gateway_routes, init_odds_routes, init_video_routes};
use crate::services::{OddsApi, VideoApi};

/// Odds service: proxies the odds provider and keeps event snapshots.
pub fn run_odds_service(
    listener: TcpListener,
    db_pool: PgPool,
    odds_api: OddsApi,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let odds_api_data = web::Data::new(odds_api);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(db_pool_data.clone())
            .app_data(odds_api_data.clone())
            .configure(init_odds_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Video service: proxies the video provider and keeps video snapshots.
pub fn run_video_service(
    listener: TcpListener,
    db_pool: PgPool,
    video_api: VideoApi,
) -> Result<Server, std::io::Error> {
    let db_pool_data = web::Data::new(db_pool);
    let video_api_data = web::Data::new(video_api);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(db_pool_data.clone())
            .app_data(video_api_data.clone())
            .configure(init_video_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Gateway in front of both services.
pub fn run_gateway(listener: TcpListener, gateway: Gateway) -> Result<Server, std::io::Error> {
    let gateway_data = web::Data::new(gateway);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(gateway_data.clone())
            .configure(init_gateway_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
