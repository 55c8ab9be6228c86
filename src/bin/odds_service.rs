use std::net::TcpListener;
use std::time::Duration;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

use oddstube_backend::config::settings::get_config;
use oddstube_backend::run_odds_service;
use oddstube_backend::services::{OddsApi, UpstreamClient};
use oddstube_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "odds-service".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    let connection_pool = PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy(
            config.odds.database.connection_string().expose_secret()
        )
        .expect("Failed to create Postgres connection pool");

    if let Err(e) = sqlx::migrate!("./migrations/odds").run(&connection_pool).await {
        tracing::error!("Failed to migrate the events database: {}", e);
        std::process::exit(1);
    }

    let odds_api = OddsApi::new(UpstreamClient::from_settings(
        reqwest::Client::new(),
        &config.odds.upstream,
    ));

    let address = format!("{}:{}", config.application.host, config.odds.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Odds service listening on {}", address);

    run_odds_service(listener, connection_pool, odds_api)?.await
}
