use once_cell::sync::Lazy;
use secrecy::{ExposeSecret, SecretString};
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use oddstube_backend::config::settings::{get_config, DatabaseSettings, UpstreamSettings};
use oddstube_backend::gateway::Gateway;
use oddstube_backend::services::{OddsApi, UpstreamClient, VideoApi};
use oddstube_backend::telemetry::{get_subscriber, init_subscriber};
use oddstube_backend::{run_gateway, run_odds_service, run_video_service};

use super::mock_upstream::MockUpstream;

pub const TEST_API_KEY: &str = "test-api-key";
pub const ODDS_API_HOST: &str = "pinnacle-odds.p.rapidapi.com";
pub const VIDEO_API_HOST: &str = "youtube-search-and-download.p.rapidapi.com";

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub upstream: MockUpstream,
}

fn bind_random_port() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    (listener, format!("http://127.0.0.1:{}", port))
}

fn mock_upstream_settings(upstream: &MockUpstream, host: &str) -> UpstreamSettings {
    UpstreamSettings {
        base_url: upstream.address.clone(),
        host: host.to_string(),
        api_key: SecretString::new(TEST_API_KEY.to_string().into_boxed_str()),
    }
}

/// Pool that never connects until a query runs. Enough for the
/// pass-through endpoints, which never touch the database.
fn lazy_pool(config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .connect_lazy(config.connection_string().expose_secret())
        .expect("Failed to create lazy Postgres pool")
}

async fn spawn_odds(db_pool: PgPool) -> TestApp {
    let upstream = MockUpstream::start().await;
    let (listener, address) = bind_random_port();

    let odds_api = OddsApi::new(UpstreamClient::from_settings(
        reqwest::Client::new(),
        &mock_upstream_settings(&upstream, ODDS_API_HOST),
    ));
    let server = run_odds_service(listener, db_pool.clone(), odds_api)
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp { address, db_pool, upstream }
}

async fn spawn_video(db_pool: PgPool) -> TestApp {
    let upstream = MockUpstream::start().await;
    let (listener, address) = bind_random_port();

    let video_api = VideoApi::new(UpstreamClient::from_settings(
        reqwest::Client::new(),
        &mock_upstream_settings(&upstream, VIDEO_API_HOST),
    ));
    let server = run_video_service(listener, db_pool.clone(), video_api)
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp { address, db_pool, upstream }
}

pub async fn spawn_odds_app() -> TestApp {
    Lazy::force(&TRACING);
    let configuration = get_config().expect("Failed to read configuration.");
    spawn_odds(lazy_pool(&configuration.odds.database)).await
}

pub async fn spawn_odds_app_with_db() -> TestApp {
    Lazy::force(&TRACING);
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.odds.database.db_name = Uuid::new_v4().to_string();
    configuration.odds.database.db_url = None;
    let db_pool = configure_db(
        &configuration.odds.database,
        sqlx::migrate!("./migrations/odds"),
    )
    .await;
    spawn_odds(db_pool).await
}

pub async fn spawn_video_app() -> TestApp {
    Lazy::force(&TRACING);
    let configuration = get_config().expect("Failed to read configuration.");
    spawn_video(lazy_pool(&configuration.video.database)).await
}

pub async fn spawn_video_app_with_db() -> TestApp {
    Lazy::force(&TRACING);
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.video.database.db_name = Uuid::new_v4().to_string();
    configuration.video.database.db_url = None;
    let db_pool = configure_db(
        &configuration.video.database,
        sqlx::migrate!("./migrations/video"),
    )
    .await;
    spawn_video(db_pool).await
}

/// Address on which nothing listens.
pub fn closed_port_address() -> String {
    let (listener, address) = bind_random_port();
    drop(listener);
    address
}

/// Video service whose upstream lives at `base_url`; returns its address.
pub async fn spawn_video_app_with_upstream_url(base_url: &str) -> String {
    Lazy::force(&TRACING);
    let configuration = get_config().expect("Failed to read configuration.");
    let (listener, address) = bind_random_port();

    let video_api = VideoApi::new(UpstreamClient::from_settings(
        reqwest::Client::new(),
        &UpstreamSettings {
            base_url: base_url.to_string(),
            host: VIDEO_API_HOST.to_string(),
            api_key: SecretString::new(TEST_API_KEY.to_string().into_boxed_str()),
        },
    ));
    let server = run_video_service(listener, lazy_pool(&configuration.video.database), video_api)
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    address
}

/// Gateway forwarding to the given service instances; returns its address.
pub async fn spawn_gateway(odds_urls: Vec<String>, video_urls: Vec<String>) -> String {
    Lazy::force(&TRACING);
    let (listener, address) = bind_random_port();

    let gateway = Gateway::new(reqwest::Client::new(), &odds_urls, &video_urls)
        .expect("Failed to configure the gateway");
    let server = run_gateway(listener, gateway).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    address
}

pub async fn configure_db(config: &DatabaseSettings, migrator: Migrator) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(
            &config.connection_string_without_db()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    migrator
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}
