use std::net::TcpListener;

use oddstube_backend::config::settings::get_config;
use oddstube_backend::gateway::Gateway;
use oddstube_backend::run_gateway;
use oddstube_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "gateway".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    let gateway = match Gateway::from_settings(reqwest::Client::new(), &config.gateway) {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!("❌ Invalid gateway configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Forwarding to {} odds and {} video instance(s)",
        gateway.odds.backend_count(),
        gateway.video.backend_count()
    );

    let address = format!("{}:{}", config.application.host, config.gateway.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Gateway listening on {}", address);

    run_gateway(listener, gateway)?.await
}
