pub mod round_robin;

use reqwest::Client;

use crate::config::settings::GatewaySettings;
use crate::services::UpstreamClient;
pub use round_robin::RoundRobin;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("No {0} service instances configured")]
    NoBackends(&'static str),
}

/// Instances of the odds and the video service the gateway forwards to.
#[derive(Debug)]
pub struct Gateway {
    pub odds: RoundRobin<UpstreamClient>,
    pub video: RoundRobin<UpstreamClient>,
}

impl Gateway {
    pub fn new(
        http: Client,
        odds_urls: &[String],
        video_urls: &[String],
    ) -> Result<Self, GatewayError> {
        let clients = |urls: &[String]| -> Vec<UpstreamClient> {
            urls.iter()
                .map(|url| UpstreamClient::new(http.clone(), url.clone()))
                .collect()
        };

        Ok(Self {
            odds: RoundRobin::new(clients(odds_urls)).ok_or(GatewayError::NoBackends("odds"))?,
            video: RoundRobin::new(clients(video_urls)).ok_or(GatewayError::NoBackends("video"))?,
        })
    }

    pub fn from_settings(http: Client, settings: &GatewaySettings) -> Result<Self, GatewayError> {
        Self::new(http, &settings.odds_urls, &settings.video_urls)
    }
}
