use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::settings::UpstreamSettings;

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned a non JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
}

/// Query parameters for an upstream call.
///
/// Optional parameters that are absent (or empty) are left out of the
/// request entirely.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpstreamQuery {
    params: Vec<(&'static str, String)>,
}

impl UpstreamQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    pub fn optional<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.params.push((key, value));
            }
        }
        self
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

/// Status and decoded body of an upstream response, untouched.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
struct ApiCredentials {
    host: String,
    api_key: SecretString,
}

/// Thin wrapper around `reqwest::Client` bound to one base URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    credentials: Option<ApiCredentials>,
}

impl UpstreamClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
        }
    }

    pub fn from_settings(http: Client, settings: &UpstreamSettings) -> Self {
        Self::new(http, settings.base_url.clone())
            .with_credentials(settings.host.clone(), settings.api_key.clone())
    }

    pub fn with_credentials(mut self, host: String, api_key: SecretString) -> Self {
        self.credentials = Some(ApiCredentials { host, api_key });
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single GET and decode the body as JSON. No retry, no timeout.
    pub async fn get_json(
        &self,
        path: &str,
        query: &UpstreamQuery,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))?;
        self.send(url, query).await
    }

    /// Like `get_json`, but every segment is appended percent-encoded, so
    /// caller supplied ids cannot leave their segment.
    pub async fn get_json_at(
        &self,
        segments: &[&str],
        query: &UpstreamQuery,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.url_for(segments)?;
        self.send(url, query).await
    }

    pub fn url_for(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, url: Url, query: &UpstreamQuery) -> Result<UpstreamResponse, UpstreamError> {
        tracing::debug!("Calling upstream {}", url);

        let mut request = self.http.get(url.clone()).query(query.params());
        if let Some(credentials) = &self.credentials {
            request = request
                .header(API_KEY_HEADER, credentials.api_key.expose_secret())
                .header(API_HOST_HEADER, credentials.host.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<Value>(&bytes)?;

        if !(200..300).contains(&status) {
            tracing::warn!("Upstream {} answered with status {}", url, status);
        }

        Ok(UpstreamResponse { status, body })
    }
}
