use std::env;
use config::{Config, File, ConfigError};
use dotenv::dotenv;
use secrecy::{ExposeSecret, SecretString};

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub odds: ServiceSettings,
    pub video: ServiceSettings,
    pub gateway: GatewaySettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    pub log_level: String,
}

/// Settings shared by the odds and the video service: where to listen,
/// where to persist and which upstream API to proxy.
#[derive(serde::Deserialize, Debug)]
pub struct ServiceSettings {
    pub port: u16,
    pub database: DatabaseSettings,
    pub upstream: UpstreamSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct DatabaseSettings {
    pub user: String,
    pub password: SecretString,
    pub port: u16,
    pub host: String,
    pub db_name: String,
    #[serde(default)]
    pub db_url: Option<SecretString>
}

impl DatabaseSettings {
    pub fn connection_string(&self) -> SecretString {
        match &self.db_url {
            Some(db_url) => db_url.clone(),
            None => {
                SecretString::new(format!(
                    "postgres://{}:{}@{}:{}/{}",
                    self.user, self.password.expose_secret(), self.host, self.port, self.db_name
                ).into_boxed_str())
            }
        }
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}",
            self.user, self.password.expose_secret(), self.host, self.port
        )
    }
}

/// RapidAPI style upstream: every call carries the key and the host name
/// as request headers.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub host: String,
    pub api_key: SecretString,
}

#[derive(serde::Deserialize, Debug)]
pub struct GatewaySettings {
    pub port: u16,
    pub odds_urls: Vec<String>,
    pub video_urls: Vec<String>,
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    dotenv().ok();

    let environment = Environment::try_from(
        env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into())
    )
    .map_err(ConfigError::Message)?;

    let env_filename = format!("{}.yml", environment.as_str());
    let config = Config::builder()
        .add_source(File::from(configuration_directory.join("base.yml")))
        .add_source(File::from(configuration_directory.join(env_filename)))
        .add_source(
            config::Environment::default()
                .prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("gateway.odds_urls")
                .with_list_parse_key("gateway.video_urls")
        )
        .build()?;

    let mut settings = config.try_deserialize::<Settings>()?;

    apply_env_overrides(&mut settings, |key| env::var(key).ok())?;

    Ok(settings)
}

/// Deployment overrides read from plain environment variables.
///
/// `DB_HOST` and its older spelling `DB_URL` both name the database host
/// shared by the two services; `DB_HOST` wins when both are set.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Both upstreams live on the same RapidAPI account
    if let Some(api_key) = lookup("API_KEY") {
        settings.odds.upstream.api_key = SecretString::new(api_key.clone().into_boxed_str());
        settings.video.upstream.api_key = SecretString::new(api_key.into_boxed_str());
    }

    if let Some(db_host) = lookup("DB_HOST").or_else(|| lookup("DB_URL")) {
        settings.odds.database.host = db_host.clone();
        settings.video.database.host = db_host;
    }

    if let Some(db_port) = lookup("DB_PORT") {
        let port = db_port
            .parse::<u16>()
            .map_err(|e| ConfigError::Message(format!("DB_PORT is not a valid port: {}", e)))?;
        settings.odds.database.port = port;
        settings.video.database.port = port;
    }

    if let Some(db_url) = lookup("ODDS_DATABASE_URL") {
        settings.odds.database.db_url = Some(SecretString::new(db_url.into_boxed_str()));
    }

    if let Some(db_url) = lookup("VIDEO_DATABASE_URL") {
        settings.video.database.db_url = Some(SecretString::new(db_url.into_boxed_str()));
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
