// src/config.rs
use crate::infrastructure::gnews::{DEFAULT_BASE_URL, GNewsSettings};
use secrecy::SecretString;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    gnews_api_key: SecretString,
    gnews_base_url: String,
    gnews_timeout: Duration,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://news.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_gnews_timeout() -> u64 {
    10
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables. Optional values fall
    /// back to defaults; `GNEWS_API_KEY` is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let gnews_api_key = env::var("GNEWS_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("GNEWS_API_KEY"))?;

        let gnews_base_url =
            env::var("GNEWS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if !gnews_base_url.starts_with("http://") && !gnews_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "GNEWS_API_BASE_URL must be an http(s) URL, got {gnews_base_url}"
            )));
        }

        let gnews_timeout_secs = match env::var("GNEWS_TIMEOUT_SECONDS") {
            Ok(raw) => raw.parse::<u64>().ok().filter(|v| *v > 0).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "GNEWS_TIMEOUT_SECONDS must be a positive integer, got {raw}"
                ))
            })?,
            Err(_) => default_gnews_timeout(),
        };

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            listen_addr,
            gnews_api_key: SecretString::from(gnews_api_key),
            gnews_base_url,
            gnews_timeout: Duration::from_secs(gnews_timeout_secs),
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Settings for the GNews client, including the secret api key.
    pub fn gnews_settings(&self) -> GNewsSettings {
        GNewsSettings {
            base_url: self.gnews_base_url.clone(),
            api_key: self.gnews_api_key.clone(),
            timeout: self.gnews_timeout,
        }
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
