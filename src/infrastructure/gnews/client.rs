use super::payload::{SearchResponse, map_article};
use crate::application::ports::news_source::{FetchParameters, NewsSource, NewsSourceError};
use crate::application::ports::time::Clock;
use crate::domain::news::NewsArticle;
use async_trait::async_trait;
use chrono::NaiveDate;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

#[derive(Clone)]
pub struct GNewsSettings {
    pub base_url: String,
    pub api_key: SecretString,
    pub timeout: Duration,
}

/// `NewsSource` backed by the GNews search endpoint.
pub struct GNewsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    clock: Arc<dyn Clock>,
}

impl GNewsClient {
    pub fn new(settings: GNewsSettings, clock: Arc<dyn Clock>) -> Result<Self, NewsSourceError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| NewsSourceError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            clock,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.base_url)
    }

    fn query(&self, params: &FetchParameters) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("apikey", self.api_key.expose_secret().to_string()),
            ("max", params.max.to_string()),
        ];
        if let Some(keyword) = &params.keyword {
            query.push(("q", keyword.clone()));
        }
        if let Some(language) = &params.language {
            query.push(("lang", language.code().to_string()));
        }
        if let Some(country) = &params.country {
            query.push(("country", country.clone()));
        }
        if let Some(from) = params.from {
            query.push(("from", day_start(from)));
        }
        if let Some(to) = params.to {
            query.push(("to", day_start(to)));
        }
        query
    }

    async fn request(&self, params: &FetchParameters) -> Result<SearchResponse, NewsSourceError> {
        let response = self
            .http
            .get(self.endpoint())
            .query(&self.query(params))
            .send()
            .await
            .map_err(|e| NewsSourceError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(NewsSourceError::Status(status.as_u16()));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| NewsSourceError::Decode(e.without_url().to_string()))
    }
}

// The upstream API takes ISO 8601 instants; a bare date means its midnight UTC.
fn day_start(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}

#[async_trait]
impl NewsSource for GNewsClient {
    async fn fetch_articles(
        &self,
        params: &FetchParameters,
    ) -> Result<Vec<NewsArticle>, NewsSourceError> {
        let body = match self.request(params).await {
            Ok(body) => body,
            Err(err) => {
                // The api key lives in the query string; never log the URL.
                tracing::error!(
                    error = %err,
                    keyword = ?params.keyword,
                    country = ?params.country,
                    "GNews API request failed"
                );
                return Err(err);
            }
        };

        tracing::debug!(
            total = ?body.total_articles,
            received = body.articles.len(),
            "GNews search returned"
        );

        let now = self.clock.now();
        let articles = body
            .articles
            .into_iter()
            .filter_map(|record| match map_article(record, now) {
                Ok(article) => Some(article),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to parse article");
                    None
                }
            })
            .collect();

        Ok(articles)
    }
}
