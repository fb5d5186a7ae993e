use crate::domain::errors::DomainError;
use crate::domain::news::{ArticleContent, ExternalId, Language, NewsArticle, Source};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

const UNKNOWN_SOURCE: &str = "Unknown";

/// Envelope of `GET /search`. Records stay untyped until mapped one by one
/// so a single malformed entry cannot fail the whole page.
#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(rename = "totalArticles", default)]
    pub total_articles: Option<u64>,
    #[serde(default)]
    pub articles: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSource {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    url: Option<String>,
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    language: Option<String>,
    #[serde(default)]
    source: Option<RawSource>,
}

#[derive(Debug, Error)]
pub(super) enum MappingError {
    #[error("missing article url")]
    MissingUrl,
    #[error("malformed article record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid publishedAt value: {0}")]
    PublishedAt(String),
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Turn one raw record into a candidate article. Defaults apply only to
/// absent or null keys; an empty string is validated like any other value.
/// `now` stands in for a missing or empty publication time and seeds the
/// timestamps of the new aggregate.
pub(super) fn map_article(record: Value, now: DateTime<Utc>) -> Result<NewsArticle, MappingError> {
    let raw: RawArticle = serde_json::from_value(record)?;

    let url = raw.url.ok_or(MappingError::MissingUrl)?;
    let external_id = ExternalId::new(url.clone())?;

    let content = ArticleContent::new(
        raw.title.unwrap_or_default(),
        raw.description.unwrap_or_default(),
        raw.content.unwrap_or_default(),
    )?;

    let source_name = raw
        .source
        .and_then(|s| s.name)
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

    let published_at = match raw.published_at.filter(|v| !v.trim().is_empty()) {
        Some(value) => DateTime::parse_from_rfc3339(&value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| MappingError::PublishedAt(value))?,
        None => now,
    };

    let language = match raw.language {
        Some(code) => Language::new(code)?,
        None => Language::default(),
    };

    Ok(NewsArticle::create(
        external_id,
        content,
        Source::new(source_name)?,
        url,
        raw.image,
        published_at,
        language,
        now,
    ))
}
