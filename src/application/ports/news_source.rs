// src/application/ports/news_source.rs
use crate::domain::news::{Language, NewsArticle};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

pub const DEFAULT_MAX_ARTICLES: u32 = 10;

/// Validated search parameters for the upstream news source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParameters {
    pub keyword: Option<String>,
    pub language: Option<Language>,
    pub country: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub max: u32,
}

impl Default for FetchParameters {
    fn default() -> Self {
        Self {
            keyword: None,
            language: None,
            country: None,
            from: None,
            to: None,
            max: DEFAULT_MAX_ARTICLES,
        }
    }
}

#[derive(Debug, Error)]
pub enum NewsSourceError {
    #[error("news source unreachable: {0}")]
    Transport(String),
    #[error("news source returned status code: {0}")]
    Status(u16),
    #[error("news source response could not be decoded: {0}")]
    Decode(String),
}

/// Upstream article search. Implementations drop records they cannot map
/// into a valid [`NewsArticle`] rather than failing the whole fetch.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_articles(
        &self,
        params: &FetchParameters,
    ) -> Result<Vec<NewsArticle>, NewsSourceError>;
}
