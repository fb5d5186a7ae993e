use crate::domain::news::NewsArticle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsArticleDto {
    pub id: Option<i64>,
    pub external_id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub source_name: String,
    pub url: String,
    pub image_url: Option<String>,
    #[serde(with = "serde_time")]
    pub published_at: DateTime<Utc>,
    pub language: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<&NewsArticle> for NewsArticleDto {
    fn from(article: &NewsArticle) -> Self {
        let content = article.content();
        Self {
            id: article.id().map(Into::into),
            external_id: article.external_id().as_str().to_string(),
            title: content.title().to_string(),
            description: content.description().to_string(),
            content: content.content().to_string(),
            source_name: article.source().name().to_string(),
            url: article.url().to_string(),
            image_url: article.image_url().map(str::to_string),
            published_at: article.published_at(),
            language: article.language().code().to_string(),
            created_at: article.created_at(),
            updated_at: article.updated_at(),
        }
    }
}

impl From<NewsArticle> for NewsArticleDto {
    fn from(article: NewsArticle) -> Self {
        Self::from(&article)
    }
}
