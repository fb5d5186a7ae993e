// tests/support/builders.rs
use chrono::{DateTime, Utc};
use news_aggregator::domain::news::{ArticleContent, ExternalId, Language, NewsArticle, Source};

use super::mocks::fixed_now;

pub struct NewsArticleBuilder {
    url: String,
    title: String,
    description: String,
    content: String,
    source: String,
    image_url: Option<String>,
    published_at: DateTime<Utc>,
    language: String,
    created_at: DateTime<Utc>,
}

impl NewsArticleBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: "T".into(),
            description: String::new(),
            content: String::new(),
            source: "Unknown".into(),
            image_url: None,
            published_at: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            language: "en".into(),
            created_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn published_at(mut self, rfc3339: &str) -> Self {
        self.published_at = DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc);
        self
    }

    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = code.into();
        self
    }

    /// Creation time; a freshly created article has `updated_at` equal to it.
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> NewsArticle {
        let external_id = ExternalId::new(self.url.clone()).unwrap();
        let content = ArticleContent::new(self.title, self.description, self.content).unwrap();
        let source = Source::new(self.source).unwrap();
        let language = Language::new(self.language).unwrap();

        NewsArticle::create(
            external_id,
            content,
            source,
            self.url,
            self.image_url,
            self.published_at,
            language,
            self.created_at,
        )
    }
}
