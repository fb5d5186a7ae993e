// src/domain/news/entity.rs
use crate::domain::news::value_objects::{
    ArticleContent, ExternalId, Language, NewsArticleId, Source,
};
use chrono::{DateTime, Utc};

/// A news article as seen by the ingestion pipeline.
///
/// `external_id` is fixed for the lifetime of the aggregate and is the key
/// used to reconcile upstream records against stored ones. `updated_at`
/// only moves forward, and only when an `update_*` call changes a field.
#[derive(Debug, Clone)]
pub struct NewsArticle {
    id: Option<NewsArticleId>,
    external_id: ExternalId,
    content: ArticleContent,
    source: Source,
    url: String,
    image_url: Option<String>,
    published_at: DateTime<Utc>,
    language: Language,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewsArticle {
    /// Build an article first seen upstream. It has no storage identity yet.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        external_id: ExternalId,
        content: ArticleContent,
        source: Source,
        url: impl Into<String>,
        image_url: Option<String>,
        published_at: DateTime<Utc>,
        language: Language,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            external_id,
            content,
            source,
            url: url.into(),
            image_url,
            published_at,
            language,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild an article loaded from storage.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: NewsArticleId,
        external_id: ExternalId,
        content: ArticleContent,
        source: Source,
        url: impl Into<String>,
        image_url: Option<String>,
        published_at: DateTime<Utc>,
        language: Language,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            external_id,
            content,
            source,
            url: url.into(),
            image_url,
            published_at,
            language,
            created_at,
            updated_at,
        }
    }

    pub fn update_content(&mut self, content: ArticleContent, now: DateTime<Utc>) -> bool {
        if self.content == content {
            return false;
        }
        self.content = content;
        self.touch(now);
        true
    }

    pub fn update_source(&mut self, source: Source, now: DateTime<Utc>) -> bool {
        if self.source == source {
            return false;
        }
        self.source = source;
        self.touch(now);
        true
    }

    pub fn update_url(&mut self, url: impl Into<String>, now: DateTime<Utc>) -> bool {
        let url = url.into();
        if self.url == url {
            return false;
        }
        self.url = url;
        self.touch(now);
        true
    }

    pub fn update_image_url(&mut self, image_url: Option<String>, now: DateTime<Utc>) -> bool {
        if self.image_url == image_url {
            return false;
        }
        self.image_url = image_url;
        self.touch(now);
        true
    }

    pub fn update_published_at(&mut self, published_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        if self.published_at == published_at {
            return false;
        }
        self.published_at = published_at;
        self.touch(now);
        true
    }

    /// Whether `content` or `published_at` differ from what this article holds.
    /// Source, url and image are not compared.
    pub fn has_content_changed(
        &self,
        content: &ArticleContent,
        published_at: DateTime<Utc>,
    ) -> bool {
        self.content != *content || self.published_at != published_at
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        // never move backwards, even if the clock does
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    pub fn id(&self) -> Option<NewsArticleId> {
        self.id
    }

    pub fn external_id(&self) -> &ExternalId {
        &self.external_id
    }

    pub fn content(&self) -> &ArticleContent {
        &self.content
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn content(title: &str) -> ArticleContent {
        ArticleContent::new(title, "description", "body").unwrap()
    }

    fn sample_article() -> NewsArticle {
        NewsArticle::create(
            ExternalId::new("https://x/1").unwrap(),
            content("T"),
            Source::new("Wire").unwrap(),
            "https://x/1",
            Some("https://x/1.png".into()),
            t0(),
            Language::new("en").unwrap(),
            t0(),
        )
    }

    #[test]
    fn create_has_no_identity_and_equal_timestamps() {
        let article = sample_article();
        assert!(article.id().is_none());
        assert_eq!(article.created_at(), t0());
        assert_eq!(article.updated_at(), t0());
    }

    #[test]
    fn reconstitute_keeps_supplied_fields() {
        let later = t0() + Duration::hours(2);
        let article = NewsArticle::reconstitute(
            NewsArticleId::new(9).unwrap(),
            ExternalId::new("https://x/9").unwrap(),
            content("T"),
            Source::new("Wire").unwrap(),
            "https://x/9",
            None,
            t0(),
            Language::new("de").unwrap(),
            t0(),
            later,
        );
        assert_eq!(article.id(), Some(NewsArticleId(9)));
        assert_eq!(article.created_at(), t0());
        assert_eq!(article.updated_at(), later);
        assert_eq!(article.language().code(), "de");
    }

    #[test]
    fn equal_values_are_noops() {
        let mut article = sample_article();
        let later = t0() + Duration::minutes(5);
        assert!(!article.update_content(content("T"), later));
        assert!(!article.update_source(Source::new("Wire").unwrap(), later));
        assert!(!article.update_url("https://x/1", later));
        assert!(!article.update_image_url(Some("https://x/1.png".into()), later));
        assert!(!article.update_published_at(t0(), later));
        assert_eq!(article.updated_at(), t0());
    }

    #[test]
    fn each_effective_update_advances_updated_at() {
        let mut article = sample_article();

        let t1 = t0() + Duration::minutes(1);
        assert!(article.update_content(content("T2"), t1));
        assert_eq!(article.updated_at(), t1);

        let t2 = t1 + Duration::minutes(1);
        assert!(article.update_source(Source::new("Other").unwrap(), t2));
        assert_eq!(article.updated_at(), t2);

        let t3 = t2 + Duration::minutes(1);
        assert!(article.update_url("https://x/1?amp", t3));
        assert_eq!(article.updated_at(), t3);

        let t4 = t3 + Duration::minutes(1);
        assert!(article.update_image_url(None, t4));
        assert_eq!(article.updated_at(), t4);

        let t5 = t4 + Duration::minutes(1);
        assert!(article.update_published_at(t0() + Duration::days(1), t5));
        assert_eq!(article.updated_at(), t5);
        assert_eq!(article.created_at(), t0());
    }

    #[test]
    fn updated_at_never_moves_backwards() {
        let mut article = sample_article();
        let earlier = t0() - Duration::hours(1);
        assert!(article.update_content(content("T2"), earlier));
        assert_eq!(article.updated_at(), t0());
    }

    #[test]
    fn change_detection_covers_content_and_publication_time() {
        let article = sample_article();
        assert!(!article.has_content_changed(&content("T"), t0()));
        assert!(article.has_content_changed(&content("T2"), t0()));
        assert!(article.has_content_changed(
            &ArticleContent::new("T", "other", "body").unwrap(),
            t0()
        ));
        assert!(article.has_content_changed(
            &ArticleContent::new("T", "description", "other").unwrap(),
            t0()
        ));
        assert!(article.has_content_changed(&content("T"), t0() + Duration::seconds(1)));
        assert!(article.has_content_changed(
            &content("T"),
            t0() + Duration::nanoseconds(1)
        ));
    }
}
