// src/domain/news/filters.rs
use crate::domain::news::entity::NewsArticle;
use crate::domain::news::value_objects::Language;
use chrono::{DateTime, Utc};

/// Read-side filter set. Every populated field narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilters {
    /// Substring match over title, description and content.
    pub keyword: Option<String>,
    pub language: Option<Language>,
    /// Exact source name.
    pub source: Option<String>,
    /// Inclusive lower bound on `published_at`.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `published_at`.
    pub to: Option<DateTime<Utc>>,
}

impl ArticleFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// In-process evaluation of the filter set. Keyword matching folds ASCII
    /// case only, the same way SQLite's `LIKE` does.
    pub fn matches(&self, article: &NewsArticle) -> bool {
        if let Some(keyword) = &self.keyword {
            let needle = keyword.to_ascii_lowercase();
            let content = article.content();
            let hit = [content.title(), content.description(), content.content()]
                .iter()
                .any(|field| field.to_ascii_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if article.language() != language {
                return false;
            }
        }
        if let Some(source) = &self.source {
            if article.source().name() != source {
                return false;
            }
        }
        if let Some(from) = self.from {
            if article.published_at() < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if article.published_at() > to {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::news::{ArticleContent, ExternalId, Source};
    use chrono::TimeZone;

    fn article() -> NewsArticle {
        let published = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();
        NewsArticle::create(
            ExternalId::new("https://x/1").unwrap(),
            ArticleContent::new("Rust 2024 released", "Edition notes", "Body").unwrap(),
            Source::new("Wire").unwrap(),
            "https://x/1",
            None,
            published,
            Language::new("en").unwrap(),
            published,
        )
    }

    #[test]
    fn empty_filters_match_everything() {
        assert!(ArticleFilters::default().is_empty());
        assert!(ArticleFilters::default().matches(&article()));
    }

    #[test]
    fn keyword_is_case_insensitive_across_text_fields() {
        let by_title = ArticleFilters {
            keyword: Some("RUST".into()),
            ..Default::default()
        };
        let by_description = ArticleFilters {
            keyword: Some("edition".into()),
            ..Default::default()
        };
        let miss = ArticleFilters {
            keyword: Some("python".into()),
            ..Default::default()
        };
        assert!(by_title.matches(&article()));
        assert!(by_description.matches(&article()));
        assert!(!miss.matches(&article()));
    }

    #[test]
    fn keyword_folds_ascii_case_only() {
        let accented = NewsArticle::create(
            ExternalId::new("https://x/2").unwrap(),
            ArticleContent::new("Élections en Europe", "", "").unwrap(),
            Source::new("Wire").unwrap(),
            "https://x/2",
            None,
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap(),
            Language::new("fr").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap(),
        );
        let folded = |keyword: &str| ArticleFilters {
            keyword: Some(keyword.into()),
            ..Default::default()
        };
        assert!(!folded("élections").matches(&accented));
        assert!(folded("ÉLECTIONS").matches(&accented));
        assert!(folded("EUROPE").matches(&accented));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();
        let window = ArticleFilters {
            from: Some(at),
            to: Some(at),
            ..Default::default()
        };
        assert!(window.matches(&article()));

        let later = ArticleFilters {
            from: Some(Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert!(!later.matches(&article()));
    }

    #[test]
    fn language_and_source_are_exact() {
        let other_language = ArticleFilters {
            language: Some(Language::new("fr").unwrap()),
            ..Default::default()
        };
        let other_source = ArticleFilters {
            source: Some("wire".into()),
            ..Default::default()
        };
        assert!(!other_language.matches(&article()));
        assert!(!other_source.matches(&article()));
    }
}
