use super::NewsQueryService;
use crate::{
    application::{
        dto::{NewsArticleDto, PaginatedResponse},
        error::ApplicationResult,
        validation::Violations,
    },
    domain::news::{ArticleFilters, Language},
};
use chrono::{NaiveDate, NaiveTime};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
const MAX_PAGE: u32 = 1000;
const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct ListNewsQuery {
    pub keyword: Option<String>,
    pub language: Option<String>,
    pub source: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListNewsQuery {
    /// Returns the store filters plus the validated `(page, limit)` window.
    pub fn validate(self) -> ApplicationResult<(ArticleFilters, u32, u32)> {
        let mut violations = Violations::default();

        violations.check_max_length("keyword", self.keyword.as_deref());
        violations.check_code("language", "Language", self.language.as_deref());
        violations.check_max_length("source", self.source.as_deref());
        let from = violations.parse_date("from", self.from.as_deref());
        let to = violations.parse_date("to", self.to.as_deref());
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        violations.check_range("page", "Page", page, 1, MAX_PAGE);
        violations.check_range("limit", "Limit", limit, 1, MAX_LIMIT);

        if !violations.is_empty() {
            return violations.finish((ArticleFilters::default(), page, limit));
        }

        let filters = ArticleFilters {
            keyword: self.keyword,
            language: self.language.map(Language::new).transpose()?,
            source: self.source,
            from: from.map(start_of_day),
            to: to.map(start_of_day),
        };
        violations.finish((filters, page, limit))
    }
}

// Dates are compared as midnight UTC on both bounds.
fn start_of_day(date: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

impl NewsQueryService {
    pub async fn list_news(
        &self,
        query: ListNewsQuery,
    ) -> ApplicationResult<PaginatedResponse<NewsArticleDto>> {
        let (filters, page, limit) = query.validate()?;

        let articles = self
            .repository
            .find_with_filters(&filters, page, limit)
            .await?;
        let total = self.repository.count_with_filters(&filters).await?;

        let items = articles.iter().map(NewsArticleDto::from).collect();
        Ok(PaginatedResponse::new(items, total, page, limit))
    }
}
