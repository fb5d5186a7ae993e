use crate::domain::errors::DomainResult;
use crate::domain::news::entity::NewsArticle;
use crate::domain::news::filters::ArticleFilters;
use crate::domain::news::value_objects::{ExternalId, NewsArticleId};
use async_trait::async_trait;

#[async_trait]
pub trait NewsArticleRepository: Send + Sync {
    async fn find_by_id(&self, id: NewsArticleId) -> DomainResult<Option<NewsArticle>>;

    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> DomainResult<Option<NewsArticle>>;

    /// Upsert keyed by external id. Storage identity and `created_at` of an
    /// existing record are never altered. Returns the persisted state.
    async fn save(&self, article: &NewsArticle) -> DomainResult<NewsArticle>;

    /// Ordered by `published_at` descending. `page` is 1-based.
    async fn find_with_filters(
        &self,
        filters: &ArticleFilters,
        page: u32,
        limit: u32,
    ) -> DomainResult<Vec<NewsArticle>>;

    async fn count_with_filters(&self, filters: &ArticleFilters) -> DomainResult<u64>;
}
