// tests/support/mocks/repos.rs
use async_trait::async_trait;
use news_aggregator::domain::errors::{DomainError, DomainResult};
use news_aggregator::domain::news::{
    ArticleFilters, ExternalId, NewsArticle, NewsArticleId, NewsArticleRepository,
};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct State {
    rows: Vec<NewsArticle>,
    next_id: i64,
    saves: usize,
}

/// In-memory store with the same upsert contract as the SQLite repository.
/// Saves or lookups for the configured external ids fail.
#[derive(Debug, Default)]
pub struct InMemoryNewsRepo {
    state: Mutex<State>,
    failing_saves: HashSet<String>,
    failing_lookups: HashSet<String>,
}

impl InMemoryNewsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_save_for(mut self, external_id: impl Into<String>) -> Self {
        self.failing_saves.insert(external_id.into());
        self
    }

    pub fn fail_lookup_for(mut self, external_id: impl Into<String>) -> Self {
        self.failing_lookups.insert(external_id.into());
        self
    }

    /// Store articles directly, bypassing the failure switches.
    pub fn seed(self, articles: impl IntoIterator<Item = NewsArticle>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            for article in articles {
                let stored = assign_identity(&mut state, &article);
                state.rows.push(stored);
            }
            state.saves = 0;
        }
        self
    }

    pub fn all(&self) -> Vec<NewsArticle> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn get(&self, external_id: &str) -> Option<NewsArticle> {
        self.state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|a| a.external_id().as_str() == external_id)
            .cloned()
    }

    pub fn save_calls(&self) -> usize {
        self.state.lock().unwrap().saves
    }
}

fn assign_identity(state: &mut State, article: &NewsArticle) -> NewsArticle {
    let (id, created_at) = match article.id() {
        Some(id) => (id, article.created_at()),
        None => {
            state.next_id += 1;
            (NewsArticleId::new(state.next_id).unwrap(), article.created_at())
        }
    };
    NewsArticle::reconstitute(
        id,
        article.external_id().clone(),
        article.content().clone(),
        article.source().clone(),
        article.url(),
        article.image_url().map(str::to_string),
        article.published_at(),
        article.language().clone(),
        created_at,
        article.updated_at(),
    )
}

#[async_trait]
impl NewsArticleRepository for InMemoryNewsRepo {
    async fn find_by_id(&self, id: NewsArticleId) -> DomainResult<Option<NewsArticle>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|a| a.id() == Some(id))
            .cloned())
    }

    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> DomainResult<Option<NewsArticle>> {
        if self.failing_lookups.contains(external_id.as_str()) {
            return Err(DomainError::Persistence("lookup failed".into()));
        }
        Ok(self.get(external_id.as_str()))
    }

    async fn save(&self, article: &NewsArticle) -> DomainResult<NewsArticle> {
        if self.failing_saves.contains(article.external_id().as_str()) {
            return Err(DomainError::Persistence("save failed".into()));
        }

        let mut state = self.state.lock().unwrap();
        state.saves += 1;
        let position = state
            .rows
            .iter()
            .position(|a| a.external_id() == article.external_id());

        match position {
            Some(index) => {
                let existing = &state.rows[index];
                let (id, created_at) = (existing.id(), existing.created_at());
                let stored = NewsArticle::reconstitute(
                    id.expect("stored rows carry an id"),
                    article.external_id().clone(),
                    article.content().clone(),
                    article.source().clone(),
                    article.url(),
                    article.image_url().map(str::to_string),
                    article.published_at(),
                    article.language().clone(),
                    created_at,
                    article.updated_at(),
                );
                state.rows[index] = stored.clone();
                Ok(stored)
            }
            None => {
                let stored = assign_identity(&mut state, article);
                state.rows.push(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn find_with_filters(
        &self,
        filters: &ArticleFilters,
        page: u32,
        limit: u32,
    ) -> DomainResult<Vec<NewsArticle>> {
        let mut rows: Vec<NewsArticle> = self
            .all()
            .into_iter()
            .filter(|a| filters.matches(a))
            .collect();
        rows.sort_by(|a, b| {
            b.published_at()
                .cmp(&a.published_at())
                .then_with(|| b.id().map(i64::from).cmp(&a.id().map(i64::from)))
        });
        let skip = (page.max(1) as usize - 1) * limit as usize;
        Ok(rows.into_iter().skip(skip).take(limit as usize).collect())
    }

    async fn count_with_filters(&self, filters: &ArticleFilters) -> DomainResult<u64> {
        Ok(self.all().iter().filter(|a| filters.matches(a)).count() as u64)
    }
}
