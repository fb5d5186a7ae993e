// tests/support/mocks/news_source.rs
use async_trait::async_trait;
use news_aggregator::application::ports::news_source::{
    FetchParameters, NewsSource, NewsSourceError,
};
use news_aggregator::domain::news::NewsArticle;
use std::sync::Mutex;

/// Returns a canned batch, or fails with the given upstream status.
#[derive(Debug, Default)]
pub struct StubNewsSource {
    articles: Vec<NewsArticle>,
    fail_status: Option<u16>,
    seen: Mutex<Vec<FetchParameters>>,
}

impl StubNewsSource {
    pub fn returning(articles: Vec<NewsArticle>) -> Self {
        Self {
            articles,
            ..Default::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Default::default()
        }
    }

    /// Parameters of every fetch made so far.
    pub fn requests(&self) -> Vec<FetchParameters> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsSource for StubNewsSource {
    async fn fetch_articles(
        &self,
        params: &FetchParameters,
    ) -> Result<Vec<NewsArticle>, NewsSourceError> {
        self.seen.lock().unwrap().push(params.clone());
        match self.fail_status {
            Some(status) => Err(NewsSourceError::Status(status)),
            None => Ok(self.articles.clone()),
        }
    }
}
