// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::news::NewsCommandService,
        ports::{news_source::NewsSource, time::Clock},
        queries::news::NewsQueryService,
    },
    domain::news::NewsArticleRepository,
};

pub struct ApplicationServices {
    pub news_commands: Arc<NewsCommandService>,
    pub news_queries: Arc<NewsQueryService>,
}

impl ApplicationServices {
    pub fn new(
        news_repo: Arc<dyn NewsArticleRepository>,
        news_source: Arc<dyn NewsSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let news_commands = Arc::new(NewsCommandService::new(
            Arc::clone(&news_repo),
            Arc::clone(&news_source),
            Arc::clone(&clock),
        ));
        let news_queries = Arc::new(NewsQueryService::new(Arc::clone(&news_repo)));

        Self {
            news_commands,
            news_queries,
        }
    }
}
