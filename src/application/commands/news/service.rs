// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{news_source::NewsSource, time::Clock},
    domain::news::NewsArticleRepository,
};

pub struct NewsCommandService {
    pub(super) repository: Arc<dyn NewsArticleRepository>,
    pub(super) source: Arc<dyn NewsSource>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsCommandService {
    pub fn new(
        repository: Arc<dyn NewsArticleRepository>,
        source: Arc<dyn NewsSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            source,
            clock,
        }
    }
}
