use std::sync::Arc;

use crate::domain::news::NewsArticleRepository;

pub struct NewsQueryService {
    pub(super) repository: Arc<dyn NewsArticleRepository>,
}

impl NewsQueryService {
    pub fn new(repository: Arc<dyn NewsArticleRepository>) -> Self {
        Self { repository }
    }
}
