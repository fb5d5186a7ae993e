use super::NewsQueryService;
use crate::{
    application::{
        dto::NewsArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::NewsArticleId,
};

pub struct GetNewsByIdQuery {
    pub id: i64,
}

impl NewsQueryService {
    pub async fn get_news(&self, query: GetNewsByIdQuery) -> ApplicationResult<NewsArticleDto> {
        let id = NewsArticleId::new(query.id)
            .map_err(|_| ApplicationError::not_found("Article not found"))?;
        let article = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;
        Ok(article.into())
    }
}
