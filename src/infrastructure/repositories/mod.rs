// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_news_article;

pub use error::map_sqlx;
pub use sqlite_news_article::SqliteNewsArticleRepository;
