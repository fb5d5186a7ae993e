pub mod entity;
pub mod filters;
pub mod repository;
pub mod value_objects;

pub use entity::NewsArticle;
pub use filters::ArticleFilters;
pub use repository::NewsArticleRepository;
pub use value_objects::{ArticleContent, ExternalId, Language, NewsArticleId, Source};
