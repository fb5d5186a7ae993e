pub mod ingestion;
pub mod news;
pub mod pagination;
pub mod serde_time;

pub use ingestion::IngestionStats;
pub use news::NewsArticleDto;
pub use pagination::PaginatedResponse;
