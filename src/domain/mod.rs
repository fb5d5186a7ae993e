pub mod errors;
pub mod news;
