// src/application/commands/news/mod.rs
mod ingest;
mod service;

pub use ingest::{IngestNewsCommand, IngestNewsCommandBuilder};
pub use service::NewsCommandService;
