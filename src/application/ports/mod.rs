// src/application/ports/mod.rs
pub mod news_source;
pub mod time;
