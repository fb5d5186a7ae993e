// src/infrastructure/mod.rs
pub mod database;
pub mod gnews;
pub mod repositories;
pub mod time;
