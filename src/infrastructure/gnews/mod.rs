// src/infrastructure/gnews/mod.rs
mod client;
mod payload;

pub use client::{DEFAULT_BASE_URL, GNewsClient, GNewsSettings};
