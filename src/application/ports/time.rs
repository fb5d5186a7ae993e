// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for aggregate timestamps and fetch-time defaults.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
