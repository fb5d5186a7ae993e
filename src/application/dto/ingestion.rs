use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-batch ingestion counters. Each fetched candidate lands in exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngestionStats {
    pub saved: u64,
    pub updated: u64,
    pub skipped: u64,
    pub errors: u64,
}

impl IngestionStats {
    pub fn total(&self) -> u64 {
        self.saved + self.updated + self.skipped + self.errors
    }
}
