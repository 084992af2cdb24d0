//! Saved-parlay persistence gateway
//!
//! The whole collection is loaded once per session and rewritten in full on
//! every change, which keeps saves idempotent.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::parlay::Parlay;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Stored data could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Backend refused the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Trait for parlay persistence backends
#[async_trait]
pub trait ParlayStore: Send + Sync {
    /// Load every saved parlay
    async fn load(&self) -> Result<Vec<Parlay>, StoreError>;
    /// Replace the stored collection with `parlays`
    async fn save(&self, parlays: &[Parlay]) -> Result<(), StoreError>;
}
