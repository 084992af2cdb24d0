//! In-memory store with failure injection

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{ParlayStore, StoreError};
use crate::parlay::Parlay;

/// Volatile store; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    parlays: Arc<RwLock<Vec<Parlay>>>,
    fail_loads: Arc<AtomicBool>,
    fail_saves: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent loads fail
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current contents
    pub async fn snapshot(&self) -> Vec<Parlay> {
        self.parlays.read().await.clone()
    }
}

#[async_trait]
impl ParlayStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Parlay>, StoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("load failure injected".to_string()));
        }
        Ok(self.parlays.read().await.clone())
    }

    async fn save(&self, parlays: &[Parlay]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("save failure injected".to_string()));
        }
        let mut stored = self.parlays.write().await;
        *stored = parlays.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
