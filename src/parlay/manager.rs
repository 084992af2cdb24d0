//! Serialized parlay lifecycle
//!
//! Wraps a [`ParlayBook`] in a single async mutex so concurrent callers see
//! every mutation applied atomically, including the persistence write that
//! goes with a save or delete.

use rust_decimal::Decimal;
use tokio::sync::Mutex;

use super::{LifecycleState, Parlay, ParlayBook, ParlayError, ParlayId, SaveOutcome};
use crate::config::ParlayConfig;
use crate::leg::{Leg, LegId};
use crate::store::ParlayStore;

/// Lifecycle manager backed by a persistence gateway
pub struct ParlayManager<S: ParlayStore> {
    store: S,
    book: Mutex<ParlayBook>,
}

impl<S: ParlayStore> ParlayManager<S> {
    /// Load the saved collection from `store` and start `Idle`
    pub async fn open(store: S, settings: &ParlayConfig) -> Result<Self, ParlayError> {
        if settings.default_stake <= Decimal::ZERO {
            return Err(ParlayError::InvalidStake(format!(
                "default stake {} is not positive",
                settings.default_stake
            )));
        }
        let saved = store.load().await?;
        tracing::info!(saved = saved.len(), "Loaded saved parlays");
        Ok(Self {
            store,
            book: Mutex::new(ParlayBook::new(saved, settings.default_stake)),
        })
    }

    pub async fn state(&self) -> LifecycleState {
        self.book.lock().await.state()
    }

    /// Copy of the current draft
    pub async fn draft(&self) -> Option<Parlay> {
        self.book.lock().await.draft().cloned()
    }

    /// Copy of the saved collection
    pub async fn saved(&self) -> Vec<Parlay> {
        self.book.lock().await.saved().to_vec()
    }

    pub async fn start(&self) -> Result<Parlay, ParlayError> {
        self.book.lock().await.start().cloned()
    }

    pub async fn add_leg(&self, leg: Leg) -> Result<usize, ParlayError> {
        self.book.lock().await.add_leg(leg)
    }

    pub async fn remove_leg(&self, id: LegId) -> Result<Option<Leg>, ParlayError> {
        self.book.lock().await.remove_leg(id)
    }

    pub async fn set_stake(&self, amount: Decimal) -> Result<Decimal, ParlayError> {
        self.book.lock().await.set_stake(amount)
    }

    pub async fn set_stake_input(&self, raw: &str) -> Result<Decimal, ParlayError> {
        self.book.lock().await.set_stake_input(raw)
    }

    pub async fn cancel(&self) -> Result<Parlay, ParlayError> {
        self.book.lock().await.cancel()
    }

    /// Persist the draft and return to `Idle`.
    ///
    /// An empty draft is left alone. If the store fails the draft and the
    /// saved collection stay exactly as they were.
    pub async fn save(&self) -> Result<SaveOutcome, ParlayError> {
        let mut book = self.book.lock().await;
        let Some(collection) = book.prepare_save()? else {
            tracing::debug!("Save ignored: draft has no legs");
            return Ok(SaveOutcome::Empty);
        };

        if let Err(e) = self.store.save(&collection).await {
            tracing::error!(error = %e, "Failed to persist parlay");
            return Err(e.into());
        }

        book.commit_save()
    }

    /// Delete a saved parlay in any state. Returns `false` for an unknown id.
    pub async fn delete(&self, id: ParlayId) -> Result<bool, ParlayError> {
        let mut book = self.book.lock().await;
        let Some(collection) = book.prepare_delete(id) else {
            return Ok(false);
        };

        if let Err(e) = self.store.save(&collection).await {
            tracing::error!(error = %e, parlay_id = id, "Failed to persist deletion");
            return Err(e.into());
        }

        Ok(book.commit_delete(id))
    }
}
