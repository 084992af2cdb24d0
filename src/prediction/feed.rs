//! Sequenced prediction fetching
//!
//! Every new selection supersedes the previous one. The in-flight task for
//! the old selection is aborted and, should it still finish, its result is
//! dropped instead of being delivered.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{PredictionError, PredictionSource, Selection};
use crate::probability::ProbabilityTable;

/// A finished fetch, tagged with the selection generation that issued it
#[derive(Debug)]
pub struct Resolved {
    pub generation: u64,
    pub selection: Selection,
    pub outcome: Result<ProbabilityTable, PredictionError>,
}

/// Issues at most one live prediction request at a time
pub struct PredictionFeed {
    source: Arc<dyn PredictionSource>,
    timeout: Duration,
    generation: Arc<AtomicU64>,
    current: Option<Selection>,
    in_flight: Option<JoinHandle<()>>,
    tx: mpsc::Sender<Resolved>,
}

impl PredictionFeed {
    /// Create a feed and the receiver its results are delivered on
    pub fn new(
        source: Arc<dyn PredictionSource>,
        timeout: Duration,
    ) -> (Self, mpsc::Receiver<Resolved>) {
        let (tx, rx) = mpsc::channel(16);
        let feed = Self {
            source,
            timeout,
            generation: Arc::new(AtomicU64::new(0)),
            current: None,
            in_flight: None,
            tx,
        };
        (feed, rx)
    }

    /// Switch to `selection` and start fetching its table.
    ///
    /// Must be called from within a tokio runtime. Returns the generation
    /// number the eventual [`Resolved`] will carry.
    pub fn select(&mut self, selection: Selection) -> u64 {
        self.abort_in_flight();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.current = Some(selection.clone());

        let source = Arc::clone(&self.source);
        let latest = Arc::clone(&self.generation);
        let tx = self.tx.clone();
        let timeout = self.timeout;

        self.in_flight = Some(tokio::spawn(async move {
            let outcome = match tokio::time::timeout(timeout, source.fetch(&selection)).await {
                Ok(Ok(prediction)) => prediction.into_table(),
                Ok(Err(e)) => Err(e),
                Err(_) => Err(PredictionError::Timeout(timeout)),
            };

            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(generation, "Discarding stale prediction");
                return;
            }

            if let Err(e) = &outcome {
                tracing::warn!(error = %e, stat = %selection.stat, "Prediction unavailable");
            }

            let resolved = Resolved {
                generation,
                selection,
                outcome,
            };
            if tx.send(resolved).await.is_err() {
                tracing::debug!(generation, "Prediction receiver dropped");
            }
        }));

        generation
    }

    /// Drop the current selection and anything in flight for it
    pub fn cancel(&mut self) {
        self.abort_in_flight();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.current = None;
    }

    /// Current selection, if any
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Whether `generation` is still the live request
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.is_some() && self.generation.load(Ordering::SeqCst) == generation
    }

    /// Pass `resolved` through only if it answers the live selection.
    ///
    /// A task can get past its own staleness check just before a new
    /// `select`, so consumers should filter through this as well.
    pub fn accept(&self, resolved: Resolved) -> Option<Resolved> {
        if self.is_current(resolved.generation) {
            Some(resolved)
        } else {
            tracing::debug!(generation = resolved.generation, "Ignoring stale prediction");
            None
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for PredictionFeed {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}
