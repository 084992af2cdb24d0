//! Prediction service boundary
//!
//! Fetches benchmark tables per player/opponent/stat and normalizes both
//! response shapes into a [`ProbabilityTable`].

mod client;
mod feed;
mod types;

pub use client::{HttpPredictionClient, PredictionClientConfig, PREDICTION_API_URL};
pub use feed::{PredictionFeed, Resolved};
pub use types::{Prediction, PredictionError, Selection, TouchdownPrediction, YardagePrediction};

use async_trait::async_trait;

use crate::probability::ProbabilityTable;

/// Trait for prediction sources
#[async_trait]
pub trait PredictionSource: Send + Sync {
    /// Fetch the raw prediction for a selection
    async fn fetch(&self, selection: &Selection) -> Result<Prediction, PredictionError>;

    /// Fetch and normalize into a probability table
    async fn fetch_table(&self, selection: &Selection) -> Result<ProbabilityTable, PredictionError> {
        self.fetch(selection).await?.into_table()
    }
}
