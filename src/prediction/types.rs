//! Prediction service payloads
//!
//! The service answers in two shapes. Both are normalized into a
//! [`ProbabilityTable`] before anything downstream sees them.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{Position, StatKey};
use crate::probability::ProbabilityTable;

/// What is being predicted: one player, one stat, one opponent
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub player_id: u32,
    pub position: Position,
    pub stat: StatKey,
    /// Upper-case team abbreviation
    pub opponent: String,
}

/// Prediction fetch errors
#[derive(Debug, Error)]
pub enum PredictionError {
    /// Service answered but had no usable table
    #[error("Prediction unavailable: {0}")]
    Unavailable(String),
    /// Request did not finish in time
    #[error("Prediction request timed out after {0:?}")]
    Timeout(Duration),
    /// Transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Body was not a recognizable prediction
    #[error("Could not decode prediction: {0}")]
    Decode(String),
}

/// Yardage or count prediction
#[derive(Debug, Clone, Deserialize)]
pub struct YardagePrediction {
    /// Benchmark (as string key) → OVER probability in percent
    pub probabilities: BTreeMap<String, f64>,
    #[serde(default, alias = "projected_yards")]
    pub projected_value: Option<f64>,
}

/// Touchdown prediction
#[derive(Debug, Clone, Deserialize)]
pub struct TouchdownPrediction {
    /// TD count → probability of scoring at least that many
    #[serde(default)]
    pub td_probabilities: Option<BTreeMap<String, f64>>,
    /// Single anytime-TD probability, used when no count table is given
    #[serde(default)]
    pub td_probability: Option<f64>,
    pub avg_tds_per_game: f64,
}

/// Either response shape
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    Touchdown(TouchdownPrediction),
    Yardage(YardagePrediction),
}

impl Prediction {
    /// Normalize into the canonical table.
    ///
    /// An empty result is reported as [`PredictionError::Unavailable`], never
    /// as a table of zeros.
    pub fn into_table(self) -> Result<ProbabilityTable, PredictionError> {
        let table = match self {
            Prediction::Yardage(yardage) => table_from_keyed(yardage.probabilities),
            Prediction::Touchdown(td) => match (td.td_probabilities, td.td_probability) {
                (Some(counts), _) if !counts.is_empty() => table_from_keyed(counts),
                (_, Some(anytime)) => ProbabilityTable::from_f64_pairs([(1.0, anytime)]),
                _ => ProbabilityTable::new(),
            },
        };

        if table.is_empty() {
            return Err(PredictionError::Unavailable(
                "prediction service returned no benchmarks".to_string(),
            ));
        }
        Ok(table)
    }
}

fn table_from_keyed(entries: BTreeMap<String, f64>) -> ProbabilityTable {
    let mut table = ProbabilityTable::new();
    for (key, probability) in entries {
        let threshold = match Decimal::from_str(key.trim()) {
            Ok(t) => t,
            Err(_) => {
                tracing::warn!(key = %key, "Ignoring non-numeric benchmark key");
                continue;
            }
        };
        match Decimal::try_from(probability) {
            Ok(p) => table.insert(threshold, p),
            Err(_) => tracing::warn!(key = %key, "Ignoring non-finite probability"),
        }
    }
    table
}

/// Response envelope used by every prediction endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<Prediction>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    pub(crate) fn into_prediction(self) -> Result<Prediction, PredictionError> {
        if !self.success {
            return Err(PredictionError::Unavailable(
                self.error.unwrap_or_else(|| "service reported failure".to_string()),
            ));
        }
        self.prediction
            .ok_or_else(|| PredictionError::Unavailable("response had no prediction".to_string()))
    }
}
