//! Parlay types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::leg::Leg;
use crate::pricing::{combine, payout, to_american_odds, AmericanOdds};
use crate::store::StoreError;

/// Parlay identifier (creation time in milliseconds, unique per collection)
pub type ParlayId = i64;

/// Maximum legs in one parlay
pub const MAX_LEGS: usize = 10;

/// A combined wager.
///
/// Probability, odds and payout are never stored; see [`Parlay::summary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parlay {
    pub id: ParlayId,
    pub created_at: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bet_amount: Decimal,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// Figures derived from a parlay's legs and stake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParlaySummary {
    /// Number of legs
    pub legs: usize,
    /// Legs that contributed a probability
    pub priced_legs: usize,
    /// Combined win probability in percent
    pub combined_probability: Decimal,
    /// Fair moneyline, `None` when undefined
    pub odds: Option<AmericanOdds>,
    /// Profit on a win
    pub profit: Decimal,
    /// Stake plus profit
    pub total_return: Decimal,
}

impl Parlay {
    /// Create an empty parlay
    pub fn new(id: ParlayId, created_at: DateTime<Utc>, bet_amount: Decimal) -> Self {
        Self {
            id,
            created_at,
            bet_amount,
            legs: Vec::new(),
        }
    }

    /// Combined probability of every leg hitting
    pub fn combined_probability(&self) -> Decimal {
        combine(&self.legs)
    }

    /// Recompute probability, odds and payout from legs and stake
    pub fn summary(&self) -> ParlaySummary {
        let combined_probability = self.combined_probability();
        let odds = to_american_odds(combined_probability);
        let profit = payout(odds, self.bet_amount);

        ParlaySummary {
            legs: self.legs.len(),
            priced_legs: self.legs.iter().filter(|l| l.probability.is_some()).count(),
            combined_probability,
            odds,
            profit,
            total_return: self.bet_amount + profit,
        }
    }

    pub fn is_full(&self) -> bool {
        self.legs.len() >= MAX_LEGS
    }
}

/// Parlay lifecycle errors
#[derive(Debug, Error)]
pub enum ParlayError {
    /// Draft already holds the maximum number of legs
    #[error("Parlay is full ({max} legs)")]
    CapacityExceeded { max: usize },
    /// Stake rejected; the previous stake is kept
    #[error("Invalid stake: {0}")]
    InvalidStake(String),
    /// Operation needs a draft and there is none
    #[error("No parlay is being drafted")]
    NotDrafting,
    /// `start` called while a draft exists
    #[error("A parlay draft is already in progress")]
    DraftInProgress,
    /// No id above the largest saved id is left
    #[error("No parlay id available after {last}")]
    IdsExhausted { last: ParlayId },
    /// Persistence gateway failed; in-memory state is unchanged
    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

/// Result of a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Draft persisted under this id
    Saved(ParlayId),
    /// Draft had no legs; nothing happened
    Empty,
}
