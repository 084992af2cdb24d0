//! Leg builder
//!
//! Collects a player, stat, threshold, direction and opponent, validates
//! them, and freezes the leg's probability from a prediction table.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use uuid::Uuid;

use super::{Leg, LegError, Player, THRESHOLD_DP};
use crate::catalog::{is_offered, StatKey};
use crate::prediction::Selection;
use crate::probability::{interpolate, Direction, ProbabilityTable, PROBABILITY_DP};

/// Builder for a single [`Leg`]
#[derive(Debug, Clone)]
pub struct LegBuilder {
    player: Player,
    stat: StatKey,
    threshold: Result<Decimal, LegError>,
    direction: Direction,
    opponent: String,
}

impl LegBuilder {
    /// Start a leg for `player` on `stat`. Direction defaults to OVER.
    pub fn new(player: Player, stat: StatKey) -> Self {
        Self {
            player,
            stat,
            threshold: Err(LegError::InvalidThreshold("threshold is required".to_string())),
            direction: Direction::Over,
            opponent: String::new(),
        }
    }

    /// Set the threshold from a number; NaN and infinities are rejected at build
    pub fn threshold(mut self, value: f64) -> Self {
        self.threshold = Decimal::try_from(value)
            .map_err(|_| LegError::InvalidThreshold(format!("{value} is not a finite number")));
        self
    }

    /// Set the threshold from user text
    pub fn threshold_input(mut self, raw: &str) -> Self {
        let trimmed = raw.trim();
        self.threshold = if trimmed.is_empty() {
            Err(LegError::InvalidThreshold("threshold is required".to_string()))
        } else {
            Decimal::from_str(trimmed)
                .map_err(|_| LegError::InvalidThreshold(format!("{trimmed:?} is not a number")))
        };
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Opponent team abbreviation; stored upper-cased
    pub fn opponent(mut self, code: &str) -> Self {
        self.opponent = code.trim().to_ascii_uppercase();
        self
    }

    /// Prediction lookup key for the current choices
    pub fn selection(&self) -> Selection {
        Selection {
            player_id: self.player.id,
            position: self.player.position,
            stat: self.stat,
            opponent: self.opponent.clone(),
        }
    }

    /// Check every input without building
    pub fn validate(&self) -> Result<Decimal, LegError> {
        if !is_offered(self.player.position, self.stat) {
            return Err(LegError::StatNotOffered {
                stat: self.stat,
                position: self.player.position,
            });
        }
        if self.opponent.is_empty() {
            return Err(LegError::InvalidOpponent);
        }
        self.threshold.clone()
    }

    /// Build the leg, interpolating its probability from `table` once.
    ///
    /// A missing table (prediction unavailable) yields a leg without a
    /// probability rather than a 0% leg.
    pub fn build(self, table: Option<&ProbabilityTable>) -> Result<Leg, LegError> {
        let threshold = self
            .validate()?
            .round_dp_with_strategy(THRESHOLD_DP, RoundingStrategy::MidpointAwayFromZero);

        let probability = table
            .and_then(|t| interpolate(t, threshold, self.direction))
            .map(|p| p.round_dp_with_strategy(PROBABILITY_DP, RoundingStrategy::MidpointAwayFromZero));
        if self.stat.route().proxy {
            tracing::debug!(
                stat = %self.stat,
                "Leg priced from a proxy table"
            );
        }
        if probability.is_none() {
            tracing::warn!(
                player_id = self.player.id,
                stat = %self.stat,
                "No prediction available; leg excluded from combined probability"
            );
        }

        Ok(Leg {
            id: Uuid::new_v4(),
            player_id: self.player.id,
            player_name: self.player.name,
            player_team: self.player.team,
            position: self.player.position,
            stat: self.stat,
            stat_label: self.stat.label().to_string(),
            threshold,
            over_under: self.direction,
            opponent: self.opponent,
            probability,
        })
    }
}
