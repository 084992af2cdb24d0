//! Leg and player types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{Position, StatKey};
use crate::probability::Direction;

/// Leg identifier
pub type LegId = Uuid;

/// Decimal places kept for a leg threshold
pub const THRESHOLD_DP: u32 = 4;

/// A player as needed to label a leg
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub position: Position,
}

/// One single-outcome wager inside a parlay.
///
/// The probability is frozen when the leg is built and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub id: LegId,
    pub player_id: u32,
    pub player_name: String,
    pub player_team: String,
    pub position: Position,
    pub stat: StatKey,
    pub stat_label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub threshold: Decimal,
    pub over_under: Direction,
    pub opponent: String,
    /// Percent; `None` when no prediction was available
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub probability: Option<Decimal>,
}

impl Leg {
    /// The probability came from another stat's table
    pub fn is_proxy(&self) -> bool {
        self.stat.route().proxy
    }

    /// Display form of the frozen probability
    pub fn probability_label(&self) -> String {
        match self.probability {
            Some(p) => format!("{:.1}%", p.round_dp(1)),
            None => "no prediction".to_string(),
        }
    }

    /// Short description, e.g. `J. Doe over 62.5 Receiving Yards vs KC`
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} {} vs {}",
            self.player_name,
            self.over_under,
            self.threshold.normalize(),
            self.stat_label,
            self.opponent
        )
    }
}

/// Reasons a leg cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LegError {
    /// Threshold missing, non-numeric or non-finite
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
    /// Stat is not in the catalog for the player's position
    #[error("{stat} is not offered for {position}")]
    StatNotOffered { stat: StatKey, position: Position },
    /// Opponent team code missing
    #[error("Opponent team code is required")]
    InvalidOpponent,
}
