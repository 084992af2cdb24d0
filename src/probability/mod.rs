//! Probability tables and threshold interpolation
//!
//! Turns the sparse benchmark tables supplied by the prediction service into
//! a probability for any threshold a leg asks about.

mod interpolate;
mod table;

pub use interpolate::interpolate;
pub use table::ProbabilityTable;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 100%, the upper bound of every probability in this crate
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Decimal places kept when a probability is frozen into a leg.
///
/// Stored records carry numbers as `f64`; values at this precision survive
/// the round trip unchanged.
pub const PROBABILITY_DP: u32 = 8;

/// Which side of the threshold a leg is betting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Stat finishes above the threshold
    Over,
    /// Stat finishes below the threshold
    Under,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Over => write!(f, "over"),
            Direction::Under => write!(f, "under"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "over" | "o" => Ok(Direction::Over),
            "under" | "u" => Ok(Direction::Under),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Clamp a percentage into `[0, 100]`
pub fn clamp_percent(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, HUNDRED)
}
