//! Parlay legs
//!
//! Leg data and the builder that prices a leg at creation time

mod builder;
mod types;

pub use builder::LegBuilder;
pub use types::{Leg, LegError, LegId, Player, THRESHOLD_DP};
