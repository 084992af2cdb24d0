//! Parlay lifecycle
//!
//! Drafting, saving, cancelling and deleting parlays. [`ParlayBook`] holds
//! the state; [`ParlayManager`] serializes access to it and talks to the
//! persistence gateway.

mod book;
mod manager;
mod types;

pub use book::{LifecycleState, ParlayBook};
pub use manager::ParlayManager;
pub use types::{Parlay, ParlayError, ParlayId, ParlaySummary, SaveOutcome, MAX_LEGS};
