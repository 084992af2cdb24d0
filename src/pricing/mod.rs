//! Parlay pricing
//!
//! Pure functions that turn leg probabilities into a combined probability,
//! fair American odds and a payout. None of them allocate shared state, so
//! they are safe to call from any thread.

mod aggregate;
mod american;
mod payout;

pub use aggregate::{combine, combine_probabilities};
pub use american::{format_american_odds, to_american_odds, AmericanOdds};
pub use payout::payout;
