//! Combined parlay probability under leg independence

use rust_decimal::Decimal;

use crate::leg::Leg;
use crate::probability::{clamp_percent, HUNDRED};

/// Combined probability (percent) of every leg hitting.
///
/// Legs whose prediction was unavailable are skipped. With no usable leg the
/// result is 0.
pub fn combine<'a>(legs: impl IntoIterator<Item = &'a Leg>) -> Decimal {
    combine_probabilities(legs.into_iter().map(|leg| leg.probability))
}

/// Same as [`combine`] over raw probabilities.
pub fn combine_probabilities(probabilities: impl IntoIterator<Item = Option<Decimal>>) -> Decimal {
    let mut factors: Vec<Decimal> = probabilities
        .into_iter()
        .flatten()
        .map(|p| clamp_percent(p) / HUNDRED)
        .collect();

    if factors.is_empty() {
        return Decimal::ZERO;
    }

    // Decimal multiplication rounds past 28 digits; a fixed order keeps the
    // product identical for any leg ordering.
    factors.sort_unstable();

    let product = factors
        .into_iter()
        .fold(Decimal::ONE, |acc, factor| acc * factor);

    clamp_percent(product * HUNDRED)
}
