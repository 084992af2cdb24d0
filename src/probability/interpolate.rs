//! Linear interpolation between benchmarks
//!
//! Thresholds outside the benchmark range take the nearest end value; there
//! is no extrapolation in either direction.

use rust_decimal::Decimal;

use super::{clamp_percent, Direction, ProbabilityTable, HUNDRED};

/// Probability (percent) that a stat finishes on `direction`'s side of
/// `threshold`.
///
/// Returns `None` for an empty table. The OVER value is read from the table
/// (interpolated between the surrounding benchmarks when needed) and UNDER is
/// its complement, so `over + under == 100` for every threshold.
pub fn interpolate(
    table: &ProbabilityTable,
    threshold: Decimal,
    direction: Direction,
) -> Option<Decimal> {
    let over = clamp_percent(over_probability(table, threshold)?);

    let probability = match direction {
        Direction::Over => over,
        Direction::Under => HUNDRED - over,
    };

    Some(clamp_percent(probability))
}

fn over_probability(table: &ProbabilityTable, threshold: Decimal) -> Option<Decimal> {
    let (min_t, min_p) = table.first()?;
    let (max_t, max_p) = table.last()?;

    if threshold <= min_t {
        return Some(min_p);
    }
    if threshold >= max_t {
        return Some(max_p);
    }

    let (lo_t, lo_p) = table.floor(threshold)?;
    let (hi_t, hi_p) = table.ceil(threshold)?;
    if hi_t == lo_t {
        return Some(lo_p);
    }

    let fraction = (threshold - lo_t) / (hi_t - lo_t);
    Some(lo_p + (hi_p - lo_p) * fraction)
}
