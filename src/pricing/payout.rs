//! Profit on a winning ticket

use rust_decimal::Decimal;

use super::AmericanOdds;
use crate::probability::HUNDRED;

/// Profit (excluding the returned stake) for `stake` at `odds`.
///
/// Zero when odds are undefined or zero, or the stake is not positive. The
/// caller adds the stake back for total return.
pub fn payout(odds: Option<AmericanOdds>, stake: Decimal) -> Decimal {
    let odds = match odds {
        Some(o) if o != 0 => o,
        _ => return Decimal::ZERO,
    };
    if stake <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let odds = Decimal::from(odds);
    let profit = if odds > Decimal::ZERO {
        stake.checked_mul(odds).and_then(|v| v.checked_div(HUNDRED))
    } else {
        stake.checked_mul(HUNDRED).and_then(|v| v.checked_div(odds.abs()))
    };

    // only reachable with absurd stakes; saturate instead of panicking
    profit.unwrap_or(Decimal::MAX)
}
