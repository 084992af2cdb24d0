//! Probability → fair American (moneyline) odds

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::probability::HUNDRED;

/// Signed moneyline: negative for favorites, positive for underdogs
pub type AmericanOdds = i64;

/// Fair odds for a probability given in percent.
///
/// `None` for a certain or impossible outcome (`<= 0` or `>= 100`) and for
/// probabilities so close to either end that the moneyline does not fit an
/// `i64`. Exactly 50% is treated as a favorite and yields `-100`. Results are
/// rounded to the nearest integer, ties away from zero.
pub fn to_american_odds(probability: Decimal) -> Option<AmericanOdds> {
    if probability <= Decimal::ZERO || probability >= HUNDRED {
        return None;
    }

    let p = probability / HUNDRED;
    let q = Decimal::ONE - p;

    let raw = if p >= dec!(0.5) {
        -HUNDRED.checked_mul(p)?.checked_div(q)?
    } else {
        HUNDRED.checked_mul(q)?.checked_div(p)?
    };

    raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Display form: `+186`, `-150`, or `N/A` when odds are undefined
pub fn format_american_odds(odds: Option<AmericanOdds>) -> String {
    match odds {
        Some(o) if o > 0 => format!("+{o}"),
        Some(o) => o.to_string(),
        None => "N/A".to_string(),
    }
}
