//! Sparse benchmark → probability table

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::{clamp_percent, Direction};

/// Benchmark thresholds mapped to OVER probabilities in percent.
///
/// Keys are kept sorted so range lookups are `O(log n)`. Values are clamped
/// to `[0, 100]` on insert; the table does not require them to be
/// non-increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbabilityTable {
    benchmarks: BTreeMap<Decimal, Decimal>,
}

impl ProbabilityTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from exact decimal pairs. A repeated benchmark keeps the
    /// last probability seen.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Decimal, Decimal)>) -> Self {
        let mut table = Self::new();
        for (threshold, probability) in pairs {
            table.insert(threshold, probability);
        }
        table
    }

    /// Build a table from floating point pairs as they come off the wire.
    ///
    /// Entries with a NaN or infinite component are dropped.
    pub fn from_f64_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut table = Self::new();
        for (threshold, probability) in pairs {
            match (Decimal::try_from(threshold), Decimal::try_from(probability)) {
                (Ok(t), Ok(p)) => table.insert(t, p),
                _ => {
                    tracing::warn!(threshold, probability, "Dropping non-finite benchmark");
                }
            }
        }
        table
    }

    /// Insert or replace one benchmark
    pub fn insert(&mut self, threshold: Decimal, probability: Decimal) {
        self.benchmarks
            .insert(threshold.normalize(), clamp_percent(probability));
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Lowest benchmark and its probability
    pub fn first(&self) -> Option<(Decimal, Decimal)> {
        self.benchmarks.first_key_value().map(|(t, p)| (*t, *p))
    }

    /// Highest benchmark and its probability
    pub fn last(&self) -> Option<(Decimal, Decimal)> {
        self.benchmarks.last_key_value().map(|(t, p)| (*t, *p))
    }

    /// Greatest benchmark `<= threshold`
    pub fn floor(&self, threshold: Decimal) -> Option<(Decimal, Decimal)> {
        self.benchmarks
            .range(..=threshold)
            .next_back()
            .map(|(t, p)| (*t, *p))
    }

    /// Least benchmark `>= threshold`
    pub fn ceil(&self, threshold: Decimal) -> Option<(Decimal, Decimal)> {
        self.benchmarks
            .range(threshold..)
            .next()
            .map(|(t, p)| (*t, *p))
    }

    /// Benchmarks in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (Decimal, Decimal)> + '_ {
        self.benchmarks.iter().map(|(t, p)| (*t, *p))
    }

    /// Probability for an arbitrary threshold, see [`super::interpolate`]
    pub fn probability_at(&self, threshold: Decimal, direction: Direction) -> Option<Decimal> {
        super::interpolate(self, threshold, direction)
    }
}
