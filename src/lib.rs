//! parlay-desk: Player-prop parlay builder and pricer
//!
//! This library provides the core components for:
//! - Benchmark probability tables and threshold interpolation
//! - The position/stat catalog and prediction routing
//! - Leg construction with frozen probabilities
//! - Combined probability, American odds and payout
//! - The parlay draft/save lifecycle
//! - Saved-parlay persistence
//! - Prediction fetching with stale-response suppression

pub mod catalog;
pub mod cli;
pub mod config;
pub mod leg;
pub mod parlay;
pub mod prediction;
pub mod pricing;
pub mod probability;
pub mod store;
pub mod telemetry;
