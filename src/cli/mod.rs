//! CLI interface for parlay-desk
//!
//! Provides subcommands for:
//! - `quote`: Price a parlay from raw leg probabilities
//! - `price`: Fetch a prediction and price one leg
//! - `build`: Build and save a parlay from a legs file
//! - `list`: Show saved parlays
//! - `delete`: Delete a saved parlay
//! - `config`: Show configuration

mod build;
mod list;
mod price;
mod quote;

pub use build::{BuildArgs, LegRequest, LegsFile};
pub use list::{DeleteArgs, ListArgs};
pub use price::PriceArgs;
pub use quote::QuoteArgs;

use clap::{Parser, Subcommand};

use crate::parlay::Parlay;
use crate::pricing::format_american_odds;

#[derive(Parser, Debug)]
#[command(name = "parlay-desk")]
#[command(about = "Build player-prop parlays and price them from prediction tables")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a parlay from leg probabilities
    Quote(QuoteArgs),
    /// Fetch a prediction and price a single leg
    Price(PriceArgs),
    /// Build and save a parlay from a legs file
    Build(BuildArgs),
    /// List saved parlays
    List(ListArgs),
    /// Delete a saved parlay
    Delete(DeleteArgs),
    /// Show configuration
    Config,
}

/// Multi-line report for a parlay, shared by `build` and `list`
pub(crate) fn render_parlay(parlay: &Parlay) -> String {
    let summary = parlay.summary();
    let mut out = format!(
        "Parlay {} ({}) - {} legs, stake ${}\n",
        parlay.id,
        parlay.created_at.format("%Y-%m-%d"),
        summary.legs,
        parlay.bet_amount.normalize()
    );
    for leg in &parlay.legs {
        let proxy = if leg.is_proxy() { " [proxy]" } else { "" };
        out.push_str(&format!(
            "  - {}: {}{}\n",
            leg.describe(),
            leg.probability_label(),
            proxy
        ));
    }
    out.push_str(&format!(
        "  Combined: {:.2}% ({} of {} legs priced)  Odds: {}  Payout: ${:.2}  Return: ${:.2}\n",
        summary.combined_probability.round_dp(2),
        summary.priced_legs,
        summary.legs,
        format_american_odds(summary.odds),
        summary.profit.round_dp(2),
        summary.total_return.round_dp(2)
    ));
    out
}
