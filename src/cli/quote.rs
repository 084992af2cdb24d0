//! Quote command implementation

use clap::Args;
use rust_decimal::Decimal;

use crate::config::Config;
use crate::pricing::{combine_probabilities, format_american_odds, payout, to_american_odds};

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Leg win probability in percent (repeat per leg)
    #[arg(long = "prob", required = true)]
    pub probabilities: Vec<Decimal>,

    /// Stake; defaults to the configured default stake
    #[arg(long)]
    pub stake: Option<Decimal>,
}

impl QuoteArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let stake = self.stake.unwrap_or(config.parlay.default_stake);
        if stake <= Decimal::ZERO {
            anyhow::bail!("Stake must be positive, got {stake}");
        }
        for p in &self.probabilities {
            if *p < Decimal::ZERO || *p > Decimal::ONE_HUNDRED {
                anyhow::bail!("Probability {p} is outside 0-100");
            }
        }

        let combined = combine_probabilities(self.probabilities.iter().copied().map(Some));
        let odds = to_american_odds(combined);
        let profit = payout(odds, stake);

        tracing::debug!(legs = self.probabilities.len(), %combined, ?odds, "Quoted parlay");

        println!("Legs:     {}", self.probabilities.len());
        println!("Combined: {:.2}%", combined.round_dp(2));
        println!("Odds:     {}", format_american_odds(odds));
        println!("Payout:   ${:.2}", profit.round_dp(2));
        println!("Return:   ${:.2}", (stake + profit).round_dp(2));
        Ok(())
    }
}
