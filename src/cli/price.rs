//! Price command implementation

use clap::Args;
use std::sync::Arc;

use crate::catalog::{Endpoint, Position, StatKey};
use crate::config::Config;
use crate::leg::{LegBuilder, Player};
use crate::prediction::{HttpPredictionClient, PredictionClientConfig, PredictionFeed};
use crate::probability::Direction;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Player id in the prediction service
    #[arg(long)]
    pub player: u32,

    /// Player position: QB, RB, WR or TE
    #[arg(long)]
    pub position: Position,

    /// Stat key, e.g. receiving_yards
    #[arg(long)]
    pub stat: StatKey,

    /// Line to beat
    #[arg(long)]
    pub threshold: String,

    /// over or under
    #[arg(long, default_value = "over")]
    pub direction: Direction,

    /// Opponent team abbreviation
    #[arg(long)]
    pub opponent: String,

    /// Player display name
    #[arg(long, default_value = "Player")]
    pub name: String,

    /// Player team abbreviation
    #[arg(long, default_value = "")]
    pub team: String,
}

impl PriceArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let player = Player {
            id: self.player,
            name: self.name.clone(),
            team: self.team.to_ascii_uppercase(),
            position: self.position,
        };
        let builder = LegBuilder::new(player, self.stat)
            .threshold_input(&self.threshold)
            .direction(self.direction)
            .opponent(&self.opponent);
        builder.validate()?;

        let client = HttpPredictionClient::with_config(PredictionClientConfig::from(
            &config.prediction,
        ))?;
        let (mut feed, mut rx) = PredictionFeed::new(Arc::new(client), config.prediction.timeout());

        let generation = feed.select(builder.selection());
        tracing::info!(generation, player_id = self.player, stat = %self.stat, "Fetching prediction");

        let table = loop {
            let Some(resolved) = rx.recv().await else {
                anyhow::bail!("Prediction feed closed");
            };
            if let Some(resolved) = feed.accept(resolved) {
                break match resolved.outcome {
                    Ok(table) => Some(table),
                    Err(e) => {
                        println!("Prediction unavailable: {e}");
                        None
                    }
                };
            }
        };

        if let Some(table) = &table {
            println!("Benchmarks ({}):", table.len());
            for (threshold, probability) in table.iter() {
                println!("  {:>8}  {:.1}%", threshold.normalize().to_string(), probability.round_dp(1));
            }
        }

        let leg = builder.build(table.as_ref())?;
        if leg.is_proxy() {
            let source = match leg.stat.route().endpoint {
                Endpoint::Yardage(stat) => stat.label(),
                Endpoint::Touchdown => "touchdown",
            };
            println!("Note: priced from the {source} table as a proxy");
        }
        println!("{}: {}", leg.describe(), leg.probability_label());
        Ok(())
    }
}
