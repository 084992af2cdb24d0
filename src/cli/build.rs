//! Build command implementation

use anyhow::Context;
use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;

use super::render_parlay;
use crate::catalog::{Position, StatKey};
use crate::config::Config;
use crate::leg::{LegBuilder, Player};
use crate::parlay::{ParlayManager, SaveOutcome};
use crate::prediction::{
    HttpPredictionClient, PredictionClientConfig, PredictionError, PredictionSource,
};
use crate::probability::{Direction, ProbabilityTable};
use crate::store::{JsonFileStore, ParlayStore};

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// TOML file with one `[[leg]]` table per leg
    #[arg(long)]
    pub legs: PathBuf,

    /// Stake; defaults to the configured default stake
    #[arg(long)]
    pub stake: Option<String>,

    /// Price the parlay without saving it
    #[arg(long)]
    pub dry_run: bool,
}

/// Legs file contents
#[derive(Debug, Clone, Deserialize)]
pub struct LegsFile {
    #[serde(rename = "leg", default)]
    pub legs: Vec<LegRequest>,
}

/// One requested leg
#[derive(Debug, Clone, Deserialize)]
pub struct LegRequest {
    pub player_id: u32,
    pub player_name: String,
    #[serde(default)]
    pub team: String,
    pub position: Position,
    pub stat: StatKey,
    pub threshold: f64,
    #[serde(default = "default_direction")]
    pub direction: Direction,
    pub opponent: String,
}

fn default_direction() -> Direction {
    Direction::Over
}

impl LegsFile {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

impl LegRequest {
    pub fn builder(&self) -> LegBuilder {
        let player = Player {
            id: self.player_id,
            name: self.player_name.clone(),
            team: self.team.to_ascii_uppercase(),
            position: self.position,
        };
        LegBuilder::new(player, self.stat)
            .threshold(self.threshold)
            .direction(self.direction)
            .opponent(&self.opponent)
    }
}

impl BuildArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let raw = tokio::fs::read_to_string(&self.legs)
            .await
            .with_context(|| format!("reading legs file {}", self.legs.display()))?;
        let file = LegsFile::parse(&raw)?;
        if file.legs.is_empty() {
            anyhow::bail!("{} contains no [[leg]] entries", self.legs.display());
        }

        let client = HttpPredictionClient::with_config(PredictionClientConfig::from(
            &config.prediction,
        ))?;
        let store = JsonFileStore::new(&config.storage.path);
        let manager = ParlayManager::open(store, &config.parlay).await?;

        manager.start().await?;
        if let Some(stake) = &self.stake {
            apply_stake(&manager, stake).await;
        }

        for request in &file.legs {
            let builder = request.builder();
            builder.validate()?;

            let table = match fetch_with_timeout(&client, &builder, config).await {
                Ok(table) => Some(table),
                Err(e) => {
                    tracing::warn!(player_id = request.player_id, error = %e, "Prediction unavailable");
                    None
                }
            };

            let leg = builder.build(table.as_ref())?;
            let count = manager.add_leg(leg).await?;
            tracing::debug!(legs = count, "Leg added");
        }

        let Some(draft) = manager.draft().await else {
            anyhow::bail!("Draft disappeared while building");
        };
        print!("{}", render_parlay(&draft));

        if self.dry_run {
            manager.cancel().await?;
            println!("Dry run: not saved");
            return Ok(());
        }

        match manager.save().await? {
            SaveOutcome::Saved(id) => println!("Saved parlay {id}"),
            SaveOutcome::Empty => println!("Nothing to save"),
        }
        Ok(())
    }
}

/// Set the draft stake from user text. Bad input keeps the current stake.
async fn apply_stake<S: ParlayStore>(manager: &ParlayManager<S>, raw: &str) {
    if let Err(e) = manager.set_stake_input(raw).await {
        tracing::warn!(error = %e, "Ignoring --stake");
        eprintln!("Warning: {e}");
    }
}

async fn fetch_with_timeout(
    client: &HttpPredictionClient,
    builder: &LegBuilder,
    config: &Config,
) -> Result<ProbabilityTable, PredictionError> {
    let timeout = config.prediction.timeout();
    match tokio::time::timeout(timeout, client.fetch_table(&builder.selection())).await {
        Ok(outcome) => outcome,
        Err(_) => Err(PredictionError::Timeout(timeout)),
    }
}
