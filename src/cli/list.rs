//! List and delete command implementations

use clap::Args;

use super::render_parlay;
use crate::config::Config;
use crate::parlay::{ParlayId, ParlayManager};
use crate::store::JsonFileStore;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show the most recent N parlays
    #[arg(long)]
    pub last: Option<usize>,
}

impl ListArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let store = JsonFileStore::new(&config.storage.path);
        let manager = ParlayManager::open(store, &config.parlay).await?;
        let saved = manager.saved().await;

        if saved.is_empty() {
            println!("No saved parlays in {}", config.storage.path.display());
            return Ok(());
        }

        let skip = self
            .last
            .map_or(0, |n| saved.len().saturating_sub(n));
        for parlay in saved.iter().skip(skip) {
            print!("{}", render_parlay(parlay));
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the parlay to delete
    pub id: ParlayId,
}

impl DeleteArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let store = JsonFileStore::new(&config.storage.path);
        let manager = ParlayManager::open(store, &config.parlay).await?;

        if manager.delete(self.id).await? {
            println!("Deleted parlay {}", self.id);
        } else {
            println!("No parlay with id {}", self.id);
        }
        Ok(())
    }
}
