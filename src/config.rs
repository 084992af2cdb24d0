//! Configuration types for parlay-desk

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub prediction: PredictionConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub parlay: ParlayConfig,
    pub telemetry: TelemetryConfig,
}

/// Prediction service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl PredictionConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Saved-parlay storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
}

/// Parlay defaults
#[derive(Debug, Clone, Deserialize)]
pub struct ParlayConfig {
    /// Stake assigned to a freshly started draft
    #[serde(default = "default_stake")]
    pub default_stake: Decimal,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormatConfig,
}

/// Log output format as written in the config file
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatConfig {
    #[default]
    Pretty,
    Json,
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_stake() -> Decimal {
    Decimal::TEN
}

impl Default for ParlayConfig {
    fn default() -> Self {
        Self {
            default_stake: Decimal::TEN,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values serde accepts but the engine cannot use
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.parlay.default_stake <= Decimal::ZERO {
            anyhow::bail!(
                "parlay.default_stake must be positive, got {}",
                self.parlay.default_stake
            );
        }
        if self.prediction.timeout_secs == 0 {
            anyhow::bail!("prediction.timeout_secs must be at least 1");
        }
        Ok(())
    }
}
