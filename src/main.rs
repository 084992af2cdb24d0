use anyhow::Context;
use clap::Parser;
use parlay_desk::cli::{Cli, Commands};
use parlay_desk::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))
                .context("built-in default config is invalid")?
        }
    };

    // Initialize telemetry
    parlay_desk::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Quote(args) => args.execute(&config).await?,
        Commands::Price(args) => {
            tracing::info!("Pricing leg from prediction service");
            args.execute(&config).await?;
        }
        Commands::Build(args) => {
            tracing::info!("Building parlay from {:?}", args.legs);
            args.execute(&config).await?;
        }
        Commands::List(args) => args.execute(&config).await?,
        Commands::Delete(args) => args.execute(&config).await?,
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Prediction: {} (timeout {}s)",
                config.prediction.base_url, config.prediction.timeout_secs
            );
            println!("  Storage: {}", config.storage.path.display());
            println!("  Default stake: ${}", config.parlay.default_stake);
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
