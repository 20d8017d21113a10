use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use valentine_core::{CardConfig, SceneController};
use valentine_platform::{EntropySource, FixedSeed, Result};
use valentine_ui::{card_channel, run_card, CardEvent, CardHandles};

mod cli;
mod entropy;

use cli::Cli;
use entropy::OsEntropy;

fn main() -> ExitCode {
    // Init logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let cli = Cli::parse();
    info!("Valentine starting");
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Valentine error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            CardConfig::load(path)?
        }
        None => CardConfig::default(),
    };
    let (config, seed) = resolve(&cli, config, &mut OsEntropy)?;
    info!(seed, "decoration seed chosen");

    if cli.dump_decorations {
        let card = SceneController::new(&config.decorations, seed);
        println!("{}", card.decorations().to_json_pretty()?);
        return Ok(());
    }

    let CardHandles {
        event_sender,
        event_receiver,
    } = card_channel();
    let observer = std::thread::spawn(move || {
        while let Ok(event) = event_receiver.recv() {
            match event {
                CardEvent::Mounted { seed } => info!(seed, "card mounted"),
                CardEvent::DeclineDodged { input, position } => {
                    info!(?input, top = position.top, left = position.left, "the No button ran away")
                }
                CardEvent::Accepted => info!("proposal accepted"),
                CardEvent::Unmounted => break,
            }
        }
    });

    let outcome = run_card(&config, seed, event_sender);
    // The window owned the only sender, so the observer drains what is left and stops.
    if observer.join().is_err() {
        error!("card event observer panicked");
    }
    outcome
}

/// Applies command-line overrides to `config` and settles the decoration seed:
/// `--seed` first, then the config file, then `entropy`.
fn resolve(cli: &Cli, mut config: CardConfig, entropy: &mut impl EntropySource) -> Result<(CardConfig, u64)> {
    if let Some(dir) = &cli.assets {
        config.assets.dir = dir.clone();
    }
    let seed = match cli.seed.or(config.seed) {
        Some(fixed) => FixedSeed(fixed).seed()?,
        None => entropy.seed()?,
    };
    Ok((config, seed))
}
