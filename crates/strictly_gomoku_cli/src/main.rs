//! Strictly Gomoku - command-line front end.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use strictly_gomoku::StrategyRegistry;
use strictly_gomoku_cli::cli::{Cli, Command};
use strictly_gomoku_cli::{MatchConfig, WatchOutput};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_gomoku=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let registry = StrategyRegistry::with_defaults();

    match cli.command {
        Command::Strategies => {
            let mut out = io::stdout().lock();
            strictly_gomoku_cli::list_strategies(&registry, &mut out)?;
        }
        Command::Watch {
            config,
            overrides,
            quiet,
            json,
        } => {
            let config = MatchConfig::load(config.as_deref())?.merge(overrides.into())?;
            info!(rows = config.rows(), cols = config.cols(), "Starting match");
            let mut out = BufWriter::new(io::stdout().lock());
            strictly_gomoku_cli::watch(config, &registry, WatchOutput { quiet, json }, &mut out)?;
            out.flush()?;
        }
        Command::Play { config, overrides } => {
            let config = MatchConfig::load(config.as_deref())?.merge(overrides.into())?;
            let stdin = io::stdin().lock();
            let mut out = io::stdout().lock();
            strictly_gomoku_cli::play(config, &registry, stdin, &mut out)?;
        }
    }

    Ok(())
}
