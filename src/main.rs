use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use oxo_play::Session;

fn main() -> Result<()> {
    // stdout carries the game; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    info!("oxo starting");

    let tally = Session::new(io::stdin().lock(), io::stdout().lock()).run()?;
    info!(rounds = tally.rounds(), "oxo exiting");
    Ok(())
}
