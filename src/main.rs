mod cli;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, trace};

use cli::Cli;
use dataviva_challenges::{load_transactions_csv, run_selected, Challenge, RunConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // Logs go to stderr; stdout carries only challenge output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(cli.verbose >= 2)
        .with_writer(io::stderr)
        .init();

    debug!("Started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let mut config = RunConfig {
        fizzbuzz_limit: cli.fizzbuzz_limit,
        ..RunConfig::default()
    };

    if let Some(path) = &cli.transactions {
        config.transactions = load_transactions_csv(path)?;
    }

    let challenges: Vec<Challenge> = match cli.only {
        Some(only) => vec![only.into()],
        None => Challenge::ALL.to_vec(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_selected(&challenges, &config, &mut out)?;
    out.flush()?;

    Ok(())
}
