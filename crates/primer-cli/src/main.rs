//! Primer CLI - Banking and finance concepts from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Probability of default for a credit score
//! primer pd --score 700
//!
//! # Price change of a 7-year duration bond when yields go from 4% to 6%
//! primer bond --duration 7 --current 4 --new 6
//!
//! # Money-center bank under a +200bp shock
//! primer equity --profile money-center --shock 200
//!
//! # 99% VaR on a fat-tailed distribution
//! primer var --confidence 99 --mode fat-tailed --value 1000000 --volatility 2
//!
//! # Walk the liquidity crisis
//! primer scenario liquidity --step 3
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);
    output::set_quiet(cli.quiet);

    let format = cli.format;
    let explicit = cli.config.as_deref();
    let config = || commands::config::load(explicit).map(|(config, _)| config);

    match cli.command {
        Commands::Pd(args) => commands::pd::execute(args, &config()?, format)?,
        Commands::Bond(args) => commands::bond::execute(args, format)?,
        Commands::Equity(args) => commands::equity::execute(args, &config()?, format)?,
        Commands::Frontier(args) => commands::frontier::execute(args, &config()?, format)?,
        Commands::Var(args) => commands::var::execute(args, &config()?, format)?,
        Commands::Gap(args) => commands::gap::execute(args, format)?,
        Commands::Scenario(args) => commands::scenario::execute(args, format)?,
        Commands::Profiles => commands::profiles::execute(format)?,
        Commands::Camels(args) => commands::camels::execute(args, format)?,
        Commands::Config(args) => commands::config::execute(args, explicit, format)?,
    }

    Ok(())
}

/// Logs go to stderr so table, JSON and CSV output on stdout stays clean.
/// `RUST_LOG` overrides the level chosen by `--verbose` / `--quiet`.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
