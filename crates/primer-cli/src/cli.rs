//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{
    BondArgs, CamelsArgs, ConfigArgs, EquityArgs, FrontierArgs, GapArgs, PdArgs, ScenarioArgs,
    VarArgs,
};

/// Primer - Banking and finance concepts, worked through from the terminal
#[derive(Parser)]
#[command(name = "primer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./primer.toml when present)
    #[arg(long, env = "PRIMER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log detail on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print results and errors (no status lines, error-level logs)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Probability of default for a credit score
    Pd(PdArgs),

    /// Estimate a bond's price change for a rate move (duration + convexity)
    Bond(BondArgs),

    /// Reprice a bank's balance sheet under a parallel rate shock
    Equity(EquityArgs),

    /// Expected return on the risk/return frontier
    Frontier(FrontierArgs),

    /// Value at Risk threshold, tail curve and parametric VaR
    Var(VarArgs),

    /// Weighted durations and duration gap of a bank profile
    Gap(GapArgs),

    /// Walk through a step-by-step scenario
    Scenario(ScenarioArgs),

    /// List bank profiles
    Profiles,

    /// CAMELS ratings of a bank profile
    Camels(CamelsArgs),

    /// Inspect or check configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
