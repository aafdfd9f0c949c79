//! Scenario command implementation.
//!
//! Walks the liquidity-crisis and supervisory-process narratives one step at
//! a time. Step numbers are 1-based; out-of-range steps land on the nearest
//! end.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use primer_scenarios::liquidity::{liquidity_crisis, LiquiditySnapshot};
use primer_scenarios::sequence::Stepper;
use primer_scenarios::supervision::{supervisory_process, SupervisoryStep};

use crate::cli::OutputFormat;
use crate::output::{format_percent, print_report, print_rows, KeyValue};

/// Arguments for the scenario command.
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Which narrative to walk
    #[arg(value_enum)]
    pub kind: ScenarioKind,

    /// Step to show (1-based); clamped to the available steps
    #[arg(short, long, default_value = "1")]
    pub step: usize,

    /// Show every step
    #[arg(short, long, conflicts_with = "step")]
    pub all: bool,
}

/// Available narratives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioKind {
    /// Six-step liquidity crisis
    Liquidity,
    /// Four-step supervisory process
    Supervision,
}

/// A liquidity step for display.
#[derive(Debug, Serialize, Tabled)]
pub struct LiquidityRow {
    #[tabled(rename = "Step")]
    pub step: usize,
    #[tabled(rename = "Title")]
    pub title: &'static str,
    #[tabled(rename = "Deposits ($bn)")]
    pub deposits: f64,
    #[tabled(rename = "Liquid Assets ($bn)")]
    pub liquid_assets: f64,
    #[tabled(rename = "CB Borrowing ($bn)")]
    pub central_bank_borrowing: f64,
    #[tabled(rename = "Liquidity Ratio", display_with = "ratio")]
    pub liquidity_ratio: f64,
    #[tabled(rename = "Stress")]
    pub stress: String,
}

impl LiquidityRow {
    fn new(step: usize, snapshot: &LiquiditySnapshot) -> Self {
        Self {
            step,
            title: snapshot.title,
            deposits: snapshot.deposits,
            liquid_assets: snapshot.liquid_assets,
            central_bank_borrowing: snapshot.central_bank_borrowing,
            liquidity_ratio: snapshot.liquidity_ratio(),
            stress: snapshot.stress.to_string(),
        }
    }
}

fn ratio(value: &f64) -> String {
    format_percent(*value, 1)
}

/// A supervisory step for display.
#[derive(Debug, Serialize, Tabled)]
pub struct SupervisionRow {
    #[tabled(rename = "Step")]
    pub step: usize,
    #[tabled(rename = "Title")]
    pub title: &'static str,
    #[tabled(rename = "Actor")]
    pub actor: &'static str,
    #[tabled(rename = "Outputs")]
    pub outputs: String,
}

impl SupervisionRow {
    fn new(step: usize, s: &SupervisoryStep) -> Self {
        Self {
            step,
            title: s.title,
            actor: s.actor,
            outputs: s.outputs.join(", "),
        }
    }
}

/// Execute the scenario command.
pub fn execute(args: ScenarioArgs, format: OutputFormat) -> Result<()> {
    match args.kind {
        ScenarioKind::Liquidity => liquidity(&args, format),
        ScenarioKind::Supervision => supervision(&args, format),
    }
}

fn liquidity(args: &ScenarioArgs, format: OutputFormat) -> Result<()> {
    let mut stepper = Stepper::from_sequence(liquidity_crisis());

    if args.all {
        let rows: Vec<LiquidityRow> = stepper
            .sequence()
            .steps()
            .iter()
            .enumerate()
            .map(|(i, s)| LiquidityRow::new(i + 1, s))
            .collect();
        let minimal = rows.iter().map(|r| r.title).collect::<Vec<_>>().join("\n");
        return print_rows("Liquidity Crisis", &rows, &minimal, format);
    }

    let snapshot = stepper.go_to(args.step.saturating_sub(1));
    let row = LiquidityRow::new(stepper.position(), snapshot);
    let metrics = vec![
        KeyValue::new(
            "Step",
            format!("{} of {}", stepper.position(), stepper.sequence().len()),
        ),
        KeyValue::new("Title", snapshot.title),
        KeyValue::new("What Happens", snapshot.narrative),
        KeyValue::separator(),
        KeyValue::from_f64("Deposits ($bn)", snapshot.deposits, 1),
        KeyValue::from_f64("Liquid Assets ($bn)", snapshot.liquid_assets, 1),
        KeyValue::from_f64("Central Bank Borrowing ($bn)", snapshot.central_bank_borrowing, 1),
        KeyValue::new("Liquidity Ratio", ratio(&row.liquidity_ratio)),
        KeyValue::new("Stress", snapshot.stress.to_string()),
    ];

    print_report("Liquidity Crisis", &metrics, &row, snapshot.title, format)
}

fn supervision(args: &ScenarioArgs, format: OutputFormat) -> Result<()> {
    let mut stepper = Stepper::from_sequence(supervisory_process());

    if args.all {
        let rows: Vec<SupervisionRow> = stepper
            .sequence()
            .steps()
            .iter()
            .enumerate()
            .map(|(i, s)| SupervisionRow::new(i + 1, s))
            .collect();
        let minimal = rows.iter().map(|r| r.title).collect::<Vec<_>>().join("\n");
        return print_rows("Supervisory Process", &rows, &minimal, format);
    }

    let step = stepper.go_to(args.step.saturating_sub(1));
    let row = SupervisionRow::new(stepper.position(), step);
    let metrics = vec![
        KeyValue::new(
            "Step",
            format!("{} of {}", stepper.position(), stepper.sequence().len()),
        ),
        KeyValue::new("Title", step.title),
        KeyValue::new("Actor", step.actor),
        KeyValue::new("What Happens", step.description),
        KeyValue::new("Outputs", row.outputs.clone()),
    ];

    print_report("Supervisory Process", &metrics, &row, step.title, format)
}
