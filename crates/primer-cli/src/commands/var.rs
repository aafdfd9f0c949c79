//! VaR command implementation.
//!
//! Looks up the tail threshold for a distribution and confidence level,
//! computes parametric VaR, and optionally prints the sampled density curve.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use primer_analytics::var::{parametric_var, ConfidenceLevel, DistributionMode};
use primer_config::PrimerConfig;

use crate::cli::OutputFormat;
use crate::commands::validate_non_negative;
use crate::output::{format_percent, print_report, print_rows, KeyValue};

/// Arguments for the var command.
#[derive(Args, Debug)]
pub struct VarArgs {
    /// Confidence level: 95, 99 or 99.9
    #[arg(short, long)]
    pub confidence: Option<ConfidenceLevel>,

    /// Distribution: normal or fat-tailed
    #[arg(short, long)]
    pub mode: Option<DistributionMode>,

    /// Portfolio value
    #[arg(long)]
    pub value: Option<f64>,

    /// Return volatility over the horizon (percent)
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Print the sampled density curve instead of the VaR figure
    #[arg(long)]
    pub curve: bool,
}

/// VaR result.
#[derive(Debug, Serialize)]
pub struct VarResult {
    pub mode: DistributionMode,
    pub confidence: ConfidenceLevel,
    pub threshold: f64,
    pub portfolio_value: f64,
    pub volatility: f64,
    pub var: f64,
    pub shaded_mass: f64,
}

/// A density sample.
#[derive(Debug, Serialize, Tabled)]
pub struct CurveRow {
    #[tabled(rename = "x", display_with = "fixed4")]
    pub x: f64,
    #[tabled(rename = "Density", display_with = "fixed6")]
    pub density: f64,
    #[tabled(rename = "In Tail")]
    pub in_tail: bool,
}

fn fixed4(value: &f64) -> String {
    format!("{value:.4}")
}

fn fixed6(value: &f64) -> String {
    format!("{value:.6}")
}

/// Execute the var command.
pub fn execute(args: VarArgs, config: &PrimerConfig, format: OutputFormat) -> Result<()> {
    let mode = args.mode.unwrap_or(config.var.mode);
    let confidence = args.confidence.unwrap_or(config.var.confidence);
    let curve = config.tail_curve(mode, confidence)?;

    if args.curve {
        let cut = -curve.threshold;
        let rows: Vec<CurveRow> = curve
            .points
            .iter()
            .map(|&(x, density)| CurveRow {
                x,
                density,
                in_tail: x <= cut,
            })
            .collect();
        let minimal = rows
            .iter()
            .map(|r| format!("{:.6}\t{:.6}", r.x, r.density))
            .collect::<Vec<_>>()
            .join("\n");
        let title = format!("{} Density, {} Tail", mode.as_str(), confidence);
        return print_rows(&title, &rows, &minimal, format);
    }

    let value = validate_non_negative("value", args.value.unwrap_or(config.var.portfolio_value))?;
    let volatility = validate_non_negative(
        "volatility",
        args.volatility.unwrap_or(config.var.volatility),
    )?;
    let estimate = parametric_var(value, volatility, mode, confidence)?;

    let result = VarResult {
        mode,
        confidence,
        threshold: estimate.threshold,
        portfolio_value: value,
        volatility,
        var: estimate.var,
        shaded_mass: curve.shaded_mass(),
    };

    let metrics = vec![
        KeyValue::new("Distribution", mode.as_str()),
        KeyValue::new("Confidence", confidence.to_string()),
        KeyValue::new("Threshold", format!("{} σ", estimate.threshold)),
        KeyValue::from_percent("Shaded Tail Mass", result.shaded_mass * 100.0),
        KeyValue::separator(),
        KeyValue::from_f64("Portfolio Value", value, 2),
        KeyValue::new("Volatility", format_percent(volatility, 2)),
        KeyValue::from_f64("Value at Risk", estimate.var, 2),
    ];

    print_report(
        "Value at Risk",
        &metrics,
        &result,
        &format!("{:.2}", estimate.var),
        format,
    )
}
