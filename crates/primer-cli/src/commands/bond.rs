//! Bond command implementation.
//!
//! Estimates a bond's percentage price change for a rate move using
//! modified duration and approximate convexity.

use anyhow::Result;
use clap::Args;

use primer_analytics::rates::price_change;

use crate::cli::OutputFormat;
use crate::commands::{validate_non_negative, validate_rate};
use crate::output::{format_percent, format_signed_percent, print_report, KeyValue};

/// Arguments for the bond command.
#[derive(Args, Debug)]
pub struct BondArgs {
    /// Macaulay duration in years
    #[arg(short, long)]
    pub duration: f64,

    /// Current yield (percent)
    #[arg(short, long, allow_negative_numbers = true)]
    pub current: f64,

    /// New yield (percent)
    #[arg(short, long, allow_negative_numbers = true)]
    pub new: f64,
}

/// Execute the bond command.
pub fn execute(args: BondArgs, format: OutputFormat) -> Result<()> {
    let duration = validate_non_negative("duration", args.duration)?;
    let current = validate_rate("current yield", args.current)?;
    let new = validate_rate("new yield", args.new)?;

    let result = price_change(duration, current, new);

    let metrics = vec![
        KeyValue::from_f64("Duration", duration, 2),
        KeyValue::new("Current Yield", format_percent(current, 2)),
        KeyValue::new("New Yield", format_percent(new, 2)),
        KeyValue::new("Rate Change", format!("{:+.0} bp", result.rate_change * 100.0)),
        KeyValue::separator(),
        KeyValue::from_f64("Modified Duration", result.modified_duration, 4),
        KeyValue::from_f64("Convexity", result.convexity, 4),
        KeyValue::new("Duration Effect", format_signed_percent(result.duration_effect, 4)),
        KeyValue::new("Convexity Effect", format_signed_percent(result.convexity_effect, 4)),
        KeyValue::new("Price Change", format_signed_percent(result.price_change, 4)),
    ];

    print_report(
        "Bond Price Sensitivity",
        &metrics,
        &result,
        &format!("{:.6}", result.price_change),
        format,
    )
}
