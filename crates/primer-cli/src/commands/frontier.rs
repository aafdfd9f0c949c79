//! Frontier command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use primer_analytics::frontier::{FrontierPoint, MAX_RISK};
use primer_config::PrimerConfig;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{format_percent, print_report, print_rows, KeyValue};

/// Arguments for the frontier command.
#[derive(Args, Debug)]
pub struct FrontierArgs {
    /// Risk level on the 0-100 scale; omit to sample the whole curve
    #[arg(short, long)]
    pub risk: Option<f64>,

    /// Number of samples when no risk level is given
    #[arg(short, long, default_value = "11")]
    pub points: usize,
}

/// A frontier sample for display.
#[derive(Debug, Serialize, Tabled)]
pub struct FrontierRow {
    #[tabled(rename = "Risk")]
    pub risk: f64,
    #[tabled(rename = "Expected Return", display_with = "pct")]
    pub expected_return: f64,
    #[tabled(rename = "Risk Premium", display_with = "pct")]
    pub risk_premium: f64,
}

fn pct(value: &f64) -> String {
    format_percent(*value, 4)
}

/// Execute the frontier command.
pub fn execute(args: FrontierArgs, config: &PrimerConfig, format: OutputFormat) -> Result<()> {
    let frontier = config.frontier()?;
    let row = |p: FrontierPoint| FrontierRow {
        risk: p.risk,
        expected_return: p.expected_return,
        risk_premium: p.expected_return - frontier.risk_free_rate,
    };

    if let Some(risk) = args.risk {
        if !(0.0..=MAX_RISK).contains(&risk) {
            return Err(CliError::InvalidArgument {
                name: "risk",
                value: risk.to_string(),
                hint: "Risk is on a 0 to 100 scale.",
            }
            .into());
        }
        let result = row(FrontierPoint {
            risk,
            expected_return: frontier.expected_return(risk),
        });
        let metrics = vec![
            KeyValue::from_f64("Risk", risk, 2),
            KeyValue::new("Risk-Free Rate", format_percent(frontier.risk_free_rate, 2)),
            KeyValue::from_f64("Slope", frontier.slope, 4),
            KeyValue::separator(),
            KeyValue::from_percent("Expected Return", result.expected_return),
            KeyValue::from_percent("Risk Premium", result.risk_premium),
        ];
        return print_report(
            "Risk/Return Frontier",
            &metrics,
            &result,
            &format!("{:.6}", result.expected_return),
            format,
        );
    }

    let rows: Vec<FrontierRow> = frontier.sample(args.points).into_iter().map(row).collect();
    let minimal = rows
        .iter()
        .map(|r| format!("{}\t{:.6}", r.risk, r.expected_return))
        .collect::<Vec<_>>()
        .join("\n");
    print_rows("Risk/Return Frontier", &rows, &minimal, format)
}
