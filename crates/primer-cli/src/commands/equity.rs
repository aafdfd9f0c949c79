//! Equity command implementation.
//!
//! Reprices a bank profile's assets and liabilities under a parallel rate
//! shock and reports the change in equity.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use primer_analytics::rates::EquityImpact;
use primer_config::PrimerConfig;
use primer_scenarios::profiles::{find_profile, BankProfile};
use primer_scenarios::shocks::{RateShock, STANDARD_SHOCKS};

use crate::cli::OutputFormat;
use crate::commands::validate_rate;
use crate::output::{format_percent, format_signed_percent, print_report, print_rows, KeyValue};

/// Arguments for the equity command.
#[derive(Args, Debug)]
pub struct EquityArgs {
    /// Bank profile (money-center, regional, community)
    #[arg(short, long, default_value = "money-center")]
    pub profile: String,

    /// Parallel shock in basis points; omit to run the standard shocks
    #[arg(short, long, allow_negative_numbers = true)]
    pub shock: Option<i32>,

    /// Starting rate (percent); defaults to the configured current rate
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,
}

/// One shock applied to one profile.
#[derive(Debug, Serialize, Tabled)]
pub struct EquityRow {
    #[tabled(rename = "Shock")]
    pub shock: String,
    #[tabled(rename = "bp")]
    pub basis_points: i32,
    #[tabled(rename = "Assets %", display_with = "signed_pct")]
    pub asset_change_pct: f64,
    #[tabled(rename = "Liabilities %", display_with = "signed_pct")]
    pub liability_change_pct: f64,
    #[tabled(rename = "Equity Before", display_with = "amount")]
    pub equity_before: f64,
    #[tabled(rename = "Equity After", display_with = "amount")]
    pub equity_after: f64,
    #[tabled(rename = "Equity %", display_with = "signed_pct")]
    pub equity_change_pct: f64,
    #[tabled(rename = "Insolvent")]
    pub insolvent: bool,
}

impl EquityRow {
    fn new(shock: &RateShock, impact: &EquityImpact) -> Self {
        Self {
            shock: shock.name.to_string(),
            basis_points: shock.basis_points,
            asset_change_pct: impact.asset_change_pct,
            liability_change_pct: impact.liability_change_pct,
            equity_before: impact.equity_before,
            equity_after: impact.equity_after,
            equity_change_pct: impact.equity_change_pct,
            insolvent: impact.is_insolvent(),
        }
    }
}

fn signed_pct(value: &f64) -> String {
    format_signed_percent(*value, 2)
}

fn amount(value: &f64) -> String {
    format!("{value:.2}")
}

/// Execute the equity command.
pub fn execute(args: EquityArgs, config: &PrimerConfig, format: OutputFormat) -> Result<()> {
    let profile = find_profile(&args.profile)?;
    let rate = validate_rate("rate", args.rate.unwrap_or(config.rates.current_rate))?;

    match args.shock {
        Some(bp) => single(profile, RateShock::new("Custom", bp), rate, format),
        None => {
            let rows: Vec<EquityRow> = STANDARD_SHOCKS
                .iter()
                .map(|shock| EquityRow::new(shock, &shock.apply_from(profile, rate)))
                .collect();
            let title = format!("{} - Standard Rate Shocks from {}", profile.name, format_percent(rate, 2));
            let minimal = rows
                .iter()
                .map(|r| format!("{}\t{:.4}", r.basis_points, r.equity_change_pct))
                .collect::<Vec<_>>()
                .join("\n");
            print_rows(&title, &rows, &minimal, format)
        }
    }
}

fn single(profile: &BankProfile, shock: RateShock, rate: f64, format: OutputFormat) -> Result<()> {
    let impact = shock.apply_from(profile, rate);
    let row = EquityRow::new(&shock, &impact);

    let mut metrics = vec![
        KeyValue::new("Profile", profile.name),
        KeyValue::new("Shock", format!("{:+} bp", shock.basis_points)),
        KeyValue::new("Starting Rate", format_percent(rate, 2)),
        KeyValue::separator(),
        KeyValue::new("Asset Change", format_signed_percent(impact.asset_change_pct, 4)),
        KeyValue::new("Liability Change", format_signed_percent(impact.liability_change_pct, 4)),
        KeyValue::from_f64("Assets After ($bn)", impact.assets_after, 2),
        KeyValue::from_f64("Liabilities After ($bn)", impact.liabilities_after, 2),
        KeyValue::from_f64("Equity Before ($bn)", impact.equity_before, 2),
        KeyValue::from_f64("Equity After ($bn)", impact.equity_after, 2),
        KeyValue::new("Equity Change", format_signed_percent(impact.equity_change_pct, 2)),
    ];
    if impact.is_insolvent() {
        metrics.push(KeyValue::new("Status", "Insolvent"));
    }

    print_report(
        "Equity Impact",
        &metrics,
        &row,
        &format!("{:.4}", impact.equity_change_pct),
        format,
    )
}
