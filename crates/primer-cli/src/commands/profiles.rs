//! Profiles command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use primer_scenarios::camels::composite_rating;
use primer_scenarios::profiles::{profiles, BankProfile};
use rust_decimal::Decimal;

use crate::cli::OutputFormat;
use crate::output::{format_billions, print_rows};

/// A profile summary for display.
#[derive(Debug, Serialize, Tabled)]
pub struct ProfileRow {
    #[tabled(rename = "ID")]
    pub id: &'static str,
    #[tabled(rename = "Name")]
    pub name: &'static str,
    #[tabled(rename = "Assets", display_with = "billions")]
    pub total_assets: Decimal,
    #[tabled(rename = "Liabilities", display_with = "billions")]
    pub total_liabilities: Decimal,
    #[tabled(rename = "Equity/Assets", display_with = "ratio")]
    pub equity_ratio: Decimal,
    #[tabled(rename = "Duration Gap (y)", display_with = "years")]
    pub duration_gap: f64,
    #[tabled(rename = "CAMELS", display_with = "composite")]
    pub camels_composite: Option<u8>,
    #[tabled(rename = "Well Capitalized")]
    pub well_capitalized: bool,
}

impl From<&BankProfile> for ProfileRow {
    fn from(p: &BankProfile) -> Self {
        Self {
            id: p.id,
            name: p.name,
            total_assets: p.total_assets,
            total_liabilities: p.total_liabilities,
            equity_ratio: p.equity_ratio(),
            duration_gap: p.duration_gap().gap,
            camels_composite: composite_rating(p.camels),
            well_capitalized: p.capital.is_well_capitalized(),
        }
    }
}

fn billions(value: &Decimal) -> String {
    format_billions(*value)
}

fn ratio(value: &Decimal) -> String {
    format!("{}%", value.round_dp(2).normalize())
}

fn years(value: &f64) -> String {
    format!("{value:.4}")
}

fn composite(value: &Option<u8>) -> String {
    value.map_or_else(|| "-".to_string(), |r| r.to_string())
}

/// Execute the profiles command.
pub fn execute(format: OutputFormat) -> Result<()> {
    let rows: Vec<ProfileRow> = profiles().iter().map(ProfileRow::from).collect();
    let minimal = rows.iter().map(|r| r.id).collect::<Vec<_>>().join("\n");
    print_rows("Bank Profiles", &rows, &minimal, format)
}
