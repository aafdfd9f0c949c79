//! CAMELS command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use primer_scenarios::camels::{average_rating, composite_rating, rating_descriptor, CamelsRating};
use primer_scenarios::profiles::find_profile;

use crate::cli::OutputFormat;
use crate::output::{print_rows, KeyValue};

/// Arguments for the camels command.
#[derive(Args, Debug)]
pub struct CamelsArgs {
    /// Bank profile (money-center, regional, community)
    #[arg(short, long, default_value = "money-center")]
    pub profile: String,
}

/// A component rating for display.
#[derive(Debug, Serialize, Tabled)]
pub struct CamelsRow {
    #[tabled(rename = "")]
    pub letter: char,
    #[tabled(rename = "Component")]
    pub component: &'static str,
    #[tabled(rename = "Rating")]
    pub rating: u8,
    #[tabled(rename = "Assessment")]
    pub descriptor: &'static str,
    #[tabled(rename = "Note")]
    pub note: &'static str,
}

impl From<&CamelsRating> for CamelsRow {
    fn from(r: &CamelsRating) -> Self {
        Self {
            letter: r.component.letter(),
            component: r.component.label(),
            rating: r.rating,
            descriptor: r.descriptor(),
            note: r.note,
        }
    }
}

/// Execute the camels command.
pub fn execute(args: CamelsArgs, format: OutputFormat) -> Result<()> {
    let profile = find_profile(&args.profile)?;
    let rows: Vec<CamelsRow> = profile.camels.iter().map(CamelsRow::from).collect();
    let composite = composite_rating(profile.camels);
    let minimal = composite.map_or_else(|| "-".to_string(), |c| c.to_string());

    print_rows(
        &format!("{} - CAMELS", profile.name),
        &rows,
        &minimal,
        format,
    )?;

    if format == OutputFormat::Table {
        if let (Some(mean), Some(c)) = (average_rating(profile.camels), composite) {
            let summary = [
                KeyValue::from_f64("Average", mean, 2),
                KeyValue::new("Composite", format!("{c} ({})", rating_descriptor(c))),
            ];
            println!("{}", tabled::Table::new(summary).with(tabled::settings::Style::rounded()));
        }
    }
    Ok(())
}
