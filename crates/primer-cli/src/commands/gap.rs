//! Gap command implementation.
//!
//! Shows each balance-sheet bucket's contribution to the weighted durations
//! and the resulting duration gap.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use primer_analytics::alm::DurationBucket;
use primer_scenarios::profiles::find_profile;

use crate::cli::OutputFormat;
use crate::output::{format_percent, print_header, print_report, KeyValue};

/// Arguments for the gap command.
#[derive(Args, Debug)]
pub struct GapArgs {
    /// Bank profile (money-center, regional, community)
    #[arg(short, long, default_value = "money-center")]
    pub profile: String,
}

/// Duration gap result.
#[derive(Debug, Serialize)]
pub struct GapResult {
    pub profile: &'static str,
    pub asset_duration: f64,
    pub liability_duration: f64,
    pub gap: f64,
    pub leverage_adjusted_gap: f64,
}

/// A bucket for display.
#[derive(Debug, Tabled)]
struct BucketRow {
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Bucket")]
    label: &'static str,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Duration (y)")]
    duration: String,
    #[tabled(rename = "Contribution (y)")]
    contribution: String,
}

impl BucketRow {
    fn new(side: &'static str, bucket: &DurationBucket) -> Self {
        Self {
            side,
            label: bucket.label,
            weight: format_percent(bucket.weight, 1),
            duration: format!("{:.3}", bucket.duration),
            contribution: format!("{:.5}", bucket.contribution()),
        }
    }
}

/// Execute the gap command.
pub fn execute(args: GapArgs, format: OutputFormat) -> Result<()> {
    let profile = find_profile(&args.profile)?;
    let gap = profile.duration_gap();
    let assets = profile.asset_leg();
    let liabilities = profile.liability_leg();
    let adjusted = gap.leverage_adjusted(assets.value, liabilities.value);

    let result = GapResult {
        profile: profile.id,
        asset_duration: gap.asset_duration.years(),
        liability_duration: gap.liability_duration.years(),
        gap: gap.gap,
        leverage_adjusted_gap: adjusted,
    };

    if format == OutputFormat::Table {
        let buckets: Vec<BucketRow> = profile
            .assets
            .iter()
            .map(|b| BucketRow::new("Asset", b))
            .chain(profile.liabilities.iter().map(|b| BucketRow::new("Liability", b)))
            .collect();
        print_header(&format!("{} - Composition", profile.name));
        println!(
            "{}",
            tabled::Table::new(buckets).with(tabled::settings::Style::rounded())
        );
    }

    let metrics = vec![
        KeyValue::from_f64("Asset Duration (y)", result.asset_duration, 5),
        KeyValue::from_f64("Liability Duration (y)", result.liability_duration, 5),
        KeyValue::from_f64("Duration Gap (y)", result.gap, 5),
        KeyValue::from_f64("Leverage-Adjusted Gap (y)", result.leverage_adjusted_gap, 5),
    ];

    print_report(
        "Duration Gap",
        &metrics,
        &result,
        &format!("{:.5}", result.gap),
        format,
    )
}
