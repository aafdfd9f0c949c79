//! PD command implementation.
//!
//! Maps a credit score to a probability of default and, optionally, an
//! expected loss.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use primer_analytics::credit::{expected_loss, CreditBand};
use primer_config::PrimerConfig;

use crate::cli::OutputFormat;
use crate::commands::{validate_non_negative, validate_percent};
use crate::output::{format_percent, print_report, KeyValue};

/// Arguments for the pd command.
#[derive(Args, Debug)]
pub struct PdArgs {
    /// Credit score (e.g., 700)
    #[arg(short, long, allow_negative_numbers = true)]
    pub score: f64,

    /// Loss given default (percent); with --exposure, adds expected loss
    #[arg(long, requires = "exposure")]
    pub lgd: Option<f64>,

    /// Exposure at default
    #[arg(short, long, requires = "lgd")]
    pub exposure: Option<f64>,
}

/// PD result.
#[derive(Debug, Serialize)]
pub struct PdResult {
    pub score: f64,
    pub band: CreditBand,
    pub pd: f64,
    pub lgd: Option<f64>,
    pub exposure: Option<f64>,
    pub expected_loss: Option<f64>,
}

/// Execute the pd command.
pub fn execute(args: PdArgs, config: &PrimerConfig, format: OutputFormat) -> Result<()> {
    let curve = config.default_curve()?;
    let pd = curve.probability_of_default(args.score);
    let band = CreditBand::from_score(args.score);

    let loss = match (args.lgd, args.exposure) {
        (Some(lgd), Some(exposure)) => {
            let lgd = validate_percent("lgd", lgd)?;
            let exposure = validate_non_negative("exposure", exposure)?;
            Some(expected_loss(pd, lgd, exposure))
        }
        _ => None,
    };

    let mut metrics = vec![
        KeyValue::from_f64("Score", args.score, 0),
        KeyValue::new("Band", band.label()),
        KeyValue::from_percent("Probability of Default", pd),
    ];
    if let (Some(lgd), Some(exposure), Some(el)) = (args.lgd, args.exposure, loss) {
        metrics.push(KeyValue::separator());
        metrics.push(KeyValue::new("Loss Given Default", format_percent(lgd, 2)));
        metrics.push(KeyValue::from_f64("Exposure", exposure, 2));
        metrics.push(KeyValue::from_f64("Expected Loss", el, 2));
    }

    let result = PdResult {
        score: args.score,
        band,
        pd,
        lgd: args.lgd,
        exposure: args.exposure,
        expected_loss: loss,
    };

    print_report(
        "Probability of Default",
        &metrics,
        &result,
        &format!("{pd:.4}"),
        format,
    )
}
