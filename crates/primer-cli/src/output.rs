//! Output formatting utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silences success and warning status lines. Results and errors still print.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Prints a list of rows in the requested format.
///
/// `minimal` is printed as-is for [`OutputFormat::Minimal`].
pub fn print_rows<T: Serialize + Tabled>(
    title: &str,
    rows: &[T],
    minimal: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(title);
            print_table(rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Minimal => println!("{minimal}"),
    }
    Ok(())
}

/// Prints one result: a metric table for humans, the flat record otherwise.
///
/// `data` must serialize to a flat record for CSV output.
pub fn print_report<T: Serialize>(
    title: &str,
    metrics: &[KeyValue],
    data: &T,
    minimal: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(title);
            print_table(metrics);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Csv => print_csv(std::slice::from_ref(data))?,
        OutputFormat::Minimal => println!("{minimal}"),
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a percentage with the given number of decimals.
pub fn format_percent(value: f64, precision: usize) -> String {
    format!("{:.prec$}%", value, prec = precision)
}

/// Formats a signed percentage with the given number of decimals.
pub fn format_signed_percent(value: f64, precision: usize) -> String {
    format!("{:+.prec$}%", value, prec = precision)
}

/// Formats an amount in billions of dollars.
pub fn format_billions(value: Decimal) -> String {
    format!("${}bn", value.normalize())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a float with fixed precision.
    pub fn from_f64(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self::new(key, format!("{:.prec$}", value, prec = precision))
    }

    /// Creates a key-value pair formatted as a percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value, 4))
    }

    /// Creates an empty separator row.
    pub fn separator() -> Self {
        Self::new("", "")
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
