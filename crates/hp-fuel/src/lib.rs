//! hp-fuel: yearly fuel consumption report.
//!
//! Reads a fuel log (`month day unleaded diesel e85` per row after one header
//! line), sums it per calendar day over a fixed 365-day year, prints totals and
//! daily averages, and plots the daily unleaded consumption as SVG.

pub mod aggregate;
pub mod calendar;
pub mod error;
pub mod plot;
pub mod record;
pub mod report;

pub use aggregate::{Aggregation, DailySeries, aggregate};
pub use calendar::{CALENDAR_YEAR, DAYS_IN_YEAR, calendar_days, day_index};
pub use error::{FuelError, FuelResult};
pub use plot::{plot_daily, render_svg};
pub use record::{FuelKind, FuelRecord, parse_records};
pub use report::{FuelSummary, SummaryReport, summarize};

use std::path::Path;
use tracing::info;

pub const DEFAULT_INPUT: &str = "uiuc-fuel-consumption.txt";
pub const DEFAULT_OUTPUT: &str = "uiuc-unleaded.svg";

/// Everything produced from one fuel log.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelReport {
    pub records: usize,
    pub skipped: usize,
    pub daily: DailySeries,
    pub summary: SummaryReport,
}

/// Build the report from log text without touching the filesystem.
pub fn build_report(text: &str) -> FuelResult<FuelReport> {
    let records = parse_records(text)?;
    let Aggregation { daily, skipped } = aggregate(&records);
    let summary = SummaryReport(summarize(&daily));
    Ok(FuelReport {
        records: records.len(),
        skipped,
        daily,
        summary,
    })
}

/// Read the log at `input`, write the unleaded plot to `output`.
pub fn run_report(input: &Path, output: &Path) -> FuelResult<FuelReport> {
    let text = std::fs::read_to_string(input)?;
    let report = build_report(&text)?;
    info!(
        path = %input.display(),
        records = report.records,
        skipped = report.skipped,
        "read fuel log"
    );

    plot_daily(output, &report.daily.unleaded)?;
    info!(path = %output.display(), "wrote unleaded plot");
    Ok(report)
}
