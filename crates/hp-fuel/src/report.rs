//! Yearly totals and daily averages.

use crate::aggregate::DailySeries;
use crate::calendar::DAYS_IN_YEAR;
use crate::record::FuelKind;
use hp_core::round_to;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSummary {
    pub kind: FuelKind,
    /// Gallons over the reporting year.
    pub total: f64,
    /// `total` divided by the 365 calendar days.
    pub average_per_day: f64,
}

pub fn summarize(daily: &DailySeries) -> Vec<FuelSummary> {
    FuelKind::ALL
        .into_iter()
        .map(|kind| {
            let total = daily.total(kind);
            FuelSummary {
                kind,
                total,
                average_per_day: total / DAYS_IN_YEAR as f64,
            }
        })
        .collect()
}

/// Printable report: all totals first, then all daily averages, rounded to
/// two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport(pub Vec<FuelSummary>);

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.0 {
            writeln!(f, "Total {}: {:.2}", s.kind, round_to(s.total, 2))?;
        }
        for s in &self.0 {
            writeln!(
                f,
                "avg per day {}: {:.2}",
                s.kind,
                round_to(s.average_per_day, 2)
            )?;
        }
        Ok(())
    }
}
