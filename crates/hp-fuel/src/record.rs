//! Fuel log records.
//!
//! The log is a whitespace-separated text file with one header line followed
//! by rows of `month day unleaded diesel e85` (gallons).

use crate::error::{FuelError, FuelResult};
use std::fmt;

/// Fuel type tracked by the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelKind {
    Unleaded,
    Diesel,
    E85,
}

impl FuelKind {
    /// Column order in the log file.
    pub const ALL: [FuelKind; 3] = [FuelKind::Unleaded, FuelKind::Diesel, FuelKind::E85];

    pub fn label(self) -> &'static str {
        match self {
            Self::Unleaded => "unleaded",
            Self::Diesel => "diesel",
            Self::E85 => "e85",
        }
    }
}

impl fmt::Display for FuelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelRecord {
    pub month: u32,
    pub day: u32,
    pub unleaded: f64,
    pub diesel: f64,
    pub e85: f64,
}

impl FuelRecord {
    pub fn amount(&self, kind: FuelKind) -> f64 {
        match kind {
            FuelKind::Unleaded => self.unleaded,
            FuelKind::Diesel => self.diesel,
            FuelKind::E85 => self.e85,
        }
    }
}

/// Parse the full log text. The first line is a header and is skipped; blank
/// lines are ignored. Columns past the fifth are ignored.
pub fn parse_records(text: &str) -> FuelResult<Vec<FuelRecord>> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> FuelResult<FuelRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 {
        return Err(FuelError::parse(
            line_no,
            format!("expected 5 columns, found {}", fields.len()),
        ));
    }

    let int = |i: usize, name: &str| -> FuelResult<u32> {
        fields[i]
            .parse()
            .map_err(|_| FuelError::parse(line_no, format!("invalid {name} '{}'", fields[i])))
    };
    let gallons = |i: usize, kind: FuelKind| -> FuelResult<f64> {
        match fields[i].parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(FuelError::parse(
                line_no,
                format!("invalid {kind} amount '{}'", fields[i]),
            )),
        }
    };

    Ok(FuelRecord {
        month: int(0, "month")?,
        day: int(1, "day")?,
        unleaded: gallons(2, FuelKind::Unleaded)?,
        diesel: gallons(3, FuelKind::Diesel)?,
        e85: gallons(4, FuelKind::E85)?,
    })
}
