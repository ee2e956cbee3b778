//! Parameter sweep generation.
//!
//! A sweep varies one [`Parameter`] of a pathway between two bounds while the
//! other inputs stay at the values of a base [`OperatingPoint`](crate::OperatingPoint).

use crate::pathway::Parameter;
use crate::sweep_executor::SweepError;
use crate::units::parse_quantity;
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep.
///
/// Bounds are stored in the canonical unit of the parameter's quantity
/// (°C, atm, MW or a plain fraction). The raw text is kept for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    /// Parameter being swept
    pub parameter: Parameter,
    /// Start value in canonical units
    pub start: f64,
    /// User input for start
    pub start_raw: String,
    /// End value in canonical units
    pub end: f64,
    /// User input for end
    pub end_raw: String,
    /// Number of points to generate
    pub num_points: usize,
    /// Spacing type
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a sweep from numeric bounds already in canonical units.
    pub fn new(
        parameter: Parameter,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        let unit = parameter.quantity().unit();
        let sweep = SweepDefinition {
            parameter,
            start,
            start_raw: format!("{start} {unit}"),
            end,
            end_raw: format!("{end} {unit}"),
            num_points,
            sweep_type,
        };
        sweep.validate()?;
        Ok(sweep)
    }

    /// Create a sweep from user text inputs such as `"800C"` and `"1000C"`.
    pub fn from_text(
        parameter: Parameter,
        start_raw: impl Into<String>,
        end_raw: impl Into<String>,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        let start_text = start_raw.into();
        let end_text = end_raw.into();
        let quantity = parameter.quantity();

        let start = parse_quantity(&start_text, quantity).map_err(|source| SweepError::Unit {
            bound: "start",
            source,
        })?;
        let end = parse_quantity(&end_text, quantity).map_err(|source| SweepError::Unit {
            bound: "end",
            source,
        })?;

        let sweep = SweepDefinition {
            parameter,
            start,
            start_raw: start_text,
            end,
            end_raw: end_text,
            num_points,
            sweep_type,
        };
        sweep.validate()?;
        Ok(sweep)
    }

    fn validate(&self) -> Result<(), SweepError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "Sweep bounds must be finite".to_string(),
            ));
        }
        if self.num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }
        if (self.start - self.end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }
        Ok(())
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // Both bounds must be positive for log spacing
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.parameter, self.start_raw, self.end_raw, self.num_points, self.sweep_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlet_sweep(num_points: usize, sweep_type: SweepType) -> SweepDefinition {
        SweepDefinition {
            parameter: Parameter::OutletTemperature,
            start: 800.0,
            start_raw: "800C".to_string(),
            end: 1000.0,
            end_raw: "1000C".to_string(),
            num_points,
            sweep_type,
        }
    }

    #[test]
    fn linear_sweep_generation() {
        let points = outlet_sweep(5, SweepType::Linear).generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 800.0).abs() < 1e-9);
        assert!((points[2] - 900.0).abs() < 1e-9);
        assert_eq!(points[4], 1000.0);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = SweepDefinition::new(Parameter::Pressure, 1.0, 100.0, 3, SweepType::Logarithmic)
            .unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert!((points[0] - 1.0).abs() < 1e-12);
        assert!((points[1] - 10.0).abs() < 1e-9);
        assert_eq!(points[2], 100.0);
    }

    #[test]
    fn logarithmic_falls_back_to_linear_for_non_positive_bounds() {
        let sweep =
            SweepDefinition::new(Parameter::ThermalPower, 0.0, 100.0, 3, SweepType::Logarithmic)
                .unwrap();
        assert_eq!(sweep.generate_points(), vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn sweep_from_text_converts_units() {
        let sweep = SweepDefinition::from_text(
            Parameter::OutletTemperature,
            "1073.15K",
            "1000C",
            5,
            SweepType::Linear,
        )
        .unwrap();
        assert_eq!(sweep.num_points, 5);
        assert!((sweep.start - 800.0).abs() < 1e-9);
        assert!((sweep.end - 1000.0).abs() < 1e-9);
        assert_eq!(sweep.start_raw, "1073.15K");
    }

    #[test]
    fn from_text_reports_bad_bound() {
        let err = SweepDefinition::from_text(
            Parameter::Pressure,
            "1atm",
            "ten",
            5,
            SweepType::Linear,
        )
        .unwrap_err();
        assert!(matches!(err, SweepError::Unit { bound: "end", .. }));
    }

    #[test]
    fn reject_invalid_point_count() {
        let result = SweepDefinition::new(Parameter::Pressure, 1.0, 10.0, 1, SweepType::Linear);
        assert!(matches!(result, Err(SweepError::InvalidConfiguration(_))));
    }

    #[test]
    fn reject_identical_bounds() {
        let result = SweepDefinition::from_text(
            Parameter::OutletTemperature,
            "850C",
            "850C",
            5,
            SweepType::Linear,
        );
        assert!(result.is_err());
    }

    #[test]
    fn reject_non_finite_bounds() {
        let result =
            SweepDefinition::new(Parameter::Pressure, 1.0, f64::NAN, 5, SweepType::Linear);
        assert!(result.is_err());
    }
}
