//! Sweep execution across a pathway's operating range.
//!
//! Each point is an independent pathway call, so points are evaluated in
//! parallel. A point that fails (SI domain violation, zero efficiency, ...) is
//! recorded with its error and the sweep carries on.

use crate::error::PathwayError;
use crate::pathway::{OperatingPoint, Parameter, Pathway};
use crate::production::Production;
use crate::sweeps::SweepDefinition;
use crate::units::UnitError;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

/// Error in sweep configuration.
///
/// Failures of individual points are not errors of the sweep; they are
/// recorded in [`SweepResult::outcomes`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    /// Invalid sweep configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A sweep bound could not be parsed
    #[error("Invalid {bound} value: {source}")]
    Unit {
        bound: &'static str,
        #[source]
        source: UnitError,
    },

    /// The swept parameter is not an input of the base pathway
    #[error("Pathway {pathway} cannot be swept over {parameter}")]
    UnknownParameter {
        pathway: Pathway,
        parameter: Parameter,
    },
}

/// One evaluated sweep point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Value of the swept parameter
    pub value: f64,
    /// Pathway result, or the reason this point has none
    pub outcome: Result<Production, PathwayError>,
}

impl SweepPoint {
    pub fn production(&self) -> Option<&Production> {
        self.outcome.as_ref().ok()
    }
}

/// Result of a pathway sweep, in sweep order.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Base operating point the sweep started from
    pub base: OperatingPoint,
    /// Parameter that was swept
    pub parameter: Parameter,
    /// One entry per generated point
    pub outcomes: Vec<SweepPoint>,
    /// Number of successful evaluations
    pub num_successful: usize,
    /// Number of failed evaluations
    pub num_failed: usize,
}

impl SweepResult {
    pub fn pathway(&self) -> Pathway {
        self.base.pathway()
    }

    /// Independent variable values, including failed points.
    pub fn independent_values(&self) -> Vec<f64> {
        self.outcomes.iter().map(|p| p.value).collect()
    }

    /// Independent values corresponding to successful points
    pub fn successful_independent_values(&self) -> Vec<f64> {
        self.outcomes
            .iter()
            .filter_map(|p| p.production().map(|_| p.value))
            .collect()
    }

    /// Production rates [kg/h] (excluding failed points)
    pub fn production_rate_kg_per_h(&self) -> Vec<f64> {
        self.successes()
            .map(|p| p.production_rate_kg_per_h)
            .collect()
    }

    /// Specific energies [kWh/kg] (excluding failed points)
    pub fn specific_energy_kwh_per_kg(&self) -> Vec<f64> {
        self.successes()
            .map(|p| p.specific_energy_kwh_per_kg)
            .collect()
    }

    /// Electrical fractions (excluding failed points and points without one)
    pub fn gamma(&self) -> Vec<f64> {
        self.successes().filter_map(|p| p.gamma).collect()
    }

    /// Failed points as `(index, value, error)`.
    pub fn failures(&self) -> Vec<(usize, f64, &PathwayError)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.outcome.as_ref().err().map(|e| (i, p.value, e)))
            .collect()
    }

    fn successes(&self) -> impl Iterator<Item = &Production> {
        self.outcomes.iter().filter_map(SweepPoint::production)
    }
}

/// Evaluate `base`'s pathway at every point of `sweep_def`.
///
/// # Arguments
///
/// - `base`: operating point supplying every input except the swept one
/// - `sweep_def`: swept parameter and its points
///
/// # Returns
///
/// SweepResult with one outcome per point, in the order generated
pub fn execute_sweep(
    base: &OperatingPoint,
    sweep_def: &SweepDefinition,
) -> Result<SweepResult, SweepError> {
    let pathway = base.pathway();
    let parameter = sweep_def.parameter;
    if !pathway.has_parameter(parameter) {
        return Err(SweepError::UnknownParameter { pathway, parameter });
    }

    let values = sweep_def.generate_points();
    let outcomes: Vec<SweepPoint> = values
        .par_iter()
        .map(|&value| SweepPoint {
            value,
            outcome: base
                .with(parameter, value)
                .and_then(|point| point.evaluate()),
        })
        .collect();

    let mut num_failed = 0;
    for (index, point) in outcomes.iter().enumerate() {
        if let Err(err) = &point.outcome {
            num_failed += 1;
            warn!(%pathway, %parameter, index, value = point.value, error = %err, "sweep point skipped");
        }
    }
    let num_successful = outcomes.len() - num_failed;

    debug!(%pathway, %parameter, num_successful, num_failed, "sweep finished");

    Ok(SweepResult {
        base: *base,
        parameter,
        outcomes,
        num_successful,
        num_failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweeps::SweepType;

    fn si_base() -> OperatingPoint {
        OperatingPoint::Si {
            thermal_power_mw: 600.0,
            outlet_temp_c: 850.0,
        }
    }

    #[test]
    fn sweep_keeps_order_and_skips_domain_failures() {
        // 0.97 * 700 = 679 °C is below the SI domain, the rest are inside it.
        let sweep_def = SweepDefinition::new(
            Parameter::OutletTemperature,
            700.0,
            1000.0,
            4,
            SweepType::Linear,
        )
        .unwrap();

        let result = execute_sweep(&si_base(), &sweep_def).unwrap();

        assert_eq!(result.independent_values(), vec![700.0, 800.0, 900.0, 1000.0]);
        assert_eq!(result.num_failed, 1);
        assert_eq!(result.num_successful, 3);
        assert_eq!(result.successful_independent_values(), vec![800.0, 900.0, 1000.0]);

        let failures = result.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, 0);
        assert!(matches!(
            failures[0].2,
            PathwayError::DomainPreconditionViolation { .. }
        ));

        let rates = result.production_rate_kg_per_h();
        assert!(rates.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn sweep_matches_direct_calls() {
        let base = OperatingPoint::Hte {
            thermal_power_mw: 600.0,
            pressure_atm: 1.0,
            outlet_temp_c: 850.0,
        };
        let sweep_def =
            SweepDefinition::new(Parameter::Pressure, 1.0, 100.0, 5, SweepType::Logarithmic)
                .unwrap();

        let result = execute_sweep(&base, &sweep_def).unwrap();
        assert_eq!(result.num_successful, 5);

        for point in &result.outcomes {
            let direct = crate::hte_production_rate(600.0, point.value, 850.0).unwrap();
            assert_eq!(point.production(), Some(&direct));
        }
        assert_eq!(result.gamma().len(), 5);
    }

    #[test]
    fn parameter_must_belong_to_pathway() {
        let sweep_def =
            SweepDefinition::new(Parameter::Pressure, 1.0, 10.0, 3, SweepType::Linear).unwrap();
        let err = execute_sweep(&si_base(), &sweep_def).unwrap_err();
        assert_eq!(
            err,
            SweepError::UnknownParameter {
                pathway: Pathway::Si,
                parameter: Parameter::Pressure,
            }
        );
    }
}
