//! Scenario validation logic.

use crate::schema::{EvaluationDef, Scenario, SweepDef};
use hp_pathways::OperatingPoint;
use std::collections::HashSet;

/// Only scenario format version understood by this crate.
pub const SCENARIO_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty ID in {context}")]
    EmptyId { context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Sweep {id}: pathway {pathway} has no parameter {parameter}")]
    ParameterNotInPathway {
        id: String,
        pathway: String,
        parameter: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version != SCENARIO_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let mut evaluation_ids = HashSet::new();
    for evaluation in &scenario.evaluations {
        check_id(&evaluation.id, "evaluations", &mut evaluation_ids)?;
        validate_evaluation(evaluation)?;
    }

    let mut sweep_ids = HashSet::new();
    for sweep in &scenario.sweeps {
        check_id(&sweep.id, "sweeps", &mut sweep_ids)?;
        validate_sweep(sweep)?;
    }

    Ok(())
}

fn check_id<'a>(
    id: &'a str,
    context: &str,
    seen: &mut HashSet<&'a str>,
) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyId {
            context: context.to_string(),
        });
    }
    if !seen.insert(id) {
        return Err(ValidationError::DuplicateId {
            id: id.to_string(),
            context: context.to_string(),
        });
    }
    Ok(())
}

fn validate_evaluation(evaluation: &EvaluationDef) -> Result<(), ValidationError> {
    validate_point(&evaluation.id, &evaluation.point)
}

fn validate_sweep(sweep: &SweepDef) -> Result<(), ValidationError> {
    validate_point(&sweep.id, &sweep.base)?;

    let pathway = sweep.base.pathway();
    if !pathway.has_parameter(sweep.parameter) {
        return Err(ValidationError::ParameterNotInPathway {
            id: sweep.id.clone(),
            pathway: pathway.key().to_string(),
            parameter: sweep.parameter.key().to_string(),
        });
    }

    for (field, value) in [("start", sweep.start), ("end", sweep.end)] {
        if !value.is_finite() {
            return Err(invalid(&sweep.id, field, value, "must be finite"));
        }
    }

    if sweep.num_points < 2 {
        return Err(ValidationError::InvalidValue {
            field: format!("{}.num_points", sweep.id),
            value: sweep.num_points.to_string(),
            reason: "sweep must have at least 2 points".to_string(),
        });
    }

    if (sweep.start - sweep.end).abs() < 1e-12 {
        return Err(invalid(
            &sweep.id,
            "end",
            sweep.end,
            "start and end must differ",
        ));
    }

    Ok(())
}

fn validate_point(id: &str, point: &OperatingPoint) -> Result<(), ValidationError> {
    for (parameter, value) in point.values() {
        if !value.is_finite() {
            return Err(invalid(id, parameter.key(), value, "must be finite"));
        }
    }
    Ok(())
}

fn invalid(id: &str, field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: format!("{id}.{field}"),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hp_pathways::{Parameter, SweepType};

    fn hte_point() -> OperatingPoint {
        OperatingPoint::Hte {
            thermal_power_mw: 600.0,
            pressure_atm: 1.0,
            outlet_temp_c: 850.0,
        }
    }

    fn sweep(parameter: Parameter) -> SweepDef {
        SweepDef {
            id: "s1".to_string(),
            base: hte_point(),
            parameter,
            start: 1.0,
            end: 10.0,
            num_points: 4,
            spacing: SweepType::Linear,
        }
    }

    #[test]
    fn empty_scenario_is_valid() {
        assert!(validate_scenario(&Scenario::new("empty")).is_ok());
    }

    #[test]
    fn rejects_future_version() {
        let mut scenario = Scenario::new("future");
        scenario.version = 2;
        assert_eq!(
            validate_scenario(&scenario),
            Err(ValidationError::UnsupportedVersion { version: 2 })
        );
    }

    #[test]
    fn rejects_duplicate_evaluation_ids() {
        let mut scenario = Scenario::new("dup");
        for _ in 0..2 {
            scenario.evaluations.push(EvaluationDef {
                id: "e1".to_string(),
                point: hte_point(),
            });
        }
        assert!(matches!(
            validate_scenario(&scenario),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn same_id_may_appear_in_evaluations_and_sweeps() {
        let mut scenario = Scenario::new("shared");
        scenario.evaluations.push(EvaluationDef {
            id: "s1".to_string(),
            point: hte_point(),
        });
        scenario.sweeps.push(sweep(Parameter::Pressure));
        assert!(validate_scenario(&scenario).is_ok());
    }

    #[test]
    fn rejects_blank_id() {
        let mut scenario = Scenario::new("blank");
        scenario.evaluations.push(EvaluationDef {
            id: "  ".to_string(),
            point: hte_point(),
        });
        assert!(matches!(
            validate_scenario(&scenario),
            Err(ValidationError::EmptyId { .. })
        ));
    }

    #[test]
    fn rejects_parameter_from_another_pathway() {
        let mut scenario = Scenario::new("bad sweep");
        scenario.sweeps.push(sweep(Parameter::Efficiency));
        assert!(matches!(
            validate_scenario(&scenario),
            Err(ValidationError::ParameterNotInPathway { .. })
        ));
    }

    #[test]
    fn rejects_degenerate_sweeps() {
        let mut one_point = sweep(Parameter::Pressure);
        one_point.num_points = 1;
        assert!(validate_sweep(&one_point).is_err());

        let mut flat = sweep(Parameter::Pressure);
        flat.end = flat.start;
        assert!(validate_sweep(&flat).is_err());

        let mut nan = sweep(Parameter::Pressure);
        nan.start = f64::NAN;
        assert!(validate_sweep(&nan).is_err());
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let point = OperatingPoint::Si {
            thermal_power_mw: f64::INFINITY,
            outlet_temp_c: 900.0,
        };
        let err = validate_point("e1", &point).unwrap_err();
        assert!(err.to_string().contains("e1.thermal_power"));
    }
}
