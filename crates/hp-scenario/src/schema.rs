//! Scenario file schema.

use hp_pathways::{OperatingPoint, Parameter, SweepDefinition, SweepError, SweepType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub evaluations: Vec<EvaluationDef>,
    #[serde(default)]
    pub sweeps: Vec<SweepDef>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::validate::SCENARIO_VERSION,
            name: name.into(),
            evaluations: Vec::new(),
            sweeps: Vec::new(),
        }
    }
}

/// A single pathway evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationDef {
    pub id: String,
    pub point: OperatingPoint,
}

/// One parameter swept from `start` to `end` around `base`.
///
/// Bounds are in the canonical unit of the parameter (°C, atm, MW, fraction).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub id: String,
    pub base: OperatingPoint,
    pub parameter: Parameter,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    #[serde(default)]
    pub spacing: SweepType,
}

impl SweepDef {
    pub fn definition(&self) -> Result<SweepDefinition, SweepError> {
        SweepDefinition::new(
            self.parameter,
            self.start,
            self.end,
            self.num_points,
            self.spacing,
        )
    }
}
