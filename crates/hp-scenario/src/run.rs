//! Scenario execution.

use crate::schema::Scenario;
use crate::{ScenarioError, ScenarioResult};
use hp_pathways::{OperatingPoint, PathwayError, Production, SweepResult, execute_sweep};
use tracing::{info, warn};

/// Outcome of one named evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub id: String,
    pub point: OperatingPoint,
    pub outcome: Result<Production, PathwayError>,
}

#[derive(Debug, Clone)]
pub struct SweepReport {
    pub id: String,
    pub result: SweepResult,
}

/// Results of every evaluation and sweep, in file order.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: String,
    pub evaluations: Vec<EvaluationReport>,
    pub sweeps: Vec<SweepReport>,
}

impl ScenarioReport {
    /// Number of evaluations and sweep points that produced no result.
    pub fn num_failed(&self) -> usize {
        let evaluations = self
            .evaluations
            .iter()
            .filter(|e| e.outcome.is_err())
            .count();
        let points: usize = self.sweeps.iter().map(|s| s.result.num_failed).sum();
        evaluations + points
    }
}

/// Run every evaluation and sweep of `scenario`.
///
/// A failing evaluation is recorded in its report and does not stop the run.
/// Only a sweep that cannot be set up at all is an error.
pub fn run_scenario(scenario: &Scenario) -> ScenarioResult<ScenarioReport> {
    crate::validate_scenario(scenario)?;

    let evaluations = scenario
        .evaluations
        .iter()
        .map(|evaluation| {
            let outcome = evaluation.point.evaluate();
            if let Err(err) = &outcome {
                warn!(id = %evaluation.id, error = %err, "evaluation failed");
            }
            EvaluationReport {
                id: evaluation.id.clone(),
                point: evaluation.point,
                outcome,
            }
        })
        .collect();

    let mut sweeps = Vec::with_capacity(scenario.sweeps.len());
    for sweep in &scenario.sweeps {
        let result = sweep
            .definition()
            .and_then(|def| execute_sweep(&sweep.base, &def))
            .map_err(|source| ScenarioError::Sweep {
                id: sweep.id.clone(),
                source,
            })?;
        sweeps.push(SweepReport {
            id: sweep.id.clone(),
            result,
        });
    }

    let report = ScenarioReport {
        name: scenario.name.clone(),
        evaluations,
        sweeps,
    };
    info!(
        scenario = %report.name,
        evaluations = report.evaluations.len(),
        sweeps = report.sweeps.len(),
        failed = report.num_failed(),
        "scenario finished"
    );
    Ok(report)
}
