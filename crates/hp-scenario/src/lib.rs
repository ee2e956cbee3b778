//! hp-scenario: scenario files for batch pathway evaluation.
//!
//! A scenario names a list of single evaluations and a list of parameter
//! sweeps. Files are YAML or JSON:
//!
//! ```yaml
//! version: 1
//! name: Example
//! evaluations:
//!   - id: hte-850
//!     point: { pathway: hte, thermal_power_mw: 600, pressure_atm: 1, outlet_temp_c: 850 }
//! sweeps:
//!   - id: si-outlet
//!     base: { pathway: si, thermal_power_mw: 600, outlet_temp_c: 850 }
//!     parameter: outlet_temperature
//!     start: 800
//!     end: 1000
//!     num_points: 5
//!     spacing: linear
//! ```

pub mod run;
pub mod schema;
pub mod validate;

pub use run::{EvaluationReport, ScenarioReport, SweepReport, run_scenario};
pub use schema::*;
pub use validate::{SCENARIO_VERSION, ValidationError, validate_scenario};

use hp_pathways::SweepError;
use std::path::Path;
use tracing::info;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Sweep {id}: {source}")]
    Sweep {
        id: String,
        #[source]
        source: SweepError,
    },

    #[error("Unsupported scenario file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    validate_scenario(&scenario)?;
    info!(path = %path.display(), "loaded scenario");
    Ok(scenario)
}

pub fn save_yaml(path: &Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), "saved scenario");
    Ok(())
}

pub fn load_json(path: &Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    validate_scenario(&scenario)?;
    info!(path = %path.display(), "loaded scenario");
    Ok(scenario)
}

pub fn save_json(path: &Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), "saved scenario");
    Ok(())
}

/// Load a scenario, picking the format from the file extension.
pub fn load(path: &Path) -> ScenarioResult<Scenario> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ScenarioError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
