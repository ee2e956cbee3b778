use hp_fuel::FuelError;
use hp_pathways::{PathwayError, UnitError};
use hp_scenario::ScenarioError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("--{arg}: {source}")]
    Unit {
        arg: &'static str,
        #[source]
        source: UnitError,
    },

    #[error(transparent)]
    Pathway(#[from] PathwayError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Fuel(#[from] FuelError),
}
