//! Pathway calculation errors.

use hp_core::HpError;
use thiserror::Error;

/// Result type for pathway calculations.
pub type PathwayResult<T> = Result<T, PathwayError>;

/// Errors that can occur while evaluating a production pathway.
///
/// Every pathway call is all-or-nothing: an error means no partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathwayError {
    /// An input lies outside the range the correlation is valid for.
    #[error("Domain precondition violated: {what} = {value:.2} °C is below the minimum of {minimum} °C")]
    DomainPreconditionViolation {
        what: &'static str,
        value: f64,
        minimum: f64,
    },

    /// The operating point cannot produce a physical result (zero efficiency,
    /// non-finite specific energy, electrical fraction outside [0, 1], ...).
    #[error("Invalid operating point: {what}")]
    InvalidOperatingPoint { what: String },

    /// The requested parameter does not belong to this pathway.
    #[error("Pathway {pathway} has no parameter {parameter}")]
    UnknownParameter {
        pathway: &'static str,
        parameter: &'static str,
    },
}

impl PathwayError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidOperatingPoint { what: what.into() }
    }

    /// True for errors a batch sweep should skip rather than abort on.
    pub fn is_point_local(&self) -> bool {
        matches!(
            self,
            Self::DomainPreconditionViolation { .. } | Self::InvalidOperatingPoint { .. }
        )
    }
}

impl From<PathwayError> for HpError {
    fn from(err: PathwayError) -> Self {
        match err {
            PathwayError::DomainPreconditionViolation {
                what,
                value,
                minimum,
            } => HpError::OutOfDomain {
                what,
                value,
                minimum,
            },
            PathwayError::InvalidOperatingPoint { what } => HpError::InvalidArg { what },
            other @ PathwayError::UnknownParameter { .. } => HpError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
