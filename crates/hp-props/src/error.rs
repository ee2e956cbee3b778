//! Property table errors.

use hp_core::HpError;
use thiserror::Error;

/// Result type for property operations.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors that can occur when building tables or evaluating checked correlations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    /// x and y columns differ in length.
    #[error("Table columns differ in length (x={x_len}, y={y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// A table needs at least two rows to interpolate.
    #[error("Table needs at least 2 points (got {len})")]
    TooShort { len: usize },

    /// NaN or infinite entry.
    #[error("Non-finite table entry at index {index}")]
    NonFinite { index: usize },

    /// x must be non-decreasing.
    #[error("Table x values decrease at index {index}")]
    NotMonotonic { index: usize },

    /// An x value may appear at most twice (one left and one right limit).
    #[error("Table x value {x} appears more than twice")]
    TooManyDuplicates { x: f64 },

    /// Correlation produced a non-physical value.
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },
}

impl From<PropsError> for HpError {
    fn from(err: PropsError) -> Self {
        match err {
            PropsError::NonPhysical { what, value } => HpError::Invariant {
                what: format!("non-physical {what}: {value}"),
            },
            other => HpError::InvalidArg {
                what: format!("property table: {other}"),
            },
        }
    }
}
