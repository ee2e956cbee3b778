//! Fuel report errors.

use thiserror::Error;

pub type FuelResult<T> = Result<T, FuelError>;

#[derive(Error, Debug)]
pub enum FuelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `line` is 1-based and counts the header.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Plot error: {0}")]
    Plot(String),
}

impl FuelError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
