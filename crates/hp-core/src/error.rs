use thiserror::Error;

pub type HpResult<T> = Result<T, HpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HpError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Out of domain: {what} = {value} (minimum {minimum})")]
    OutOfDomain {
        what: &'static str,
        value: f64,
        minimum: f64,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
