//! hp-core: stable foundation for h2prod.
//!
//! Contains:
//! - units (uom SI types + constructors for the engineering units used by the pathways)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HpError, HpResult};
pub use numeric::*;
pub use units::*;
