//! hp-props: property tables and conversion efficiency for h2prod.
//!
//! Provides:
//! - Piecewise-linear tables with boundary clamping and explicit phase-change break-points
//! - Water enthalpy at 3.5 MPa (`enthalpy_delta`)
//! - Sulfur-Iodine cycle specific energy vs. process temperature (`specific_energy_at`)
//! - Electrolysis Gibbs free energy / entropy term endpoints (`thermodynamic_requirement`)
//! - Thermal-to-electric conversion efficiency (`efficiency`)
//!
//! All tables are immutable `'static` constants; nothing here holds state.
//!
//! # Example
//!
//! ```
//! use hp_props::{efficiency, enthalpy_delta, specific_energy_at};
//!
//! let eta = efficiency(850.0);
//! assert!(eta > 0.0 && eta < 0.68);
//!
//! // Vaporization step across the 242.56 °C break-point
//! let dh = enthalpy_delta(243.0, 242.0);
//! assert!(dh > 30.0);
//!
//! let se = specific_energy_at(800.0);
//! assert!((se - 400.0 * 1000.0 / 3600.0).abs() < 1e-9);
//! ```

pub mod efficiency;
pub mod electrolysis;
pub mod error;
pub mod sulfur_iodine;
pub mod table;
pub mod water;

// Re-exports for ergonomics
pub use efficiency::{checked_efficiency, efficiency};
pub use electrolysis::{
    ENTROPY_TERM, GIBBS_FREE_ENERGY, ThermodynamicRequirement, thermodynamic_requirement,
};
pub use error::{PropsError, PropsResult};
pub use sulfur_iodine::{SI_MIN_PROCESS_TEMP_C, SI_SPECIFIC_ENERGY, specific_energy_at};
pub use table::{Limits, PropertyTable, interpolate};
pub use water::{
    SATURATION_TEMP_C, WATER_ENTHALPY_3_5MPA, enthalpy_at, enthalpy_delta, saturation_limits,
};
