//! hp-pathways: hydrogen production-rate calculators for h2prod.
//!
//! Provides:
//! - Low-temperature electrolysis (`lte_production_rate`)
//! - Sulfur-Iodine cycle, plain and electrically boosted
//! - High-temperature steam electrolysis, plain and electrically boosted
//! - `OperatingPoint` / `Pathway` dispatch over the five calculators
//! - Unit-aware parsing of operating inputs
//! - Parallel parameter sweeps that record per-point failures
//!
//! Every calculator takes reactor thermal power in MW and temperatures in °C
//! and returns a [`Production`]: kg/h of H2, reactor heat per kg of H2, and
//! for the split pathways the electrical fraction γ.
//!
//! # Example
//!
//! ```
//! use hp_pathways::{OperatingPoint, hte_production_rate, si_production_rate};
//!
//! let si = si_production_rate(600.0, 900.0).unwrap();
//! assert!(si.gamma.is_none());
//!
//! let hte = hte_production_rate(600.0, 1.0, 850.0).unwrap();
//! let gamma = hte.gamma.unwrap();
//! assert!((0.0..=1.0).contains(&gamma));
//!
//! let point = OperatingPoint::Lte { thermal_power_mw: 60.0, efficiency: 0.5 };
//! assert_eq!(point.evaluate().unwrap().production_rate_kg_per_h, 500.0);
//! ```

pub mod common;
pub mod error;
pub mod hte;
pub mod hte_boosted;
pub mod lte;
pub mod pathway;
pub mod production;
pub mod si;
pub mod si_boosted;
pub mod sweep_executor;
pub mod sweeps;
pub mod units;

// Re-exports for ergonomics
pub use common::{
    ELECTRIC_TO_HEAT_EFFICIENCY, PROCESS_TEMP_FACTOR, process_temperature,
    vaporization_correction,
};
pub use error::{PathwayError, PathwayResult};
pub use hte::hte_production_rate;
pub use hte_boosted::hte_boosted_production_rate;
pub use lte::{LTE_ELECTRICAL_REQUIREMENT_KWH_PER_KG, lte_production_rate};
pub use pathway::{OperatingPoint, Parameter, Pathway};
pub use production::Production;
pub use si::si_production_rate;
pub use si_boosted::{SiBoostBalance, si_boost_balance, si_boosted_production_rate};
pub use sweep_executor::{SweepError, SweepPoint, SweepResult, execute_sweep};
pub use sweeps::{SweepDefinition, SweepType};
pub use units::{Quantity, UnitError, UnitValue, parse_quantity};
