//! Low-temperature electrolysis.
//!
//! All energy enters as electricity, so the reactor heat per kg of H2 is the
//! electrical requirement divided by the conversion efficiency.

use crate::common::{production_rate, require_efficiency, require_power};
use crate::error::PathwayResult;
use crate::production::Production;
use tracing::debug;

/// Electricity consumed per kg of H2 [kWh(e)/kg-H2].
pub const LTE_ELECTRICAL_REQUIREMENT_KWH_PER_KG: f64 = 60.0;

/// Production rate and specific energy for LTE.
///
/// - `thermal_power_mw`: reactor thermal power [MW]
/// - `eta`: thermal-to-electric conversion efficiency, must be > 0
pub fn lte_production_rate(thermal_power_mw: f64, eta: f64) -> PathwayResult<Production> {
    let power = require_power(thermal_power_mw)?;
    let eta = require_efficiency(eta)?;

    let specific_energy = LTE_ELECTRICAL_REQUIREMENT_KWH_PER_KG / eta;
    let rate = production_rate(power, specific_energy);

    debug!(power, eta, specific_energy, rate, "lte evaluated");
    Ok(Production::new(rate, specific_energy))
}
