//! Sulfur-Iodine thermochemical cycle driven directly by reactor heat.

use crate::common::{
    process_temperature, production_rate, require_power, require_si_domain,
    require_specific_energy, require_temperature,
};
use crate::error::PathwayResult;
use crate::production::Production;
use hp_props::specific_energy_at;
use tracing::debug;

/// Production rate and specific energy for the SI cycle.
///
/// - `thermal_power_mw`: reactor thermal power [MW]
/// - `outlet_c`: reactor outlet temperature [°C]
///
/// The cycle runs at 97% of the outlet temperature, which must reach 750 °C;
/// below that the call fails with `DomainPreconditionViolation`.
pub fn si_production_rate(thermal_power_mw: f64, outlet_c: f64) -> PathwayResult<Production> {
    let power = require_power(thermal_power_mw)?;
    let outlet_c = require_temperature(outlet_c, "reactor outlet temperature")?;

    let process_c = require_si_domain(process_temperature(outlet_c))?;
    let specific_energy = require_specific_energy(specific_energy_at(process_c))?;
    let rate = production_rate(power, specific_energy);

    debug!(power, outlet_c, process_c, specific_energy, rate, "si evaluated");
    Ok(Production::new(rate, specific_energy))
}
