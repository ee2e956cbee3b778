//! High-temperature (steam) electrolysis.
//!
//! Electrolysis runs at `Te = 0.97·Tout`. ΔG is supplied as electricity made
//! by the plant's power cycle; TΔS and the feedwater vaporization heat come
//! straight from the reactor.

use crate::common::{
    process_temperature, require_efficiency, require_power, require_pressure,
    require_temperature, split_molar_production, vaporization_correction,
};
use crate::error::PathwayResult;
use crate::production::Production;
use hp_props::{efficiency, thermodynamic_requirement};
use tracing::debug;

/// Production rate, specific energy and electrical fraction for HTE.
///
/// - `thermal_power_mw`: reactor thermal power [MW]; zero short-circuits to an
///   idle result without looking at the other inputs
/// - `pressure_atm`: electrolyser pressure [atm]
/// - `outlet_c`: reactor outlet temperature [°C]
pub fn hte_production_rate(
    thermal_power_mw: f64,
    pressure_atm: f64,
    outlet_c: f64,
) -> PathwayResult<Production> {
    let power = require_power(thermal_power_mw)?;
    if power == 0.0 {
        return Ok(Production::idle());
    }
    let pressure = require_pressure(pressure_atm)?;
    let outlet_c = require_temperature(outlet_c, "reactor outlet temperature")?;

    let electrolysis_c = process_temperature(outlet_c);
    let eta = require_efficiency(efficiency(electrolysis_c))?;
    let req = thermodynamic_requirement(pressure, electrolysis_c);

    let electrical = req.dg / eta;
    let thermal = req.tds + vaporization_correction();
    let production = split_molar_production(power, electrical, thermal)?;

    debug!(
        power,
        pressure,
        electrolysis_c,
        eta,
        dg = req.dg,
        tds = req.tds,
        specific_energy = production.specific_energy_kwh_per_kg,
        rate = production.production_rate_kg_per_h,
        "hte evaluated"
    );
    Ok(production)
}
