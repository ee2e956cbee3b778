//! High-temperature electrolysis with electrical steam boosting.
//!
//! The reactor delivers heat at `Tr = 0.97·Tout` but the electrolyser runs at
//! an explicit `Te`. The extra TΔS needed between `Tr` and `Te` is supplied by
//! electric heaters, so it joins ΔG(Te) on the electrical side of the balance.

use crate::common::{
    ELECTRIC_TO_HEAT_EFFICIENCY, process_temperature, require_efficiency, require_power,
    require_pressure, require_temperature, split_molar_production, vaporization_correction,
};
use crate::error::PathwayResult;
use crate::production::Production;
use hp_props::{efficiency, thermodynamic_requirement};
use tracing::debug;

/// Production rate, specific energy and electrical fraction for boosted HTE.
///
/// - `thermal_power_mw`: reactor thermal power [MW]; zero short-circuits to an
///   idle result
/// - `pressure_atm`: electrolyser pressure [atm]
/// - `outlet_c`: reactor outlet temperature [°C]
/// - `electrolysis_c`: electrolysis temperature [°C]
pub fn hte_boosted_production_rate(
    thermal_power_mw: f64,
    pressure_atm: f64,
    outlet_c: f64,
    electrolysis_c: f64,
) -> PathwayResult<Production> {
    let power = require_power(thermal_power_mw)?;
    if power == 0.0 {
        return Ok(Production::idle());
    }
    let pressure = require_pressure(pressure_atm)?;
    let outlet_c = require_temperature(outlet_c, "reactor outlet temperature")?;
    let electrolysis_c = require_temperature(electrolysis_c, "electrolysis temperature")?;

    let reactor_c = process_temperature(outlet_c);
    let eta = require_efficiency(efficiency(reactor_c))?;

    let at_electrolysis = thermodynamic_requirement(pressure, electrolysis_c);
    let at_reactor = thermodynamic_requirement(pressure, reactor_c);
    let boost = at_electrolysis.tds - at_reactor.tds;

    let electrical = (at_electrolysis.dg + boost / ELECTRIC_TO_HEAT_EFFICIENCY) / eta;
    let thermal = at_reactor.tds + vaporization_correction();
    let production = split_molar_production(power, electrical, thermal)?;

    debug!(
        power,
        pressure,
        reactor_c,
        electrolysis_c,
        eta,
        boost,
        specific_energy = production.specific_energy_kwh_per_kg,
        rate = production.production_rate_kg_per_h,
        "hte-boosted evaluated"
    );
    Ok(production)
}
