//! Sulfur-Iodine cycle with electrical steam boosting.
//!
//! The reactor delivers heat at `Tr = 0.97·Tout`. When the SI process needs a
//! higher temperature `Ts`, the process stream is topped up from `Tr` to `Ts`
//! with electric heaters fed by the plant's own power cycle.

use crate::common::{
    ELECTRIC_TO_HEAT_EFFICIENCY, SI_FEEDWATER_TEMP_C, process_temperature, require_efficiency,
    require_power, require_si_domain, require_temperature, split_production,
};
use crate::error::PathwayResult;
use crate::production::Production;
use hp_core::constants::KJ_PER_MOL_TO_KWH_PER_KG_DIVISOR;
use hp_props::{efficiency, enthalpy_delta, specific_energy_at};
use tracing::debug;

/// Energy split of the boosted SI cycle [kWh/kg-H2].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiBoostBalance {
    /// SI heat requirement at the process temperature.
    pub process_heat: f64,
    /// Heat added by the electric boost.
    pub boost_heat: f64,
    /// Reactor heat consumed by the power cycle to make the boost electricity.
    pub electrical: f64,
    /// Reactor heat delivered directly to the process.
    pub thermal: f64,
}

/// Energy balance for boosting from `0.97·outlet_c` to `process_c`.
pub fn si_boost_balance(eta: f64, outlet_c: f64, process_c: f64) -> SiBoostBalance {
    let reactor_c = process_temperature(outlet_c);

    let process_heat = specific_energy_at(process_c);
    // Process-stream flow per unit of SI heat, referenced to the feedwater state.
    let stream = specific_energy_at(reactor_c) / enthalpy_delta(reactor_c, SI_FEEDWATER_TEMP_C);
    let boost_heat =
        stream * enthalpy_delta(process_c, reactor_c) / KJ_PER_MOL_TO_KWH_PER_KG_DIVISOR;

    SiBoostBalance {
        process_heat,
        boost_heat,
        electrical: boost_heat / (eta * ELECTRIC_TO_HEAT_EFFICIENCY),
        thermal: process_heat - boost_heat,
    }
}

/// Production rate, specific energy and electrical fraction for boosted SI.
///
/// - `thermal_power_mw`: reactor thermal power [MW]
/// - `outlet_c`: reactor outlet temperature [°C]
/// - `process_c`: SI process temperature [°C], must be at least 750 °C
pub fn si_boosted_production_rate(
    thermal_power_mw: f64,
    outlet_c: f64,
    process_c: f64,
) -> PathwayResult<Production> {
    let power = require_power(thermal_power_mw)?;
    let outlet_c = require_temperature(outlet_c, "reactor outlet temperature")?;
    let process_c = require_temperature(process_c, "SI process temperature")?;
    let process_c = require_si_domain(process_c)?;

    let eta = require_efficiency(efficiency(outlet_c))?;
    let balance = si_boost_balance(eta, outlet_c, process_c);
    let production = split_production(power, balance.electrical, balance.thermal, 1.0)?;

    debug!(
        power,
        outlet_c,
        process_c,
        eta,
        boost = balance.boost_heat,
        specific_energy = production.specific_energy_kwh_per_kg,
        rate = production.production_rate_kg_per_h,
        "si-boosted evaluated"
    );
    Ok(production)
}
