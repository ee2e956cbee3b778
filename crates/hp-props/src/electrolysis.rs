//! Thermodynamic requirement of steam electrolysis, H2O(g) → H2 + ½O2.
//!
//! ΔG (electrical work) and TΔS (heat) are tabulated at 100 °C and 1200 °C at
//! 1 atm and interpolated linearly in between; outside that span the endpoint
//! values are used. The heat term carries a pressure correction
//! `−R·T·ln(p)`, with `p` in atm.

use crate::table::PropertyTable;
use hp_core::constants::{CELSIUS_OFFSET, R_MOLAR};

const TEMP_C: [f64; 2] = [100.0, 1200.0];
const DG_KJ_PER_MOL: [f64; 2] = [225.1, 166.0];
const TDS_KJ_PER_MOL: [f64; 2] = [17.5, 83.5];

pub const GIBBS_FREE_ENERGY: PropertyTable<'static> =
    PropertyTable::new_unchecked(&TEMP_C, &DG_KJ_PER_MOL);

pub const ENTROPY_TERM: PropertyTable<'static> =
    PropertyTable::new_unchecked(&TEMP_C, &TDS_KJ_PER_MOL);

/// Energy split for splitting one mole of steam [kJ/mol].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermodynamicRequirement {
    /// Gibbs free energy, supplied electrically.
    pub dg: f64,
    /// T·ΔS, may be supplied as heat.
    pub tds: f64,
}

impl ThermodynamicRequirement {
    /// ΔH = ΔG + TΔS
    pub fn enthalpy(&self) -> f64 {
        self.dg + self.tds
    }
}

/// ΔG and TΔS at `t_c` [°C] and `pressure_atm` [atm].
///
/// `pressure_atm` must be positive; this is not checked here.
pub fn thermodynamic_requirement(pressure_atm: f64, t_c: f64) -> ThermodynamicRequirement {
    let dg = GIBBS_FREE_ENERGY.interpolate(t_c);
    let tds = ENTROPY_TERM.interpolate(t_c)
        - R_MOLAR * (t_c + CELSIUS_OFFSET) * pressure_atm.ln() / 1000.0;
    ThermodynamicRequirement { dg, tds }
}
