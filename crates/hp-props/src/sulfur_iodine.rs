//! Sulfur-Iodine cycle heat requirement vs. process temperature.
//!
//! Values from Yildiz & Kazimi, "Efficiency of hydrogen production systems
//! using alternative nuclear energy technologies" (2005), given in MJ/kg-H2
//! and stored here in kWh/kg-H2.

use crate::table::PropertyTable;

/// Lowest process temperature the correlation covers [°C].
pub const SI_MIN_PROCESS_TEMP_C: f64 = 750.0;

const fn mj_to_kwh(mj_per_kg: f64) -> f64 {
    mj_per_kg * 1000.0 / 3600.0
}

const PROCESS_TEMP_C: [f64; 6] = [750.0, 800.0, 850.0, 900.0, 950.0, 1000.0];

const SPECIFIC_ENERGY_KWH_PER_KG: [f64; 6] = [
    mj_to_kwh(600.0),
    mj_to_kwh(400.0),
    mj_to_kwh(300.0),
    mj_to_kwh(265.0),
    mj_to_kwh(245.0),
    mj_to_kwh(230.0),
];

pub const SI_SPECIFIC_ENERGY: PropertyTable<'static> =
    PropertyTable::new_unchecked(&PROCESS_TEMP_C, &SPECIFIC_ENERGY_KWH_PER_KG);

/// Thermal energy needed per kg of H2 at process temperature `t_c` [kWh/kg].
///
/// Only meaningful for `t_c >= SI_MIN_PROCESS_TEMP_C`; below that the lookup
/// clamps to the 750 °C value and callers are expected to reject the point.
pub fn specific_energy_at(t_c: f64) -> f64 {
    SI_SPECIFIC_ENERGY.interpolate(t_c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        PropertyTable::try_new(&PROCESS_TEMP_C, &SPECIFIC_ENERGY_KWH_PER_KG).unwrap();
        assert!(SI_SPECIFIC_ENERGY.breakpoints().is_empty());
        assert_eq!(SI_SPECIFIC_ENERGY.x_min(), SI_MIN_PROCESS_TEMP_C);
    }

    #[test]
    fn breakpoints_return_tabulated_values() {
        assert_eq!(specific_energy_at(800.0), 400.0 * 1000.0 / 3600.0);
        assert_eq!(specific_energy_at(750.0), 600.0 * 1000.0 / 3600.0);
        assert_eq!(specific_energy_at(1000.0), 230.0 * 1000.0 / 3600.0);
    }

    #[test]
    fn interpolates_between_750_and_800() {
        // 776 °C is 26/50 of the way from 600 to 400 MJ/kg.
        let expected = (600.0 - 200.0 * 26.0 / 50.0) / 3.6;
        assert!((specific_energy_at(776.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn hotter_process_needs_less_heat() {
        let mut prev = f64::INFINITY;
        for t in (750..=1000).step_by(10) {
            let se = specific_energy_at(t as f64);
            assert!(se <= prev);
            prev = se;
        }
    }
}
