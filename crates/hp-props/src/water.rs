//! Water enthalpy at 3.5 MPa.
//!
//! Molar enthalpy [kJ/mol] vs. temperature [°C]. 242.56 °C is the saturation
//! temperature at this pressure and is listed twice: saturated liquid first,
//! saturated vapour second.

use crate::table::{Limits, PropertyTable};

/// Saturation temperature at 3.5 MPa [°C].
pub const SATURATION_TEMP_C: f64 = 242.56;

const TEMPERATURE_C: [f64; 42] = [
    25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 242.56, 242.56, 250.0, 275.0,
    300.0, 325.0, 350.0, 375.0, 400.0, 425.0, 450.0, 475.0, 500.0, 525.0, 550.0, 575.0, 600.0,
    625.0, 650.0, 675.0, 700.0, 725.0, 750.0, 775.0, 800.0, 825.0, 850.0, 875.0, 900.0, 925.0,
    950.0, 975.0, 1000.0,
];

const ENTHALPY_KJ_PER_MOL: [f64; 42] = [
    1.9468, 3.8255, 5.7076, 7.5974, 9.5, 11.423, 13.374, 15.368, 17.421, 18.912, 50.49, 50.977,
    52.4, 53.657, 54.823, 55.935, 57.012, 58.066, 59.106, 60.136, 61.16, 62.182, 63.203, 64.225,
    65.249, 66.276, 67.306, 68.341, 69.381, 70.426, 71.477, 72.534, 73.597, 74.666, 75.742,
    76.825, 77.914, 79.009, 80.112, 81.221, 82.337, 83.459,
];

pub const WATER_ENTHALPY_3_5MPA: PropertyTable<'static> =
    PropertyTable::new_unchecked(&TEMPERATURE_C, &ENTHALPY_KJ_PER_MOL);

/// H(t) [kJ/mol]. On the saturation line this is the vapour value.
pub fn enthalpy_at(t_c: f64) -> f64 {
    WATER_ENTHALPY_3_5MPA.interpolate(t_c)
}

/// H(t_out) − H(t_in) [kJ/mol].
pub fn enthalpy_delta(t_out_c: f64, t_in_c: f64) -> f64 {
    enthalpy_at(t_out_c) - enthalpy_at(t_in_c)
}

/// Liquid and vapour enthalpy at saturation [kJ/mol].
pub fn saturation_limits() -> Limits {
    WATER_ENTHALPY_3_5MPA.limits_at(SATURATION_TEMP_C)
}
