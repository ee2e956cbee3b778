//! Constants and checks shared by the pathway calculators.

use crate::error::{PathwayError, PathwayResult};
use crate::production::Production;
use hp_core::constants::KJ_PER_MOL_TO_KWH_PER_KG_DIVISOR;
use hp_props::{SI_MIN_PROCESS_TEMP_C, enthalpy_delta};

/// Process (or electrolysis) temperature reached per degree of reactor outlet
/// temperature, after intermediate heat exchange.
pub const PROCESS_TEMP_FACTOR: f64 = 0.97;

/// Efficiency of turning electricity back into process heat.
pub const ELECTRIC_TO_HEAT_EFFICIENCY: f64 = 0.95;

/// Temperature of the feedwater entering the SI boost loop [°C].
pub const SI_FEEDWATER_TEMP_C: f64 = 170.0;

/// Temperature reached at the heat exchanger for a reactor outlet of `outlet_c`.
pub fn process_temperature(outlet_c: f64) -> f64 {
    PROCESS_TEMP_FACTOR * outlet_c
}

/// Heat to vaporize feed water across the 3.5 MPa saturation line [kJ/mol].
pub fn vaporization_correction() -> f64 {
    enthalpy_delta(243.0, 242.0)
}

/// kg/h of H2 from `power_mw` at `specific_energy` kWh/kg.
pub(crate) fn production_rate(power_mw: f64, specific_energy: f64) -> f64 {
    power_mw / specific_energy * 1e3
}

pub(crate) fn require_power(power_mw: f64) -> PathwayResult<f64> {
    if power_mw.is_finite() && power_mw >= 0.0 {
        Ok(power_mw)
    } else {
        Err(PathwayError::invalid(format!(
            "thermal power must be finite and non-negative (got {power_mw} MW)"
        )))
    }
}

pub(crate) fn require_temperature(t_c: f64, what: &str) -> PathwayResult<f64> {
    if t_c.is_finite() {
        Ok(t_c)
    } else {
        Err(PathwayError::invalid(format!("{what} is not finite ({t_c})")))
    }
}

pub(crate) fn require_pressure(pressure_atm: f64) -> PathwayResult<f64> {
    if pressure_atm.is_finite() && pressure_atm > 0.0 {
        Ok(pressure_atm)
    } else {
        Err(PathwayError::invalid(format!(
            "pressure must be finite and positive (got {pressure_atm} atm)"
        )))
    }
}

pub(crate) fn require_efficiency(eta: f64) -> PathwayResult<f64> {
    if eta.is_finite() && eta > 0.0 {
        Ok(eta)
    } else {
        Err(PathwayError::invalid(format!(
            "conversion efficiency must be positive (got {eta})"
        )))
    }
}

pub(crate) fn require_specific_energy(se: f64) -> PathwayResult<f64> {
    if se.is_finite() && se > 0.0 {
        Ok(se)
    } else {
        Err(PathwayError::invalid(format!(
            "specific energy must be finite and positive (got {se} kWh/kg)"
        )))
    }
}

pub(crate) fn require_gamma(gamma: f64) -> PathwayResult<f64> {
    if (0.0..=1.0).contains(&gamma) {
        Ok(gamma)
    } else {
        Err(PathwayError::invalid(format!(
            "electrical fraction {gamma} is outside [0, 1]"
        )))
    }
}

/// SI correlations only cover process temperatures from 750 °C up.
pub(crate) fn require_si_domain(process_c: f64) -> PathwayResult<f64> {
    if process_c >= SI_MIN_PROCESS_TEMP_C {
        Ok(process_c)
    } else {
        Err(PathwayError::DomainPreconditionViolation {
            what: "SI process temperature",
            value: process_c,
            minimum: SI_MIN_PROCESS_TEMP_C,
        })
    }
}

/// Combine an electrical and a thermal requirement (same units) into a result.
///
/// `to_kwh_per_kg` converts the summed requirement into kWh/kg-H2.
pub(crate) fn split_production(
    power_mw: f64,
    electrical: f64,
    thermal: f64,
    to_kwh_per_kg: f64,
) -> PathwayResult<Production> {
    let total = electrical + thermal;
    let gamma = require_gamma(electrical / total)?;
    let specific_energy = require_specific_energy(total / to_kwh_per_kg)?;
    Ok(Production::new(production_rate(power_mw, specific_energy), specific_energy).with_gamma(gamma))
}

/// [`split_production`] for requirements expressed in kJ/mol-H2.
pub(crate) fn split_molar_production(
    power_mw: f64,
    electrical_kj_per_mol: f64,
    thermal_kj_per_mol: f64,
) -> PathwayResult<Production> {
    split_production(
        power_mw,
        electrical_kj_per_mol,
        thermal_kj_per_mol,
        KJ_PER_MOL_TO_KWH_PER_KG_DIVISOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_temperature_is_97_percent() {
        assert!((process_temperature(800.0) - 776.0).abs() < 1e-12);
    }

    #[test]
    fn vaporization_correction_spans_saturation() {
        let v = vaporization_correction();
        assert!(v > 31.5 && v < 31.8, "vaporization correction = {v}");
    }

    #[test]
    fn checks_reject_bad_inputs() {
        assert!(require_power(-1.0).is_err());
        assert!(require_power(f64::NAN).is_err());
        assert!(require_pressure(0.0).is_err());
        assert!(require_efficiency(0.0).is_err());
        assert!(require_specific_energy(f64::INFINITY).is_err());
        assert!(require_gamma(1.2).is_err());
        assert!(require_gamma(f64::NAN).is_err());
        assert!(require_temperature(f64::NAN, "outlet").is_err());
    }

    #[test]
    fn si_domain_boundary_is_inclusive() {
        assert!(require_si_domain(750.0).is_ok());
        assert!(matches!(
            require_si_domain(749.99),
            Err(PathwayError::DomainPreconditionViolation { .. })
        ));
        assert!(require_si_domain(f64::NAN).is_err());
    }

    #[test]
    fn split_production_reports_gamma() {
        let p = split_production(100.0, 30.0, 10.0, 1.0).unwrap();
        assert_eq!(p.gamma, Some(0.75));
        assert_eq!(p.specific_energy_kwh_per_kg, 40.0);
        assert_eq!(p.production_rate_kg_per_h, 2_500.0);
    }

    #[test]
    fn split_production_rejects_negative_thermal_share() {
        assert!(split_production(100.0, 30.0, -10.0, 1.0).is_err());
    }
}
