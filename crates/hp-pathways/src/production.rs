//! Result of a pathway evaluation.

use hp_core::units::{MassRate, Ratio, SpecificEnergy, kg_per_h, kwh_per_kg, unitless};

/// Hydrogen production at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Production {
    /// H2 production rate [kg/h].
    pub production_rate_kg_per_h: f64,
    /// Reactor heat needed per kg of H2 [kWh(th)/kg-H2].
    pub specific_energy_kwh_per_kg: f64,
    /// Share of `specific_energy_kwh_per_kg` that goes through the power
    /// cycle as electricity. `None` for pathways that do not split the energy
    /// (LTE, plain SI) and for idle HTE plants.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub gamma: Option<f64>,
}

impl Production {
    pub fn new(production_rate_kg_per_h: f64, specific_energy_kwh_per_kg: f64) -> Self {
        Self {
            production_rate_kg_per_h,
            specific_energy_kwh_per_kg,
            gamma: None,
        }
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Zero-power result.
    pub fn idle() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn is_idle(&self) -> bool {
        self.production_rate_kg_per_h == 0.0 && self.specific_energy_kwh_per_kg == 0.0
    }

    pub fn production_rate(&self) -> MassRate {
        kg_per_h(self.production_rate_kg_per_h)
    }

    pub fn specific_energy(&self) -> SpecificEnergy {
        kwh_per_kg(self.specific_energy_kwh_per_kg)
    }

    pub fn electrical_fraction(&self) -> Option<Ratio> {
        self.gamma.map(unitless)
    }

    /// Portion of the specific energy routed through the power cycle [kWh/kg].
    pub fn electrical_share_kwh_per_kg(&self) -> Option<f64> {
        self.gamma.map(|g| g * self.specific_energy_kwh_per_kg)
    }

    /// Portion of the specific energy delivered directly as heat [kWh/kg].
    pub fn thermal_share_kwh_per_kg(&self) -> Option<f64> {
        self.gamma.map(|g| (1.0 - g) * self.specific_energy_kwh_per_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hp_core::units::engineering::{as_kg_per_h, as_kwh_per_kg};

    #[test]
    fn idle_has_no_gamma() {
        let p = Production::idle();
        assert!(p.is_idle());
        assert!(p.gamma.is_none());
        assert!(p.electrical_share_kwh_per_kg().is_none());
    }

    #[test]
    fn shares_add_up() {
        let p = Production::new(9_000.0, 65.0).with_gamma(0.8);
        let e = p.electrical_share_kwh_per_kg().unwrap();
        let t = p.thermal_share_kwh_per_kg().unwrap();
        assert!((e + t - 65.0).abs() < 1e-12);
        assert!((e - 52.0).abs() < 1e-12);
    }

    #[test]
    fn typed_accessors() {
        let p = Production::new(500.0, 120.0);
        assert!((as_kg_per_h(p.production_rate()) - 500.0).abs() < 1e-9);
        assert!((as_kwh_per_kg(p.specific_energy()) - 120.0).abs() < 1e-9);
    }
}
