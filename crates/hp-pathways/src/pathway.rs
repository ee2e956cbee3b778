//! Pathway selection and operating points.
//!
//! [`OperatingPoint`] carries the inputs of exactly one pathway, so a caller
//! (CLI, scenario file, sweep) can hold "what to evaluate" as a value and hand
//! it to [`OperatingPoint::evaluate`].

use crate::error::{PathwayError, PathwayResult};
use crate::production::Production;
use crate::units::Quantity;
use crate::{
    hte_boosted_production_rate, hte_production_rate, lte_production_rate,
    si_boosted_production_rate, si_production_rate,
};
use std::fmt;
use std::str::FromStr;

/// Hydrogen production pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pathway {
    Lte,
    Si,
    SiBoosted,
    Hte,
    HteBoosted,
}

impl Pathway {
    pub const ALL: [Pathway; 5] = [
        Pathway::Lte,
        Pathway::Si,
        Pathway::SiBoosted,
        Pathway::Hte,
        Pathway::HteBoosted,
    ];

    /// Short identifier used in files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::Lte => "lte",
            Self::Si => "si",
            Self::SiBoosted => "si_boosted",
            Self::Hte => "hte",
            Self::HteBoosted => "hte_boosted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lte => "Low-temperature electrolysis",
            Self::Si => "Sulfur-Iodine cycle",
            Self::SiBoosted => "Sulfur-Iodine cycle (boosted)",
            Self::Hte => "High-temperature electrolysis",
            Self::HteBoosted => "High-temperature electrolysis (boosted)",
        }
    }

    /// Inputs this pathway takes, in call order.
    pub fn parameters(self) -> &'static [Parameter] {
        use Parameter::*;
        match self {
            Self::Lte => &[ThermalPower, Efficiency],
            Self::Si => &[ThermalPower, OutletTemperature],
            Self::SiBoosted => &[ThermalPower, OutletTemperature, ProcessTemperature],
            Self::Hte => &[ThermalPower, Pressure, OutletTemperature],
            Self::HteBoosted => &[
                ThermalPower,
                Pressure,
                OutletTemperature,
                ElectrolysisTemperature,
            ],
        }
    }

    pub fn has_parameter(self, parameter: Parameter) -> bool {
        self.parameters().contains(&parameter)
    }

    /// Whether results carry an electrical fraction.
    pub fn reports_gamma(self) -> bool {
        matches!(self, Self::SiBoosted | Self::Hte | Self::HteBoosted)
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Pathway {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Pathway::ALL
            .into_iter()
            .find(|p| p.key() == normalized)
            .ok_or_else(|| format!("Unknown pathway '{}'", s))
    }
}

/// A single operating input of a pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Parameter {
    /// Reactor thermal power [MW]
    ThermalPower,
    /// Thermal-to-electric efficiency (LTE only)
    Efficiency,
    /// Reactor outlet temperature [°C]
    OutletTemperature,
    /// SI process temperature [°C]
    ProcessTemperature,
    /// Electrolysis temperature [°C]
    ElectrolysisTemperature,
    /// Electrolyser pressure [atm]
    Pressure,
}

impl Parameter {
    pub fn key(self) -> &'static str {
        match self {
            Self::ThermalPower => "thermal_power",
            Self::Efficiency => "efficiency",
            Self::OutletTemperature => "outlet_temperature",
            Self::ProcessTemperature => "process_temperature",
            Self::ElectrolysisTemperature => "electrolysis_temperature",
            Self::Pressure => "pressure",
        }
    }

    pub fn quantity(self) -> Quantity {
        match self {
            Self::ThermalPower => Quantity::Power,
            Self::Efficiency => Quantity::Efficiency,
            Self::OutletTemperature | Self::ProcessTemperature | Self::ElectrolysisTemperature => {
                Quantity::Temperature
            }
            Self::Pressure => Quantity::Pressure,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Inputs for one pathway evaluation, in the units each calculator takes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "pathway", rename_all = "snake_case"))]
pub enum OperatingPoint {
    Lte {
        thermal_power_mw: f64,
        efficiency: f64,
    },
    Si {
        thermal_power_mw: f64,
        outlet_temp_c: f64,
    },
    SiBoosted {
        thermal_power_mw: f64,
        outlet_temp_c: f64,
        process_temp_c: f64,
    },
    Hte {
        thermal_power_mw: f64,
        pressure_atm: f64,
        outlet_temp_c: f64,
    },
    HteBoosted {
        thermal_power_mw: f64,
        pressure_atm: f64,
        outlet_temp_c: f64,
        electrolysis_temp_c: f64,
    },
}

impl OperatingPoint {
    pub fn pathway(&self) -> Pathway {
        match self {
            Self::Lte { .. } => Pathway::Lte,
            Self::Si { .. } => Pathway::Si,
            Self::SiBoosted { .. } => Pathway::SiBoosted,
            Self::Hte { .. } => Pathway::Hte,
            Self::HteBoosted { .. } => Pathway::HteBoosted,
        }
    }

    /// Run the pathway calculator for this point.
    pub fn evaluate(&self) -> PathwayResult<Production> {
        match *self {
            Self::Lte {
                thermal_power_mw,
                efficiency,
            } => lte_production_rate(thermal_power_mw, efficiency),
            Self::Si {
                thermal_power_mw,
                outlet_temp_c,
            } => si_production_rate(thermal_power_mw, outlet_temp_c),
            Self::SiBoosted {
                thermal_power_mw,
                outlet_temp_c,
                process_temp_c,
            } => si_boosted_production_rate(thermal_power_mw, outlet_temp_c, process_temp_c),
            Self::Hte {
                thermal_power_mw,
                pressure_atm,
                outlet_temp_c,
            } => hte_production_rate(thermal_power_mw, pressure_atm, outlet_temp_c),
            Self::HteBoosted {
                thermal_power_mw,
                pressure_atm,
                outlet_temp_c,
                electrolysis_temp_c,
            } => hte_boosted_production_rate(
                thermal_power_mw,
                pressure_atm,
                outlet_temp_c,
                electrolysis_temp_c,
            ),
        }
    }

    /// Value of `parameter`, or `None` if this pathway does not take it.
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        let mut copy = *self;
        copy.slot_mut(parameter).map(|v| *v)
    }

    /// Copy of this point with `parameter` replaced by `value`.
    pub fn with(&self, parameter: Parameter, value: f64) -> PathwayResult<Self> {
        let mut next = *self;
        match next.slot_mut(parameter) {
            Some(slot) => {
                *slot = value;
                Ok(next)
            }
            None => Err(PathwayError::UnknownParameter {
                pathway: self.pathway().key(),
                parameter: parameter.key(),
            }),
        }
    }

    /// All inputs as `(parameter, value)` pairs, in call order.
    pub fn values(&self) -> Vec<(Parameter, f64)> {
        self.pathway()
            .parameters()
            .iter()
            .filter_map(|&p| self.get(p).map(|v| (p, v)))
            .collect()
    }

    fn slot_mut(&mut self, parameter: Parameter) -> Option<&mut f64> {
        use Parameter as P;
        match self {
            Self::Lte {
                thermal_power_mw,
                efficiency,
            } => match parameter {
                P::ThermalPower => Some(thermal_power_mw),
                P::Efficiency => Some(efficiency),
                _ => None,
            },
            Self::Si {
                thermal_power_mw,
                outlet_temp_c,
            } => match parameter {
                P::ThermalPower => Some(thermal_power_mw),
                P::OutletTemperature => Some(outlet_temp_c),
                _ => None,
            },
            Self::SiBoosted {
                thermal_power_mw,
                outlet_temp_c,
                process_temp_c,
            } => match parameter {
                P::ThermalPower => Some(thermal_power_mw),
                P::OutletTemperature => Some(outlet_temp_c),
                P::ProcessTemperature => Some(process_temp_c),
                _ => None,
            },
            Self::Hte {
                thermal_power_mw,
                pressure_atm,
                outlet_temp_c,
            } => match parameter {
                P::ThermalPower => Some(thermal_power_mw),
                P::Pressure => Some(pressure_atm),
                P::OutletTemperature => Some(outlet_temp_c),
                _ => None,
            },
            Self::HteBoosted {
                thermal_power_mw,
                pressure_atm,
                outlet_temp_c,
                electrolysis_temp_c,
            } => match parameter {
                P::ThermalPower => Some(thermal_power_mw),
                P::Pressure => Some(pressure_atm),
                P::OutletTemperature => Some(outlet_temp_c),
                P::ElectrolysisTemperature => Some(electrolysis_temp_c),
                _ => None,
            },
        }
    }
}

impl fmt::Display for OperatingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pathway())?;
        for (parameter, value) in self.values() {
            match parameter.quantity().unit() {
                "-" => write!(f, " {}={}", parameter, value)?,
                unit => write!(f, " {}={}{}", parameter, value, unit)?,
            }
        }
        Ok(())
    }
}
