// hp-core/src/units.rs

use uom::si::f64::{
    AvailableEnergy as UomAvailableEnergy, MassRate as UomMassRate, Power as UomPower,
    Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type SpecificEnergy = UomAvailableEnergy;
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

/// Thermal power in megawatts.
#[inline]
pub fn mw(v: f64) -> Power {
    use uom::si::power::megawatt;
    Power::new::<megawatt>(v)
}

/// Temperature in degrees Celsius.
#[inline]
pub fn deg_c(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Absolute pressure in standard atmospheres.
#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}

#[inline]
pub fn kg_per_h(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v / constants::SECONDS_PER_HOUR)
}

#[inline]
pub fn kwh_per_kg(v: f64) -> SpecificEnergy {
    use uom::si::available_energy::joule_per_kilogram;
    SpecificEnergy::new::<joule_per_kilogram>(v * constants::JOULES_PER_KWH)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Back-conversions into the engineering units the pathway functions take.
pub mod engineering {
    use super::*;

    #[inline]
    pub fn as_mw(p: Power) -> f64 {
        use uom::si::power::megawatt;
        p.get::<megawatt>()
    }

    #[inline]
    pub fn as_deg_c(t: Temperature) -> f64 {
        use uom::si::thermodynamic_temperature::degree_celsius;
        t.get::<degree_celsius>()
    }

    #[inline]
    pub fn as_atm(p: Pressure) -> f64 {
        use uom::si::pressure::atmosphere;
        p.get::<atmosphere>()
    }

    #[inline]
    pub fn as_kg_per_h(m: MassRate) -> f64 {
        use uom::si::mass_rate::kilogram_per_second;
        m.get::<kilogram_per_second>() * constants::SECONDS_PER_HOUR
    }

    #[inline]
    pub fn as_kwh_per_kg(e: SpecificEnergy) -> f64 {
        use uom::si::available_energy::joule_per_kilogram;
        e.get::<joule_per_kilogram>() / constants::JOULES_PER_KWH
    }
}

pub mod constants {
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    pub const JOULES_PER_KWH: f64 = 3.6e6;

    /// Molar gas constant [J/(mol·K)], as used by the electrolysis correlations.
    pub const R_MOLAR: f64 = 8.314;

    /// Molar mass of H2 used for kJ/mol → kWh/kg conversions [g/mol].
    pub const H2_MOLAR_MASS: f64 = 2.0 * 1.008;

    /// Divide a molar energy [kJ/mol-H2] by this to get [kWh/kg-H2].
    pub const KJ_PER_MOL_TO_KWH_PER_KG_DIVISOR: f64 = H2_MOLAR_MASS * 3.6;

    /// Offset used by the efficiency and electrolysis correlations (°C → K).
    pub const CELSIUS_OFFSET: f64 = 273.0;
}
