//! Unit-aware numeric input.
//!
//! Operating parameters are entered as text such as `850C`, `1123 K`,
//! `3.5 MPa` or `600MW` and converted to the engineering units the pathway
//! functions take. Unlike the SI-canonical types in `hp_core::units`, the
//! canonical units here are the ones the correlations are written in:
//!
//! | quantity    | canonical | default when no unit is given |
//! |-------------|-----------|-------------------------------|
//! | temperature | °C        | °C                            |
//! | pressure    | atm       | atm                           |
//! | power       | MW        | MW                            |
//! | efficiency  | fraction  | fraction (`%` accepted)       |

use std::fmt;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: °C)
    Temperature,
    /// Absolute pressure (canonical: atm)
    Pressure,
    /// Thermal power (canonical: MW)
    Power,
    /// Conversion efficiency (canonical: 0-1)
    Efficiency,
}

impl Quantity {
    /// Canonical unit symbol.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Pressure => "atm",
            Self::Power => "MW",
            Self::Efficiency => "-",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::Power => write!(f, "Thermal Power"),
            Self::Efficiency => write!(f, "Efficiency"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    ParseError(String),
    /// Unit not recognized for this quantity
    UnknownUnit { unit: String, quantity: String },
    /// Unit not allowed for this quantity (e.g., plain "psi" requires "psia")
    AmbiguousUnit { unit: String, reason: String },
    /// Value out of physical range (e.g., below absolute zero)
    OutOfRange { value: f64, reason: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::UnknownUnit { unit, quantity } => {
                write!(f, "Unknown unit '{}' for {}", unit, quantity)
            }
            Self::AmbiguousUnit { unit, reason } => {
                write!(f, "Ambiguous unit '{}': {}", unit, reason)
            }
            Self::OutOfRange { value, reason } => {
                write!(f, "Value {} out of range: {}", value, reason)
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// Stores a value with its original user input and canonical representation.
#[derive(Debug, Clone)]
pub struct UnitValue {
    /// Raw text as the user entered it (e.g., "1550 F", "35 bar")
    pub raw_text: String,
    /// Canonical value (see module table)
    pub canonical: f64,
    /// Associated quantity type
    pub quantity: Quantity,
}

impl UnitValue {
    pub fn from_text(raw_text: impl Into<String>, quantity: Quantity) -> Result<Self, UnitError> {
        let text = raw_text.into();
        let canonical = parse_quantity(&text, quantity)?;
        Ok(Self {
            raw_text: text,
            canonical,
            quantity,
        })
    }

    pub fn value(&self) -> f64 {
        self.canonical
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.canonical, self.quantity.unit())
    }
}

/// Parse a quantity value from user input text into its canonical unit.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Power => parse_power(trimmed),
        Quantity::Efficiency => parse_efficiency(trimmed),
    }
}

/// Parse temperature in various units, return °C.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let celsius = match unit.to_lowercase().as_str() {
        "" | "c" | "°c" | "degc" | "celsius" => value,
        "k" | "kelvin" => value - 273.15,
        "f" | "°f" | "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature.to_string(),
            });
        }
    };

    if celsius <= -273.15 {
        return Err(UnitError::OutOfRange {
            value: celsius,
            reason: "Temperature must be above absolute zero".to_string(),
        });
    }

    Ok(celsius)
}

/// Parse absolute pressure in various units, return atm.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    const PA_PER_ATM: f64 = 101_325.0;
    let (value, unit) = split_value_and_unit(input)?;

    let atm = match unit.to_lowercase().as_str() {
        "" | "atm" => value,
        "pa" | "pascal" => value / PA_PER_ATM,
        "kpa" => value * 1e3 / PA_PER_ATM,
        "mpa" => value * 1e6 / PA_PER_ATM,
        "bar" => value * 1e5 / PA_PER_ATM,
        "psia" => value * 6_894.76 / PA_PER_ATM,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia' (absolute)".to_string(),
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure.to_string(),
            });
        }
    };

    if atm <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: atm,
            reason: "Absolute pressure must be positive".to_string(),
        });
    }

    Ok(atm)
}

/// Parse power, return MW.
fn parse_power(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let mw = match unit.to_lowercase().as_str() {
        "" | "mw" | "mwt" | "mwth" => value,
        "w" => value * 1e-6,
        "kw" | "kwt" | "kwth" => value * 1e-3,
        "gw" | "gwt" | "gwth" => value * 1e3,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Power.to_string(),
            });
        }
    };

    if mw < 0.0 {
        return Err(UnitError::OutOfRange {
            value: mw,
            reason: "Thermal power cannot be negative".to_string(),
        });
    }

    Ok(mw)
}

/// Parse an efficiency as a fraction or percentage, return 0-1.
fn parse_efficiency(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let fraction = match unit.as_str() {
        "" => value,
        "%" => value / 100.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Efficiency.to_string(),
            });
        }
    };

    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(UnitError::OutOfRange {
            value: fraction,
            reason: "Efficiency must be in (0, 1]".to_string(),
        });
    }

    Ok(fraction)
}

/// Split input into numeric value and unit string.
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| {
            !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E'
        })
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    if !value.is_finite() {
        return Err(UnitError::ParseError(format!(
            "Value must be finite in '{}'",
            input
        )));
    }

    Ok((value, unit_part.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_celsius_default() {
        assert_eq!(parse_temperature("850").unwrap(), 850.0);
        assert_eq!(parse_temperature("850 C").unwrap(), 850.0);
        assert_eq!(parse_temperature("850°C").unwrap(), 850.0);
    }

    #[test]
    fn parse_kelvin_and_fahrenheit() {
        assert!((parse_temperature("1123.15K").unwrap() - 850.0).abs() < 1e-9);
        assert!((parse_temperature("212 F").unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn reject_below_absolute_zero() {
        assert!(matches!(
            parse_temperature("-300"),
            Err(UnitError::OutOfRange { .. })
        ));
    }

    #[test]
    fn parse_pressure_units() {
        assert_eq!(parse_pressure("1").unwrap(), 1.0);
        assert_eq!(parse_pressure("101325 Pa").unwrap(), 1.0);
        assert!((parse_pressure("3.5 MPa").unwrap() - 34.542_314).abs() < 1e-5);
        assert!((parse_pressure("1.01325 bar").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reject_plain_psi() {
        assert!(matches!(
            parse_pressure("14.7 psi"),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn reject_zero_pressure() {
        assert!(parse_pressure("0 atm").is_err());
    }

    #[test]
    fn parse_power_units() {
        assert_eq!(parse_power("600").unwrap(), 600.0);
        assert_eq!(parse_power("600 MWt").unwrap(), 600.0);
        assert_eq!(parse_power("1.5GW").unwrap(), 1500.0);
        assert_eq!(parse_power("0").unwrap(), 0.0);
        assert!(parse_power("-1 MW").is_err());
    }

    #[test]
    fn parse_efficiency_fraction_and_percent() {
        assert_eq!(parse_efficiency("0.5").unwrap(), 0.5);
        assert_eq!(parse_efficiency("45%").unwrap(), 0.45);
        assert!(parse_efficiency("0").is_err());
        assert!(parse_efficiency("120%").is_err());
    }

    #[test]
    fn reject_garbage() {
        assert!(matches!(
            parse_quantity("hot", Quantity::Temperature),
            Err(UnitError::ParseError(_))
        ));
        assert!(matches!(
            parse_quantity("5 furlongs", Quantity::Pressure),
            Err(UnitError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn unit_value_keeps_raw_text() {
        let v = UnitValue::from_text("35 bar", Quantity::Pressure).unwrap();
        assert_eq!(v.raw_text, "35 bar");
        assert!((v.value() - 35.0e5 / 101_325.0).abs() < 1e-12);
    }
}
