//! Thermal-to-electric conversion efficiency.
//!
//! ```text
//! η = 0.68 · (1 − T_cold / T_hot),   T_cold = 27 °C
//! ```
//!
//! Temperatures are converted with a 273 offset to match the correlation.

use crate::error::{PropsError, PropsResult};
use hp_core::constants::CELSIUS_OFFSET;

/// Fraction of the Carnot limit achieved by the power cycle.
pub const CARNOT_FRACTION: f64 = 0.68;

/// Heat rejection temperature [°C].
pub const COLD_SIDE_TEMP_C: f64 = 27.0;

/// Conversion efficiency for a hot-side temperature `t_hot_c` [°C].
///
/// Not bounds-checked: at or below 27 °C the result is zero or negative, and at
/// −273 °C it is not finite. Use [`checked_efficiency`] to reject such inputs.
pub fn efficiency(t_hot_c: f64) -> f64 {
    let t_cold_k = COLD_SIDE_TEMP_C + CELSIUS_OFFSET;
    let t_hot_k = t_hot_c + CELSIUS_OFFSET;
    CARNOT_FRACTION * (1.0 - t_cold_k / t_hot_k)
}

/// [`efficiency`], failing unless the result is finite and positive.
pub fn checked_efficiency(t_hot_c: f64) -> PropsResult<f64> {
    let eta = efficiency(t_hot_c);
    if eta.is_finite() && eta > 0.0 {
        Ok(eta)
    } else {
        Err(PropsError::NonPhysical {
            what: "conversion efficiency",
            value: eta,
        })
    }
}
