//! Piecewise-linear property tables.
//!
//! A table is an ordered list of `(x, y)` rows with non-decreasing `x`. Lookups
//! outside `[x_min, x_max]` clamp to the boundary row; nothing is extrapolated.
//!
//! # Break-points
//!
//! An `x` value may appear on two consecutive rows. That marks a discontinuity
//! (for water, the liquid/vapour transition): the table is treated as two
//! independent segments joined at that `x`. Queries strictly left of the
//! break-point interpolate on the left segment, queries strictly right of it on
//! the right segment, and a query exactly on it returns the right-hand row.
//! [`PropertyTable::limits_at`] exposes both one-sided values.

use crate::error::{PropsError, PropsResult};

/// One-sided values of a table at a given `x`.
///
/// `left == right` everywhere except at a break-point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub left: f64,
    pub right: f64,
}

impl Limits {
    /// Size of the jump across `x` (zero away from break-points).
    pub fn jump(&self) -> f64 {
        self.right - self.left
    }
}

/// Borrowed, immutable lookup table.
#[derive(Debug, Clone, Copy)]
pub struct PropertyTable<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> PropertyTable<'a> {
    /// Build a table from trusted constant data.
    ///
    /// Used for the built-in tables, which are checked by unit tests. Caller
    /// supplied data should go through [`PropertyTable::try_new`].
    pub const fn new_unchecked(x: &'a [f64], y: &'a [f64]) -> Self {
        Self { x, y }
    }

    /// Build a table, checking shape, finiteness and ordering.
    pub fn try_new(x: &'a [f64], y: &'a [f64]) -> PropsResult<Self> {
        if x.len() != y.len() {
            return Err(PropsError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(PropsError::TooShort { len: x.len() });
        }
        if let Some(index) = x
            .iter()
            .zip(y)
            .position(|(a, b)| !a.is_finite() || !b.is_finite())
        {
            return Err(PropsError::NonFinite { index });
        }
        for i in 1..x.len() {
            if x[i] < x[i - 1] {
                return Err(PropsError::NotMonotonic { index: i });
            }
            if i >= 2 && x[i] == x[i - 1] && x[i] == x[i - 2] {
                return Err(PropsError::TooManyDuplicates { x: x[i] });
            }
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x_min(&self) -> f64 {
        self.x[0]
    }

    pub fn x_max(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    pub fn xs(&self) -> &'a [f64] {
        self.x
    }

    pub fn ys(&self) -> &'a [f64] {
        self.y
    }

    /// x values that appear on two consecutive rows.
    pub fn breakpoints(&self) -> Vec<f64> {
        self.x
            .windows(2)
            .filter(|w| w[0] == w[1])
            .map(|w| w[0])
            .collect()
    }

    /// Linear interpolation with boundary clamping.
    ///
    /// Returns the tabulated value exactly when `x` hits a row. NaN in, NaN out.
    pub fn interpolate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let n = self.x.len();
        if x < self.x[0] {
            return self.y[0];
        }
        if x >= self.x[n - 1] {
            return self.y[n - 1];
        }

        // Last row with x_j <= x. Always has a strictly larger neighbour here,
        // so duplicated x values never end up as a zero-width segment.
        let j = self.x.partition_point(|&v| v <= x) - 1;
        let (x0, x1) = (self.x[j], self.x[j + 1]);
        let (y0, y1) = (self.y[j], self.y[j + 1]);
        y0 + (x - x0) * (y1 - y0) / (x1 - x0)
    }

    /// Left and right limits of the table at `x`.
    pub fn limits_at(&self, x: f64) -> Limits {
        let right = self.interpolate(x);
        let i = self.x.partition_point(|&v| v < x);
        let left = if i < self.x.len() && self.x[i] == x {
            self.y[i]
        } else {
            right
        };
        Limits { left, right }
    }
}

/// Free-function form of [`PropertyTable::interpolate`].
pub fn interpolate(table: &PropertyTable<'_>, x: f64) -> f64 {
    table.interpolate(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: [f64; 5] = [0.0, 1.0, 2.0, 2.0, 3.0];
    const Y: [f64; 5] = [0.0, 10.0, 20.0, 50.0, 60.0];

    fn table() -> PropertyTable<'static> {
        PropertyTable::try_new(&X, &Y).unwrap()
    }

    #[test]
    fn exact_rows_return_tabulated_values() {
        let t = table();
        assert_eq!(t.interpolate(0.0), 0.0);
        assert_eq!(t.interpolate(1.0), 10.0);
        assert_eq!(t.interpolate(3.0), 60.0);
    }

    #[test]
    fn interior_points_are_linear() {
        let t = table();
        assert!((t.interpolate(0.5) - 5.0).abs() < 1e-12);
        assert!((t.interpolate(2.5) - 55.0).abs() < 1e-12);
    }

    #[test]
    fn outside_domain_clamps() {
        let t = table();
        assert_eq!(t.interpolate(-5.0), 0.0);
        assert_eq!(t.interpolate(100.0), 60.0);
    }

    #[test]
    fn breakpoint_uses_segment_on_each_side() {
        let t = table();
        // Just below the break follows the left segment (10 → 20).
        assert!((t.interpolate(1.999) - 19.99).abs() < 1e-9);
        // Just above follows the right segment (50 → 60).
        assert!((t.interpolate(2.001) - 50.01).abs() < 1e-9);
        // On the break the right-hand row wins.
        assert_eq!(t.interpolate(2.0), 50.0);
    }

    #[test]
    fn limits_expose_the_jump() {
        let t = table();
        let lim = t.limits_at(2.0);
        assert_eq!(lim.left, 20.0);
        assert_eq!(lim.right, 50.0);
        assert_eq!(lim.jump(), 30.0);

        let smooth = t.limits_at(0.5);
        assert_eq!(smooth.left, smooth.right);
    }

    #[test]
    fn breakpoints_are_listed() {
        assert_eq!(table().breakpoints(), vec![2.0]);
    }

    #[test]
    fn nan_propagates() {
        assert!(table().interpolate(f64::NAN).is_nan());
    }

    #[test]
    fn rejects_bad_tables() {
        assert_eq!(
            PropertyTable::try_new(&[0.0, 1.0], &[0.0]).unwrap_err(),
            PropsError::LengthMismatch { x_len: 2, y_len: 1 }
        );
        assert_eq!(
            PropertyTable::try_new(&[0.0], &[0.0]).unwrap_err(),
            PropsError::TooShort { len: 1 }
        );
        assert_eq!(
            PropertyTable::try_new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err(),
            PropsError::NotMonotonic { index: 2 }
        );
        assert_eq!(
            PropertyTable::try_new(&[0.0, 1.0, 1.0, 1.0], &[0.0; 4]).unwrap_err(),
            PropsError::TooManyDuplicates { x: 1.0 }
        );
        assert_eq!(
            PropertyTable::try_new(&[0.0, f64::INFINITY], &[0.0, 1.0]).unwrap_err(),
            PropsError::NonFinite { index: 1 }
        );
    }
}
