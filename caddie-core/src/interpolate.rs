//! Piecewise-linear lookup over sorted breakpoint tables.
//!
//! The dispersion model, the expected-strokes tables, and the handicap
//! multiplier all resolve values the same way: clamp the input, return the
//! endpoint value outside the table, return the exact table value on a
//! breakpoint, and blend linearly between neighbours otherwise. Sharing one
//! implementation keeps those edge cases identical across every table.
//!
//! # Examples
//! ```
//! use caddie_core::interpolate::PiecewiseLinear;
//!
//! static TABLE: [(f64, f64); 3] = [(0.0, 1.0), (10.0, 2.0), (20.0, 4.0)];
//! let curve = PiecewiseLinear::new(&TABLE);
//! assert_eq!(curve.at(5.0), Some(1.5));
//! assert_eq!(curve.at(20.0), Some(4.0));
//! assert_eq!(curve.at(99.0), Some(4.0));
//! ```

/// Values that can be blended linearly between two breakpoints.
pub trait Lerp: Copy {
    /// Blend `self` towards `other` by fraction `t` in `0.0..=1.0`.
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + t * (other - self)
    }
}

/// A table of `(x, value)` breakpoints sorted by ascending `x`.
#[derive(Debug, Clone, Copy)]
pub struct PiecewiseLinear<V: 'static> {
    points: &'static [(f64, V)],
    bounds: Option<(f64, f64)>,
}

impl<V: Lerp> PiecewiseLinear<V> {
    /// Wrap a breakpoint table. Breakpoints must be sorted by ascending `x`.
    pub const fn new(points: &'static [(f64, V)]) -> Self {
        Self {
            points,
            bounds: None,
        }
    }

    /// Clamp inputs to `lower..=upper` before the lookup.
    pub const fn with_clamp(self, lower: f64, upper: f64) -> Self {
        Self {
            points: self.points,
            bounds: Some((lower, upper)),
        }
    }

    /// Resolve the value at `x`.
    ///
    /// Returns `None` only when the table has no breakpoints. A NaN input
    /// resolves to the first breakpoint.
    pub fn at(&self, x: f64) -> Option<V> {
        let (first_x, first_value) = *self.points.first()?;
        let (last_x, last_value) = *self.points.last()?;
        let clamped = match self.bounds {
            Some((lower, upper)) => x.clamp(lower, upper),
            None => x,
        };
        if clamped.is_nan() || clamped <= first_x {
            return Some(first_value);
        }
        if clamped >= last_x {
            return Some(last_value);
        }
        let blended = self.points.windows(2).find_map(|pair| match pair {
            [(x0, v0), (x1, v1)] if clamped <= *x1 => {
                if clamped >= *x1 {
                    return Some(*v1);
                }
                let span = x1 - x0;
                let t = if span > 0.0 { (clamped - x0) / span } else { 0.0 };
                Some(v0.lerp(*v1, t))
            }
            _ => None,
        });
        Some(blended.unwrap_or(last_value))
    }

    /// The breakpoints backing this table.
    pub const fn points(&self) -> &'static [(f64, V)] {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    static TABLE: [(f64, f64); 4] = [(0.0, 1.0), (5.0, 1.06), (10.0, 1.14), (15.0, 1.22)];

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(5.0, 1.06)]
    #[case(10.0, 1.14)]
    #[case(15.0, 1.22)]
    fn breakpoints_resolve_exactly(#[case] x: f64, #[case] expected: f64) {
        assert_eq!(PiecewiseLinear::new(&TABLE).at(x), Some(expected));
    }

    #[rstest]
    #[case(-3.0, 1.0)]
    #[case(40.0, 1.22)]
    fn inputs_outside_the_table_clamp_to_endpoints(#[case] x: f64, #[case] expected: f64) {
        assert_eq!(PiecewiseLinear::new(&TABLE).at(x), Some(expected));
    }

    #[rstest]
    fn midpoints_blend_linearly() {
        let value = PiecewiseLinear::new(&TABLE).at(7.5).unwrap_or_default();
        assert!((value - 1.10).abs() < 1e-9);
    }

    #[rstest]
    fn clamp_bounds_apply_before_lookup() {
        let curve = PiecewiseLinear::new(&TABLE).with_clamp(0.0, 10.0);
        assert_eq!(curve.at(12.0), Some(1.14));
    }

    #[rstest]
    fn nan_resolves_to_first_breakpoint() {
        assert_eq!(PiecewiseLinear::new(&TABLE).at(f64::NAN), Some(1.0));
    }

    #[rstest]
    fn empty_table_has_no_value() {
        static EMPTY: [(f64, f64); 0] = [];
        assert_eq!(PiecewiseLinear::new(&EMPTY).at(1.0), None);
    }
}
