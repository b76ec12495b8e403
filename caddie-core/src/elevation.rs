//! Elevation lookups for course geometry.
//!
//! The engine never fetches elevations itself. Callers resolve them up front
//! and expose them through [`ElevationProvider`]; a missing sample is
//! reported as `None` and treated as absent data.

use geo::Coord;

/// Resolve ground elevation in feet at a coordinate.
///
/// Coordinates use `x` for longitude and `y` for latitude, in degrees.
/// Closures of the right shape implement the trait directly.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use caddie_core::ElevationProvider;
///
/// let sloped = |at: Coord<f64>| Some(100.0 + at.y * 10.0);
/// assert_eq!(sloped.elevation_ft(Coord { x: 0.0, y: 1.0 }), Some(110.0));
/// ```
pub trait ElevationProvider {
    /// Elevation at `location`, or `None` when no sample is available.
    fn elevation_ft(&self, location: Coord<f64>) -> Option<f64>;

    /// Elevations for several points, in order.
    fn elevations_ft(&self, locations: &[Coord<f64>]) -> Vec<Option<f64>> {
        locations
            .iter()
            .map(|location| self.elevation_ft(*location))
            .collect()
    }
}

impl<F> ElevationProvider for F
where
    F: Fn(Coord<f64>) -> Option<f64>,
{
    fn elevation_ft(&self, location: Coord<f64>) -> Option<f64> {
        self(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::{FlatElevation, GridElevation, MissingElevation};

    #[rstest]
    fn batches_follow_input_order() {
        let provider = |at: Coord<f64>| (at.x > 0.0).then_some(at.x);
        let samples = provider.elevations_ft(&[
            Coord { x: 1.0, y: 0.0 },
            Coord { x: -1.0, y: 0.0 },
            Coord { x: 3.0, y: 0.0 },
        ]);
        assert_eq!(samples, vec![Some(1.0), None, Some(3.0)]);
    }

    #[rstest]
    fn doubles_report_fixed_answers() {
        let origin = Coord { x: 0.0, y: 0.0 };
        assert_eq!(FlatElevation(120.0).elevation_ft(origin), Some(120.0));
        assert_eq!(MissingElevation.elevation_ft(origin), None);
    }

    #[rstest]
    fn grid_rises_with_latitude() {
        let grid = GridElevation::new(
            50.0,
            Coord { x: -2.0, y: 56.0 },
            Coord { x: 0.0, y: 1000.0 },
        );
        let north = grid.elevation_ft(Coord { x: -2.0, y: 56.01 });
        assert!(north.is_some_and(|feet| (feet - 60.0).abs() < 1e-6));
    }
}
