//! Course intelligence for the caddie engine.
//!
//! Everything here works on data that has already been fetched: green and
//! tee coordinates, mapped bunkers and water, elevation samples behind an
//! [`ElevationProvider`](caddie_core::ElevationProvider), and a raw weather
//! observation. The crate turns them into the [`HoleContext`] and
//! [`WeatherSnapshot`] the advisor consumes. Nothing in it performs I/O.
//!
//! Coordinates follow the `geo` convention: `x` is longitude and `y` is
//! latitude, both in degrees.
//!
//! [`HoleContext`]: caddie_core::HoleContext
//! [`WeatherSnapshot`]: caddie_core::WeatherSnapshot

#![forbid(unsafe_code)]

mod geometry;
mod hazards;
mod hole;
mod slope;
mod weather;

pub use geometry::{LatLng, bearing_deg, classify_side, distance_yards, validated_coord};
pub use hazards::{
    BUNKER_MODERATE_YARDS, CourseFeatures, WATER_RELEVANCE_YARDS, classify_hazards,
};
pub use hole::{HoleLayout, build_hole_context, elevation_change_ft};
pub use slope::{GREEN_SAMPLE_RADIUS_YARDS, green_sample_grid, green_slope, slope_from_samples};
pub use weather::{WeatherObservation, weather_snapshot};

/// Convert a count to `f64`, saturating at `u32::MAX`.
pub(crate) fn count_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}
