//! Assemble a [`HoleContext`] from mapped geometry.

use caddie_core::{ElevationProvider, HoleContext, round_to};
use geo::Coord;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{CourseFeatures, LatLng, classify_hazards, green_slope};

/// A hole as the course map describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleLayout {
    /// Hole number on the card.
    #[serde(default = "first_hole", alias = "holeNumber")]
    pub hole_number: u8,
    /// Par.
    #[serde(default = "default_par")]
    pub par: u8,
    /// Card yardage.
    #[serde(default = "default_yards")]
    pub yards: u32,
    /// Stroke index.
    #[serde(default = "default_handicap_rating", alias = "handicapRating")]
    pub handicap_rating: u8,
    /// Centre of the green.
    #[serde(default)]
    pub green: Option<LatLng>,
    /// Tee position, when mapped.
    #[serde(default)]
    pub tee: Option<LatLng>,
}

impl HoleLayout {
    /// A layout with no mapped positions.
    #[must_use]
    pub const fn new(hole_number: u8, par: u8, yards: u32) -> Self {
        Self {
            hole_number,
            par,
            yards,
            handicap_rating: default_handicap_rating(),
            green: None,
            tee: None,
        }
    }

    /// Set the green centre.
    #[must_use]
    pub const fn with_green(mut self, green: LatLng) -> Self {
        self.green = Some(green);
        self
    }

    /// Set the tee position.
    #[must_use]
    pub const fn with_tee(mut self, tee: LatLng) -> Self {
        self.tee = Some(tee);
        self
    }
}

const fn first_hole() -> u8 {
    1
}

const fn default_par() -> u8 {
    4
}

const fn default_yards() -> u32 {
    400
}

const fn default_handicap_rating() -> u8 {
    9
}

/// Build the context the advisor needs for one hole.
///
/// Elevation change, green slope, and hazards all hang off the green
/// position; without a valid one the hole carries only its card data.
///
/// # Examples
/// ```
/// use caddie_core::test_support::FlatElevation;
/// use caddie_course::{CourseFeatures, HoleLayout, LatLng, build_hole_context};
///
/// let layout = HoleLayout::new(3, 3, 165)
///     .with_green(LatLng { lat: 56.34, lng: -2.80 })
///     .with_tee(LatLng { lat: 56.3387, lng: -2.80 });
/// let hole = build_hole_context(&layout, &CourseFeatures::default(), &FlatElevation(20.0));
/// assert_eq!(hole.elevation_change_ft, 0.0);
/// assert!(hole.green_slope.is_some());
/// assert!(hole.hazards.is_empty());
/// ```
#[must_use]
pub fn build_hole_context<P>(
    layout: &HoleLayout,
    features: &CourseFeatures,
    elevations: &P,
) -> HoleContext
where
    P: ElevationProvider + ?Sized,
{
    let mut hole = HoleContext::new(layout.hole_number, layout.par, layout.yards)
        .with_handicap_rating(layout.handicap_rating);
    let Some(green) = layout.green.and_then(LatLng::to_coord) else {
        if layout.green.is_some() {
            warn!("hole {}: invalid green position", layout.hole_number);
        }
        return hole;
    };
    let tee = layout.tee.and_then(LatLng::to_coord);

    hole.elevation_change_ft = elevation_change_ft(green, tee, elevations);
    hole.green_slope = green_slope(green, elevations);
    hole.hazards = classify_hazards(features, green, tee);
    debug!(
        "hole {}: {} hazards, elevation change {} ft",
        hole.hole_number,
        hole.hazards.len(),
        hole.elevation_change_ft
    );
    hole
}

/// Green elevation minus tee elevation in feet, rounded to one decimal.
///
/// Positive is uphill. Zero when the tee is unknown or either sample is
/// missing.
#[expect(clippy::float_arithmetic, reason = "elevation difference")]
#[must_use]
pub fn elevation_change_ft<P>(green: Coord<f64>, tee: Option<Coord<f64>>, elevations: &P) -> f64
where
    P: ElevationProvider + ?Sized,
{
    let Some(tee) = tee else {
        return 0.0;
    };
    match elevations.elevations_ft(&[tee, green]).as_slice() {
        [Some(tee_ft), Some(green_ft)] if tee_ft.is_finite() && green_ft.is_finite() => {
            round_to(green_ft - tee_ft, 1)
        }
        _ => 0.0,
    }
}
