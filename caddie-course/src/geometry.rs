//! Distances and bearings between course coordinates.

use caddie_core::HazardSide;
use geo::Coord;
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_M: f64 = 6_371_000.0;
const YARDS_PER_METRE: f64 = 1.093_61;

/// Build a coordinate from longitude and latitude, rejecting values that are
/// not finite or fall outside the valid ranges.
///
/// # Examples
/// ```
/// use caddie_course::validated_coord;
///
/// assert!(validated_coord(-2.82, 56.34).is_some());
/// assert!(validated_coord(-2.82, 91.0).is_none());
/// ```
#[must_use]
pub fn validated_coord(lon: f64, lat: f64) -> Option<Coord<f64>> {
    (lon.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lon)
        && (-90.0..=90.0).contains(&lat))
    .then_some(Coord { x: lon, y: lat })
}

/// A position as mapping services report it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    #[serde(alias = "lon")]
    pub lng: f64,
}

impl LatLng {
    /// The position as a `geo` coordinate, when it is valid.
    #[must_use]
    pub fn to_coord(self) -> Option<Coord<f64>> {
        validated_coord(self.lng, self.lat)
    }
}

/// Great-circle distance between two coordinates, in yards.
#[expect(clippy::float_arithmetic, reason = "haversine formula")]
#[must_use]
pub fn distance_yards(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat_from = from.y.to_radians();
    let lat_to = to.y.to_radians();
    let half_dlat = (to.y - from.y).to_radians() / 2.0;
    let half_dlon = (to.x - from.x).to_radians() / 2.0;

    let a = half_dlat.sin().powi(2) + lat_from.cos() * lat_to.cos() * half_dlon.sin().powi(2);
    let central_angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * central_angle * YARDS_PER_METRE
}

/// Flat-map bearing from `from` to `to`, in degrees clockwise from north.
///
/// Longitude and latitude deltas are compared directly, which is accurate
/// enough over the length of a golf hole.
#[expect(clippy::float_arithmetic, reason = "coordinate deltas")]
#[must_use]
pub fn bearing_deg(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let delta = to - from;
    delta.x.atan2(delta.y).to_degrees().rem_euclid(360.0)
}

/// Which side of the green `feature` lies on, looking down the hole from the
/// tee.
///
/// The feature's bearing from the green is compared with the tee-to-green
/// bearing: within 45° of straight on is `back`, the next quarter clockwise
/// is `right`, the quarter behind the green toward the tee is `front`, and
/// the rest is `left`. Without a tee there is no axis and the answer is
/// `center`.
#[expect(clippy::float_arithmetic, reason = "bearing difference")]
#[must_use]
pub fn classify_side(feature: Coord<f64>, green: Coord<f64>, tee: Option<Coord<f64>>) -> HazardSide {
    let Some(tee) = tee else {
        return HazardSide::Center;
    };
    let offset = (bearing_deg(green, feature) - bearing_deg(tee, green)).rem_euclid(360.0);
    if !(45.0..=315.0).contains(&offset) {
        HazardSide::Back
    } else if offset < 135.0 {
        HazardSide::Right
    } else if offset < 225.0 {
        HazardSide::Front
    } else {
        HazardSide::Left
    }
}
