//! Mapped course features turned into hazards.

use caddie_core::{Hazard, HazardKind, Severity};
use geo::Coord;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{LatLng, classify_side, distance_yards};

/// Bunkers closer than this to the green are `moderate` rather than `mild`.
pub const BUNKER_MODERATE_YARDS: f64 = 10.0;

/// Water farther than this from the green is ignored.
pub const WATER_RELEVANCE_YARDS: f64 = 100.0;

/// Mapped features near a hole, each reduced to its centre point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseFeatures {
    /// Bunker centres.
    pub bunkers: Vec<LatLng>,
    /// Water body centres.
    pub water: Vec<LatLng>,
}

impl CourseFeatures {
    /// Whether no features were mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bunkers.is_empty() && self.water.is_empty()
    }
}

/// Classify mapped features around `green` into hazards.
///
/// Every bunker becomes a hazard; water only counts within
/// [`WATER_RELEVANCE_YARDS`] and is always a `death` hazard. Distances are
/// rounded to whole yards. Features with invalid coordinates are skipped.
///
/// # Examples
/// ```
/// use caddie_core::{HazardKind, HazardSide, Severity};
/// use caddie_course::{CourseFeatures, LatLng, classify_hazards};
/// use geo::Coord;
///
/// let green = Coord { x: -2.80, y: 56.34 };
/// let features = CourseFeatures {
///     bunkers: vec![LatLng { lat: 56.34, lng: -2.80005 }],
///     water: Vec::new(),
/// };
/// let hazards = classify_hazards(&features, green, None);
/// assert_eq!(hazards.len(), 1);
/// assert_eq!(hazards[0].kind(), HazardKind::Bunker);
/// assert_eq!(hazards[0].side(), HazardSide::Center);
/// assert_eq!(hazards[0].severity(), Severity::Moderate);
/// ```
#[must_use]
pub fn classify_hazards(
    features: &CourseFeatures,
    green: Coord<f64>,
    tee: Option<Coord<f64>>,
) -> Vec<Hazard> {
    let bunkers = located(&features.bunkers, "bunker").map(|centre| {
        let yards = distance_yards(centre, green);
        let severity = if yards < BUNKER_MODERATE_YARDS {
            Severity::Moderate
        } else {
            Severity::Mild
        };
        (HazardKind::Bunker, centre, yards, severity)
    });
    let water = located(&features.water, "water")
        .map(|centre| (HazardKind::Water, centre, distance_yards(centre, green), Severity::Death))
        .filter(|&(_, _, yards, _)| yards <= WATER_RELEVANCE_YARDS);

    bunkers
        .chain(water)
        .map(|(kind, centre, yards, severity)| {
            Hazard::new(
                kind,
                classify_side(centre, green, tee),
                yards.round_ties_even(),
                severity,
            )
        })
        .collect()
}

fn located<'a>(
    points: &'a [LatLng],
    label: &'static str,
) -> impl Iterator<Item = Coord<f64>> + 'a {
    points.iter().filter_map(move |point| {
        let coord = point.to_coord();
        if coord.is_none() {
            warn!("skipping {label} with invalid position {point:?}");
        }
        coord
    })
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast on unexpected values")]
mod tests {
    use super::*;
    use caddie_core::HazardSide;
    use rstest::{fixture, rstest};

    const GREEN: Coord<f64> = Coord { x: -2.80, y: 56.34 };

    #[fixture]
    fn tee() -> Option<Coord<f64>> {
        Some(Coord { x: -2.80, y: 56.336 })
    }

    fn at(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }

    #[rstest]
    #[case(at(56.34, -2.7999), Severity::Moderate)]
    #[case(at(56.34, -2.7997), Severity::Mild)]
    fn bunker_severity_by_distance(
        tee: Option<Coord<f64>>,
        #[case] bunker: LatLng,
        #[case] expected: Severity,
    ) {
        let features = CourseFeatures {
            bunkers: vec![bunker],
            water: Vec::new(),
        };
        let hazards = classify_hazards(&features, GREEN, tee);
        let [hazard] = hazards.as_slice() else {
            panic!("expected one hazard, got {hazards:?}");
        };
        assert_eq!(hazard.severity(), expected);
        assert_eq!(hazard.side(), HazardSide::Right);
    }

    #[rstest]
    fn distant_water_is_ignored(tee: Option<Coord<f64>>) {
        let features = CourseFeatures {
            bunkers: Vec::new(),
            water: vec![at(56.3402, -2.80), at(56.345, -2.80)],
        };
        let hazards = classify_hazards(&features, GREEN, tee);
        let [hazard] = hazards.as_slice() else {
            panic!("expected one hazard, got {hazards:?}");
        };
        assert_eq!(hazard.kind(), HazardKind::Water);
        assert_eq!(hazard.side(), HazardSide::Back);
        assert_eq!(hazard.severity(), Severity::Death);
        assert!((hazard.distance_from_green() - 24.0).abs() < 1e-9);
    }

    #[rstest]
    fn invalid_positions_are_skipped(tee: Option<Coord<f64>>) {
        let features = CourseFeatures {
            bunkers: vec![at(f64::NAN, -2.80)],
            water: vec![at(95.0, -2.80)],
        };
        assert!(classify_hazards(&features, GREEN, tee).is_empty());
    }

    #[rstest]
    fn features_accept_lon_spelling() {
        let features: CourseFeatures =
            serde_json::from_str(r#"{"bunkers": [{"lat": 56.34, "lon": -2.8}]}"#)
                .expect("parse features");
        assert_eq!(features.bunkers, vec![at(56.34, -2.8)]);
        assert!(features.water.is_empty());
    }
}
