//! Green slope estimated from a 3×3 grid of elevation samples.

use caddie_core::{ElevationProvider, GreenSlope, SlopeSeverity, round_to};
use geo::Coord;
use log::debug;

/// Distance from the green centre to the outer samples, in yards.
///
/// Seventy percent of a typical fifteen-yard green radius keeps every sample
/// on the putting surface.
pub const GREEN_SAMPLE_RADIUS_YARDS: f64 = 10.5;

const YARDS_PER_DEGREE_LAT: f64 = 121_740.0;
const FEET_PER_YARD: f64 = 3.0;
const MIN_SAMPLES: usize = 5;
const FLAT_GRADE_PCT: f64 = 0.1;

/// Upper bound of each compass sector, clockwise from north.
const COMPASS: [(f64, &str); 8] = [
    (22.5, "north"),
    (67.5, "northeast"),
    (112.5, "east"),
    (157.5, "southeast"),
    (202.5, "south"),
    (247.5, "southwest"),
    (292.5, "west"),
    (337.5, "northwest"),
];

/// Sample positions around `centre`, row by row from the north-west corner
/// to the south-east corner, `spacing_yards` apart.
#[expect(clippy::float_arithmetic, reason = "yard offsets to degrees")]
#[must_use]
pub fn green_sample_grid(centre: Coord<f64>, spacing_yards: f64) -> [Coord<f64>; 9] {
    let lat_per_yard = YARDS_PER_DEGREE_LAT.recip();
    let lng_per_yard = (YARDS_PER_DEGREE_LAT * centre.y.to_radians().cos()).recip();
    let at = |east: f64, north: f64| Coord {
        x: centre.x + east * spacing_yards * lng_per_yard,
        y: centre.y + north * spacing_yards * lat_per_yard,
    };
    [
        at(-1.0, 1.0),
        at(0.0, 1.0),
        at(1.0, 1.0),
        at(-1.0, 0.0),
        at(0.0, 0.0),
        at(1.0, 0.0),
        at(-1.0, -1.0),
        at(0.0, -1.0),
        at(1.0, -1.0),
    ]
}

/// Estimate the slope of the green centred at `centre`.
///
/// Returns `None` when fewer than five of the nine samples are available.
#[must_use]
pub fn green_slope<P>(centre: Coord<f64>, elevations: &P) -> Option<GreenSlope>
where
    P: ElevationProvider + ?Sized,
{
    let grid = green_sample_grid(centre, GREEN_SAMPLE_RADIUS_YARDS);
    let samples = elevations.elevations_ft(&grid);
    let slope = slope_from_samples(&samples, GREEN_SAMPLE_RADIUS_YARDS);
    if slope.is_none() {
        debug!("not enough elevation samples for a green slope at {centre:?}");
    }
    slope
}

/// Slope from nine samples laid out as [`green_sample_grid`] returns them.
///
/// A Sobel operator estimates the east and north gradients. Missing or
/// non-finite samples are replaced by the mean of the valid ones, and at
/// least five valid samples are required. The reported direction is the one
/// the green falls toward, in degrees clockwise from north, rounded to one
/// decimal; the grade is a percentage rounded to two.
///
/// # Examples
/// ```
/// use caddie_core::SlopeSeverity;
/// use caddie_course::slope_from_samples;
///
/// // Ten yards apart, each row a foot lower than the one to its north.
/// let rows = [Some(101.0), Some(100.0), Some(99.0)];
/// let samples: Vec<Option<f64>> = rows.iter().flat_map(|row| [*row; 3]).collect();
/// let slope = slope_from_samples(&samples, 10.0).expect("nine samples");
/// assert_eq!(slope.direction_deg, 180.0);
/// assert_eq!(slope.severity, SlopeSeverity::Moderate);
/// assert_eq!(slope.description, "Green slopes moderately toward the south");
/// ```
#[expect(clippy::float_arithmetic, reason = "gradient estimation")]
#[must_use]
pub fn slope_from_samples(samples: &[Option<f64>], spacing_yards: f64) -> Option<GreenSlope> {
    let grid: [Option<f64>; 9] = samples.try_into().ok()?;
    let valid: Vec<f64> = grid
        .iter()
        .flatten()
        .copied()
        .filter(|feet| feet.is_finite())
        .collect();
    if valid.len() < MIN_SAMPLES || !(spacing_yards.is_finite() && spacing_yards > 0.0) {
        return None;
    }
    let fill = valid.iter().sum::<f64>() / crate::count_f64(valid.len());
    let [nw, n, ne, w, _, e, sw, s, se] =
        grid.map(|sample| sample.filter(|feet| feet.is_finite()).unwrap_or(fill));

    // Weights sum to four on each side; the outer columns are two spacings apart.
    let span_ft = 4.0 * 2.0 * spacing_yards * FEET_PER_YARD;
    let rise_east = ((ne + 2.0 * e + se) - (nw + 2.0 * w + sw)) / span_ft;
    let rise_north = ((nw + 2.0 * n + ne) - (sw + 2.0 * s + se)) / span_ft;

    let percent_grade = rise_east.hypot(rise_north) * 100.0;
    let direction_deg = if percent_grade < FLAT_GRADE_PCT {
        0.0
    } else {
        (-rise_east).atan2(-rise_north).to_degrees().rem_euclid(360.0)
    };
    let severity = SlopeSeverity::from_grade(percent_grade);
    let description = if severity == SlopeSeverity::Flat {
        "Relatively flat green".to_owned()
    } else {
        format!(
            "Green slopes {}ly toward the {}",
            severity.as_str(),
            compass_point(direction_deg)
        )
    };

    Some(GreenSlope {
        direction_deg: round_to(direction_deg, 1),
        severity,
        percent_grade: round_to(percent_grade, 2),
        description,
    })
}

fn compass_point(direction_deg: f64) -> &'static str {
    COMPASS
        .iter()
        .find(|(upper, _)| direction_deg < *upper)
        .map_or("north", |(_, name)| name)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast on unexpected values")]
mod tests {
    use super::*;
    use caddie_core::test_support::{FlatElevation, GridElevation, MissingElevation};
    use rstest::rstest;

    const CENTRE: Coord<f64> = Coord { x: -2.80, y: 56.34 };

    #[rstest]
    fn grid_is_centred_and_evenly_spaced() {
        let grid = green_sample_grid(CENTRE, GREEN_SAMPLE_RADIUS_YARDS);
        let [nw, n, _, w, centre, e, _, s, se] = grid;
        assert_eq!(centre, CENTRE);
        assert!(n.y > centre.y && s.y < centre.y);
        assert!(e.x > centre.x && w.x < centre.x);
        assert!((nw.x - w.x).abs() < 1e-12 && (se.y - s.y).abs() < 1e-12);
        let spacing = crate::distance_yards(centre, n);
        assert!((spacing - GREEN_SAMPLE_RADIUS_YARDS).abs() < 0.1, "got {spacing}");
    }

    #[rstest]
    fn flat_ground_is_flat() {
        let slope = green_slope(CENTRE, &FlatElevation(42.0)).expect("all samples present");
        assert_eq!(slope.severity, SlopeSeverity::Flat);
        assert!(slope.percent_grade.abs() < 1e-9);
        assert!(slope.direction_deg.abs() < 1e-9);
        assert_eq!(slope.description, "Relatively flat green");
    }

    #[rstest]
    fn rising_north_falls_south() {
        // 3 652.2 ft of rise per degree of latitude is a 1 % grade.
        let plane = GridElevation::new(100.0, CENTRE, Coord { x: 0.0, y: 7_304.4 });
        let slope = green_slope(CENTRE, &plane).expect("all samples present");
        assert!((slope.percent_grade - 2.0).abs() < 1e-6, "got {}", slope.percent_grade);
        assert!((slope.direction_deg - 180.0).abs() < 1e-9);
        assert_eq!(slope.severity, SlopeSeverity::Mild);
        assert_eq!(slope.description, "Green slopes mildly toward the south");
    }

    #[rstest]
    fn rising_west_falls_east() {
        let samples = [
            Some(3.0), Some(2.0), Some(1.0),
            Some(3.0), Some(2.0), Some(1.0),
            Some(3.0), Some(2.0), Some(1.0),
        ];
        let slope = slope_from_samples(&samples, 10.0).expect("nine samples");
        assert!((slope.direction_deg - 90.0).abs() < 1e-9);
        assert_eq!(slope.severity, SlopeSeverity::Moderate);
        assert_eq!(slope.description, "Green slopes moderately toward the east");
    }

    #[rstest]
    fn gaps_are_filled_with_the_mean() {
        let samples = [
            None, Some(100.0), None,
            Some(100.0), Some(100.0), Some(100.0),
            None, Some(100.0), None,
        ];
        let slope = slope_from_samples(&samples, 10.0).expect("five samples");
        assert_eq!(slope.severity, SlopeSeverity::Flat);
    }

    #[rstest]
    #[case(4)]
    #[case(0)]
    fn too_few_samples_give_nothing(#[case] present: usize) {
        let samples: Vec<Option<f64>> =
            (0..9).map(|index| (index < present).then_some(50.0)).collect();
        assert_eq!(slope_from_samples(&samples, 10.0), None);
    }

    #[rstest]
    fn missing_provider_gives_nothing() {
        assert_eq!(green_slope(CENTRE, &MissingElevation), None);
    }

    #[rstest]
    #[case(0.0, "north")]
    #[case(45.0, "northeast")]
    #[case(200.0, "south")]
    #[case(300.0, "northwest")]
    #[case(350.0, "north")]
    fn compass_sectors(#[case] direction: f64, #[case] expected: &str) {
        assert_eq!(compass_point(direction), expected);
    }
}
