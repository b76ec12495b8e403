//! Convert a measured distance into the distance a shot plays.
//!
//! Each [`Factor`] is evaluated on its own and reports a
//! [`ShotAdjustment`] only when its effect clears a materiality floor. The
//! adjusted distance is the raw distance plus the sum of the reported deltas,
//! so the evaluation order changes the report order but never the total.

use caddie_core::{AdjustmentKind, ShotAdjustment, TurfCondition, WeatherSnapshot, round_yards};

/// Elevation changes at or below this many feet are ignored.
const ELEVATION_FLOOR_FT: f64 = 1.0;
/// Feet of rise per yard of extra distance.
const FEET_PER_YARD: f64 = 3.0;
/// Wind below this speed has no effect.
const WIND_FLOOR_MPH: f64 = 3.0;
/// Fraction of distance added per mph of headwind.
const HEADWIND_PER_MPH: f64 = 0.01;
/// Fraction of distance removed per mph of tailwind.
const TAILWIND_PER_MPH: f64 = 0.005;
/// Head or tail components at or below this speed are "light".
const LIGHT_WIND_MPH: f64 = 5.0;
const BASELINE_TEMP_F: f64 = 70.0;
const YARDS_PER_DEGREE_F: f64 = 0.2;
/// Altitudes at or below this height are treated as sea level.
const ALTITUDE_FLOOR_FT: f64 = 500.0;
/// Fraction of distance gained per thousand feet of altitude.
const ALTITUDE_PER_KFT: f64 = 0.02;
const SOFT_TURF_FRACTION: f64 = 0.03;
const FIRM_TURF_FRACTION: f64 = 0.02;
/// Temperature, altitude, and turf effects smaller than this are dropped.
const MATERIAL_YARDS: i64 = 2;

/// Inputs shared by every adjustment factor.
#[derive(Debug, Clone, Copy)]
pub struct ShotConditions<'a> {
    /// Measured distance in yards.
    pub raw_yards: u32,
    /// Elevation change in feet; positive is uphill.
    pub elevation_change_ft: f64,
    /// Weather, if known.
    pub weather: Option<&'a WeatherSnapshot>,
    /// Shot bearing in degrees clockwise from north.
    pub bearing_deg: f64,
}

/// One physical cause of a distance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    /// Uphill or downhill.
    Elevation,
    /// Head or tail wind.
    Wind,
    /// Air temperature.
    Temperature,
    /// Course altitude.
    Altitude,
    /// Turf firmness.
    Conditions,
}

impl Factor {
    /// Every factor in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Elevation,
        Self::Wind,
        Self::Temperature,
        Self::Altitude,
        Self::Conditions,
    ];

    /// Evaluate this factor alone.
    ///
    /// Weather factors return `None` when no weather is known.
    #[must_use]
    pub fn evaluate(self, shot: &ShotConditions<'_>) -> Option<ShotAdjustment> {
        match self {
            Self::Elevation => elevation_adjustment(shot.elevation_change_ft),
            Self::Wind => shot
                .weather
                .and_then(|weather| wind_adjustment(weather, shot.bearing_deg, shot.raw_yards)),
            Self::Temperature => shot
                .weather
                .and_then(|weather| temperature_adjustment(weather.temperature_f)),
            Self::Altitude => shot
                .weather
                .and_then(|weather| altitude_adjustment(weather.altitude_ft, shot.raw_yards)),
            Self::Conditions => shot
                .weather
                .and_then(|weather| turf_adjustment(weather.conditions, shot.raw_yards)),
        }
    }
}

/// A played distance and the adjustments that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustedDistance {
    /// Distance the shot plays, never below one yard.
    pub yards: u32,
    /// Reported adjustments in evaluation order.
    pub adjustments: Vec<ShotAdjustment>,
    /// Crosswind drift, reported but not added to the distance.
    pub crosswind_drift_yards: i64,
}

impl AdjustedDistance {
    /// Sum of every reported adjustment.
    #[must_use]
    pub fn total_delta(&self) -> i64 {
        self.adjustments.iter().map(|adjustment| adjustment.yards).sum()
    }
}

/// Adjust `shot` using every factor in [`Factor::ALL`] order.
///
/// # Examples
/// ```
/// use caddie_advisor::{ShotConditions, adjust_distance};
///
/// let shot = ShotConditions {
///     raw_yards: 150,
///     elevation_change_ft: 9.0,
///     weather: None,
///     bearing_deg: 0.0,
/// };
/// let adjusted = adjust_distance(&shot);
/// assert_eq!(adjusted.yards, 153);
/// assert_eq!(adjusted.adjustments.len(), 1);
/// ```
#[must_use]
pub fn adjust_distance(shot: &ShotConditions<'_>) -> AdjustedDistance {
    adjust_distance_with(shot, &Factor::ALL)
}

/// Adjust `shot` evaluating `factors` in the given order.
#[must_use]
pub fn adjust_distance_with(shot: &ShotConditions<'_>, factors: &[Factor]) -> AdjustedDistance {
    let adjustments: Vec<ShotAdjustment> = factors
        .iter()
        .filter_map(|factor| factor.evaluate(shot))
        .collect();
    let total: i64 = adjustments.iter().map(|adjustment| adjustment.yards).sum();
    let played = i64::from(shot.raw_yards).saturating_add(total).max(1);
    let crosswind_drift_yards = shot
        .weather
        .filter(|weather| weather.wind_speed_mph >= WIND_FLOOR_MPH)
        .map_or(0, |weather| {
            wind_effect(
                weather.wind_speed_mph,
                weather.wind_direction_deg,
                shot.bearing_deg,
                shot.raw_yards,
            )
            .lateral_yards
        });
    AdjustedDistance {
        yards: u32::try_from(played).unwrap_or(u32::MAX),
        adjustments,
        crosswind_drift_yards,
    }
}

/// One yard per three feet of elevation change.
///
/// Changes of a foot or less, and changes that round to zero yards, are
/// not reported.
#[expect(
    clippy::float_arithmetic,
    reason = "elevation is converted from feet to yards"
)]
#[must_use]
pub fn elevation_adjustment(elevation_change_ft: f64) -> Option<ShotAdjustment> {
    if !elevation_change_ft.is_finite() || elevation_change_ft.abs() <= ELEVATION_FLOOR_FT {
        return None;
    }
    let yards = round_yards(elevation_change_ft / FEET_PER_YARD);
    if yards == 0 {
        return None;
    }
    let (direction, verb) = if yards > 0 {
        ("uphill", "adds")
    } else {
        ("downhill", "saves")
    };
    Some(ShotAdjustment::new(
        AdjustmentKind::Elevation,
        yards,
        format!(
            "{:.0}ft {direction}: {verb} {} yds",
            elevation_change_ft.abs(),
            yards.abs()
        ),
    ))
}

/// Wind decomposed against a shot.
#[derive(Debug, Clone, PartialEq)]
pub struct WindEffect {
    /// Component blowing into the player, mph; negative is a tailwind.
    pub headwind_mph: f64,
    /// Component blowing across the shot, mph; positive comes from the right.
    pub crosswind_mph: f64,
    /// Signed distance change in yards; positive plays longer.
    pub distance_yards: i64,
    /// Crosswind drift in yards; positive comes from the right.
    pub lateral_yards: i64,
    /// Player-facing description.
    pub description: String,
}

/// Decompose wind blowing from `from_deg` against a shot on `bearing_deg`.
///
/// Headwind adds one percent of the distance per mph. Tailwind removes half
/// a percent per mph. Crosswind drifts the ball one yard per mph per hundred
/// yards of carry.
///
/// # Examples
/// ```
/// use caddie_advisor::wind_effect;
///
/// let effect = wind_effect(10.0, 0.0, 0.0, 150);
/// assert_eq!(effect.distance_yards, 15);
/// assert_eq!(effect.lateral_yards, 0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "wind is decomposed with trigonometry"
)]
#[must_use]
pub fn wind_effect(speed_mph: f64, from_deg: f64, bearing_deg: f64, distance_yards: u32) -> WindEffect {
    let distance = f64::from(distance_yards);
    let relative = (from_deg - bearing_deg).to_radians();
    let headwind_mph = speed_mph * relative.cos();
    let crosswind_mph = speed_mph * relative.sin();
    let fraction = if headwind_mph > 0.0 {
        headwind_mph * HEADWIND_PER_MPH
    } else {
        headwind_mph * TAILWIND_PER_MPH
    };
    let distance_delta = round_yards(distance * fraction);
    let lateral_yards = round_yards(crosswind_mph * distance / 100.0);

    let description = if headwind_mph.abs() > crosswind_mph.abs() {
        if headwind_mph > LIGHT_WIND_MPH {
            format!(
                "Into wind ({speed_mph:.0} mph): plays {} yards longer",
                distance_delta.abs()
            )
        } else if headwind_mph < -LIGHT_WIND_MPH {
            format!(
                "Downwind ({speed_mph:.0} mph): plays {} yards shorter",
                distance_delta.abs()
            )
        } else if headwind_mph > 0.0 {
            "Light headwind: minimal effect".to_owned()
        } else {
            "Light tailwind: minimal effect".to_owned()
        }
    } else if crosswind_mph > 0.0 {
        format!(
            "Crosswind right-to-left ({speed_mph:.0} mph): aim {} yards right",
            lateral_yards.abs()
        )
    } else {
        format!(
            "Crosswind left-to-right ({speed_mph:.0} mph): aim {} yards left",
            lateral_yards.abs()
        )
    };

    WindEffect {
        headwind_mph,
        crosswind_mph,
        distance_yards: distance_delta,
        lateral_yards,
        description,
    }
}

/// Wind adjustment for a shot, reported only when the wind is at least
/// 3 mph and the distance change is nonzero.
#[must_use]
pub fn wind_adjustment(
    weather: &WeatherSnapshot,
    bearing_deg: f64,
    raw_yards: u32,
) -> Option<ShotAdjustment> {
    if !weather.wind_speed_mph.is_finite() || weather.wind_speed_mph < WIND_FLOOR_MPH {
        return None;
    }
    let effect = wind_effect(
        weather.wind_speed_mph,
        weather.wind_direction_deg,
        bearing_deg,
        raw_yards,
    );
    (effect.distance_yards != 0).then(|| {
        ShotAdjustment::new(
            AdjustmentKind::Wind,
            effect.distance_yards,
            effect.description,
        )
    })
}

/// A fifth of a yard per degree away from 70 °F; cold air plays longer.
#[expect(
    clippy::float_arithmetic,
    reason = "temperature deviation scales linearly"
)]
#[must_use]
pub fn temperature_adjustment(temperature_f: f64) -> Option<ShotAdjustment> {
    let yards = round_yards(-(temperature_f - BASELINE_TEMP_F) * YARDS_PER_DEGREE_F);
    if yards.abs() < MATERIAL_YARDS {
        return None;
    }
    let feel = if yards > 0 { "cold" } else { "warm" };
    let sign = if yards > 0 { "+" } else { "" };
    Some(ShotAdjustment::new(
        AdjustmentKind::Temperature,
        yards,
        format!("{temperature_f:.0}°F ({feel}): {sign}{yards} yds"),
    ))
}

/// Two percent of the distance per thousand feet above 500 ft; thin air
/// plays shorter.
#[expect(
    clippy::float_arithmetic,
    reason = "altitude scales the distance proportionally"
)]
#[must_use]
pub fn altitude_adjustment(altitude_ft: f64, raw_yards: u32) -> Option<ShotAdjustment> {
    if !altitude_ft.is_finite() || altitude_ft <= ALTITUDE_FLOOR_FT {
        return None;
    }
    let fraction = altitude_ft / 1000.0 * ALTITUDE_PER_KFT;
    let yards = round_yards(-f64::from(raw_yards) * fraction);
    if yards.abs() < MATERIAL_YARDS {
        return None;
    }
    Some(ShotAdjustment::new(
        AdjustmentKind::Altitude,
        yards,
        format!(
            "{altitude_ft:.0}ft elevation: ball carries {} yds farther",
            yards.abs()
        ),
    ))
}

/// Soft turf adds three percent of the distance; firm turf removes two.
#[expect(
    clippy::float_arithmetic,
    reason = "turf effects are a fraction of the distance"
)]
#[must_use]
pub fn turf_adjustment(conditions: TurfCondition, raw_yards: u32) -> Option<ShotAdjustment> {
    let raw = f64::from(raw_yards);
    match conditions {
        TurfCondition::Soft => {
            let yards = round_yards(raw * SOFT_TURF_FRACTION);
            (yards >= MATERIAL_YARDS).then(|| {
                ShotAdjustment::new(
                    AdjustmentKind::Conditions,
                    yards,
                    format!("Soft conditions: less roll, plays {yards} yds longer"),
                )
            })
        }
        TurfCondition::Firm => {
            let yards = round_yards(-raw * FIRM_TURF_FRACTION);
            (yards <= -MATERIAL_YARDS).then(|| {
                ShotAdjustment::new(
                    AdjustmentKind::Conditions,
                    yards,
                    format!("Firm conditions: extra roll, plays {} yds shorter", yards.abs()),
                )
            })
        }
        TurfCondition::Medium => None,
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast on unexpected values")]
mod tests {
    //! Unit coverage for each adjustment factor in isolation.

    use super::*;
    use rstest::rstest;

    fn weather() -> WeatherSnapshot {
        WeatherSnapshot::default()
    }

    #[rstest]
    #[case(9.0, Some(3))]
    #[case(-9.0, Some(-3))]
    #[case(1.0, None)]
    #[case(1.4, None)]
    #[case(4.5, Some(2))]
    #[case(f64::NAN, None)]
    fn elevation_yards(#[case] feet: f64, #[case] expected: Option<i64>) {
        assert_eq!(elevation_adjustment(feet).map(|a| a.yards), expected);
    }

    #[rstest]
    fn elevation_describes_direction() {
        let uphill = elevation_adjustment(9.0).expect("uphill adjustment");
        assert_eq!(uphill.description, "9ft uphill: adds 3 yds");
        let downhill = elevation_adjustment(-12.0).expect("downhill adjustment");
        assert_eq!(downhill.description, "12ft downhill: saves 4 yds");
    }

    #[rstest]
    fn pure_headwind_adds_one_percent_per_mph() {
        let effect = wind_effect(10.0, 90.0, 90.0, 150);
        assert_eq!(effect.distance_yards, 15);
        assert_eq!(effect.lateral_yards, 0);
        assert_eq!(effect.description, "Into wind (10 mph): plays 15 yards longer");
    }

    #[rstest]
    fn pure_tailwind_removes_half_a_percent_per_mph() {
        let effect = wind_effect(10.0, 180.0, 0.0, 160);
        assert_eq!(effect.distance_yards, -8);
        assert_eq!(effect.description, "Downwind (10 mph): plays 8 yards shorter");
    }

    #[rstest]
    fn crosswind_reports_drift_only() {
        let effect = wind_effect(10.0, 90.0, 0.0, 150);
        assert_eq!(effect.distance_yards, 0);
        assert_eq!(effect.lateral_yards, 15);
        assert_eq!(
            effect.description,
            "Crosswind right-to-left (10 mph): aim 15 yards right"
        );
        let from_left = wind_effect(10.0, 270.0, 0.0, 150);
        assert_eq!(from_left.lateral_yards, -15);
    }

    #[rstest]
    fn light_headwind_is_minimal() {
        let effect = wind_effect(4.0, 0.0, 0.0, 150);
        assert_eq!(effect.description, "Light headwind: minimal effect");
    }

    #[rstest]
    fn calm_air_has_no_wind_adjustment() {
        assert_eq!(wind_adjustment(&weather().with_wind(2.9, 0.0), 0.0, 150), None);
    }

    #[rstest]
    fn crosswind_contributes_no_distance() {
        assert_eq!(wind_adjustment(&weather().with_wind(12.0, 90.0), 0.0, 150), None);
    }

    #[rstest]
    #[case(70.0, None)]
    #[case(65.0, None)]
    #[case(50.0, Some(4))]
    #[case(95.0, Some(-5))]
    fn temperature_yards(#[case] temp: f64, #[case] expected: Option<i64>) {
        assert_eq!(temperature_adjustment(temp).map(|a| a.yards), expected);
    }

    #[rstest]
    fn temperature_describes_feel() {
        let cold = temperature_adjustment(50.0).expect("cold adjustment");
        assert_eq!(cold.description, "50°F (cold): +4 yds");
        let warm = temperature_adjustment(95.0).expect("warm adjustment");
        assert_eq!(warm.description, "95°F (warm): -5 yds");
    }

    #[rstest]
    #[case(400.0, 150, None)]
    #[case(500.0, 150, None)]
    #[case(5000.0, 150, Some(-15))]
    #[case(600.0, 150, Some(-2))]
    #[case(600.0, 100, None)]
    fn altitude_yards(#[case] altitude: f64, #[case] raw: u32, #[case] expected: Option<i64>) {
        assert_eq!(altitude_adjustment(altitude, raw).map(|a| a.yards), expected);
    }

    #[rstest]
    #[case(TurfCondition::Soft, 150, Some(4))]
    #[case(TurfCondition::Firm, 150, Some(-3))]
    #[case(TurfCondition::Medium, 150, None)]
    #[case(TurfCondition::Soft, 40, None)]
    #[case(TurfCondition::Firm, 60, None)]
    fn turf_yards(#[case] turf: TurfCondition, #[case] raw: u32, #[case] expected: Option<i64>) {
        assert_eq!(turf_adjustment(turf, raw).map(|a| a.yards), expected);
    }

    #[rstest]
    fn headwind_scenario_plays_fifteen_longer() {
        let conditions = weather().with_wind(10.0, 0.0);
        let shot = ShotConditions {
            raw_yards: 150,
            elevation_change_ft: 0.0,
            weather: Some(&conditions),
            bearing_deg: 0.0,
        };
        let adjusted = adjust_distance(&shot);
        assert_eq!(adjusted.yards, 165);
        assert_eq!(adjusted.total_delta(), 15);
        assert_eq!(
            adjusted.adjustments.first().map(|a| a.kind),
            Some(AdjustmentKind::Wind)
        );
    }

    #[rstest]
    fn adjusted_distance_never_drops_below_one() {
        let conditions = weather()
            .with_wind(40.0, 180.0)
            .with_temperature(110.0)
            .with_altitude(9000.0)
            .with_conditions(TurfCondition::Firm);
        let shot = ShotConditions {
            raw_yards: 3,
            elevation_change_ft: -60.0,
            weather: Some(&conditions),
            bearing_deg: 0.0,
        };
        assert_eq!(adjust_distance(&shot).yards, 1);
    }

    #[rstest]
    fn every_factor_reports_separately() {
        let conditions = weather()
            .with_wind(10.0, 0.0)
            .with_temperature(50.0)
            .with_altitude(5000.0)
            .with_conditions(TurfCondition::Soft);
        let shot = ShotConditions {
            raw_yards: 150,
            elevation_change_ft: 9.0,
            weather: Some(&conditions),
            bearing_deg: 0.0,
        };
        let adjusted = adjust_distance(&shot);
        let kinds: Vec<_> = adjusted.adjustments.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AdjustmentKind::Elevation,
                AdjustmentKind::Wind,
                AdjustmentKind::Temperature,
                AdjustmentKind::Altitude,
                AdjustmentKind::Conditions,
            ]
        );
        assert_eq!(adjusted.total_delta(), 3 + 15 + 4 - 15 + 4);
        assert_eq!(adjusted.yards, 161);
    }
}
