//! Weather snapshots and the conditions derived from them.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hole::tagged_enum;

/// How long a weather snapshot stays fresh.
pub const WEATHER_FRESHNESS: Duration = Duration::from_secs(30 * 60);

const STANDARD_TEMP_F: f64 = 70.0;
const STANDARD_PRESSURE_HPA: f64 = 1013.25;
const STANDARD_HUMIDITY: f64 = 50.0;
const DRY_AIR_MOLAR_MASS: f64 = 28.97;
const VAPOUR_MOLAR_MASS: f64 = 18.02;

tagged_enum! {
    /// Turf firmness tier.
    #[derive(Default)]
    TurfCondition, "turf condition" {
        /// Wet or soft turf; less roll.
        Soft => "soft",
        /// Normal turf.
        #[default]
        Medium => "medium",
        /// Dry or fast turf; extra roll.
        Firm => "firm",
    }
}

impl TurfCondition {
    /// Estimate turf firmness from recent weather.
    ///
    /// Rain decides first: more than 2 mm is soft and more than 0.5 mm is
    /// medium. Otherwise heat and dry air firm the turf while cold and humid
    /// air soften it.
    ///
    /// # Examples
    /// ```
    /// use caddie_core::TurfCondition;
    ///
    /// assert_eq!(TurfCondition::estimate(90.0, 30.0, 0.0), TurfCondition::Firm);
    /// assert_eq!(TurfCondition::estimate(90.0, 30.0, 5.0), TurfCondition::Soft);
    /// ```
    pub fn estimate(temperature_f: f64, humidity: f64, precipitation_mm: f64) -> Self {
        if precipitation_mm > 2.0 {
            return Self::Soft;
        }
        if precipitation_mm > 0.5 {
            return Self::Medium;
        }
        let heat = if temperature_f > 85.0 {
            1.0
        } else if temperature_f > 75.0 {
            0.5
        } else if temperature_f < 55.0 {
            -0.5
        } else {
            0.0
        };
        let dryness = if humidity < 40.0 {
            0.5
        } else if humidity > 75.0 {
            -0.5
        } else {
            0.0
        };
        let firmness = heat + dryness;
        if firmness >= 1.0 {
            Self::Firm
        } else if firmness <= -0.5 {
            Self::Soft
        } else {
            Self::Medium
        }
    }
}

/// Air density relative to 70 °F, 1013.25 hPa, and 50 % humidity.
///
/// Values below `1.0` mean thinner air and longer carries.
pub fn air_density_factor(temperature_f: f64, humidity: f64, pressure_hpa: f64) -> f64 {
    let temp_c = fahrenheit_to_celsius(temperature_f);
    let std_temp_c = fahrenheit_to_celsius(STANDARD_TEMP_F);

    let vapour = humidity / 100.0 * saturation_vapour_pressure(temp_c);
    let dry = pressure_hpa - vapour;
    let std_vapour = STANDARD_HUMIDITY / 100.0 * saturation_vapour_pressure(std_temp_c);
    let std_dry = STANDARD_PRESSURE_HPA - std_vapour;

    let mass = dry * DRY_AIR_MOLAR_MASS + vapour * VAPOUR_MOLAR_MASS;
    let std_mass = std_dry * DRY_AIR_MOLAR_MASS + std_vapour * VAPOUR_MOLAR_MASS;
    mass / std_mass * ((std_temp_c + 273.15) / (temp_c + 273.15))
}

fn fahrenheit_to_celsius(temperature_f: f64) -> f64 {
    (temperature_f - 32.0) * 5.0 / 9.0
}

/// Magnus approximation in hPa.
fn saturation_vapour_pressure(temp_c: f64) -> f64 {
    6.1078 * ((17.27 * temp_c) / (temp_c + 237.3)).exp()
}

/// Conditions at the course when the snapshot was taken.
///
/// Wind direction follows the meteorological convention: the bearing the
/// wind blows *from*.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeatherSnapshot {
    /// Air temperature in °F.
    pub temperature_f: f64,
    /// Relative humidity, `0..=100`.
    pub humidity: f64,
    /// Sustained wind speed in mph.
    pub wind_speed_mph: f64,
    /// Bearing the wind blows from, in degrees.
    #[cfg_attr(feature = "serde", serde(alias = "wind_direction"))]
    pub wind_direction_deg: f64,
    /// Gust speed in mph.
    pub wind_gusts_mph: f64,
    /// Station pressure in hPa.
    pub pressure_hpa: f64,
    /// Course altitude in feet.
    pub altitude_ft: f64,
    /// Air density relative to standard conditions.
    pub air_density_factor: f64,
    /// Turf firmness.
    pub conditions: TurfCondition,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            temperature_f: STANDARD_TEMP_F,
            humidity: STANDARD_HUMIDITY,
            wind_speed_mph: 0.0,
            wind_direction_deg: 0.0,
            wind_gusts_mph: 0.0,
            pressure_hpa: STANDARD_PRESSURE_HPA,
            altitude_ft: 0.0,
            air_density_factor: 1.0,
            conditions: TurfCondition::Medium,
        }
    }
}

impl WeatherSnapshot {
    /// Set wind speed and origin bearing.
    #[must_use]
    pub const fn with_wind(mut self, speed_mph: f64, from_deg: f64) -> Self {
        self.wind_speed_mph = speed_mph;
        self.wind_direction_deg = from_deg;
        self
    }

    /// Set the temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature_f: f64) -> Self {
        self.temperature_f = temperature_f;
        self
    }

    /// Set the course altitude.
    #[must_use]
    pub const fn with_altitude(mut self, altitude_ft: f64) -> Self {
        self.altitude_ft = altitude_ft;
        self
    }

    /// Set the turf condition.
    #[must_use]
    pub const fn with_conditions(mut self, conditions: TurfCondition) -> Self {
        self.conditions = conditions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn turf_defaults_to_medium() {
        assert_eq!(TurfCondition::default(), TurfCondition::Medium);
    }

    #[rstest]
    fn standard_conditions_have_unit_density() {
        let factor = air_density_factor(70.0, 50.0, 1013.25);
        assert!((factor - 1.0).abs() < 1e-9);
    }

    #[rstest]
    fn hot_air_is_thinner() {
        assert!(air_density_factor(95.0, 50.0, 1013.25) < 1.0);
        assert!(air_density_factor(40.0, 50.0, 1013.25) > 1.0);
    }

    #[rstest]
    fn low_pressure_is_thinner() {
        assert!(air_density_factor(70.0, 50.0, 850.0) < 1.0);
    }

    #[rstest]
    #[case(70.0, 50.0, 3.0, TurfCondition::Soft)]
    #[case(70.0, 50.0, 1.0, TurfCondition::Medium)]
    #[case(90.0, 50.0, 0.0, TurfCondition::Firm)]
    #[case(80.0, 30.0, 0.0, TurfCondition::Firm)]
    #[case(80.0, 50.0, 0.0, TurfCondition::Medium)]
    #[case(50.0, 50.0, 0.0, TurfCondition::Soft)]
    #[case(65.0, 80.0, 0.0, TurfCondition::Soft)]
    #[case(65.0, 50.0, 0.0, TurfCondition::Medium)]
    fn estimates_turf(
        #[case] temp: f64,
        #[case] humidity: f64,
        #[case] rain: f64,
        #[case] expected: TurfCondition,
    ) {
        assert_eq!(TurfCondition::estimate(temp, humidity, rain), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_fields_take_standard_values() {
        let weather: WeatherSnapshot =
            serde_json::from_str(r#"{"wind_speed_mph": 12, "wind_direction": 270, "conditions": "firm"}"#)
                .expect("weather should decode");
        assert!((weather.temperature_f - 70.0).abs() < f64::EPSILON);
        assert!((weather.wind_direction_deg - 270.0).abs() < f64::EPSILON);
        assert_eq!(weather.conditions, TurfCondition::Firm);
    }
}
