//! Weather snapshots derived from raw observations.

use caddie_core::{TurfCondition, WeatherSnapshot, air_density_factor, round_to};
use serde::{Deserialize, Serialize};

/// Current conditions as a forecast service reports them.
///
/// Missing fields default to the standard atmosphere used for the density
/// factor: 70 °F, 50 % humidity, 1013.25 hPa, no wind and no rain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherObservation {
    /// Air temperature in °F.
    pub temperature_f: f64,
    /// Relative humidity, `0..=100`.
    pub humidity: f64,
    /// Sustained wind speed in mph.
    pub wind_speed_mph: f64,
    /// Bearing the wind blows from, in degrees.
    #[serde(alias = "wind_direction")]
    pub wind_direction_deg: f64,
    /// Gust speed in mph.
    pub wind_gusts_mph: f64,
    /// Surface pressure in hPa.
    pub pressure_hpa: f64,
    /// Recent precipitation in mm.
    pub precipitation_mm: f64,
}

impl Default for WeatherObservation {
    fn default() -> Self {
        let standard = WeatherSnapshot::default();
        Self {
            temperature_f: standard.temperature_f,
            humidity: standard.humidity,
            wind_speed_mph: standard.wind_speed_mph,
            wind_direction_deg: standard.wind_direction_deg,
            wind_gusts_mph: standard.wind_gusts_mph,
            pressure_hpa: standard.pressure_hpa,
            precipitation_mm: 0.0,
        }
    }
}

/// Build the snapshot the advisor consumes from an observation.
///
/// The density factor is rounded to four decimals and the turf condition is
/// estimated from temperature, humidity, and rain. An unknown course
/// altitude is recorded as sea level.
///
/// # Examples
/// ```
/// use caddie_core::TurfCondition;
/// use caddie_course::{WeatherObservation, weather_snapshot};
///
/// let wet = WeatherObservation { precipitation_mm: 6.0, ..WeatherObservation::default() };
/// let snapshot = weather_snapshot(&wet, Some(350.0));
/// assert_eq!(snapshot.conditions, TurfCondition::Soft);
/// assert_eq!(snapshot.air_density_factor, 1.0);
/// assert_eq!(snapshot.altitude_ft, 350.0);
/// ```
#[must_use]
pub fn weather_snapshot(observation: &WeatherObservation, altitude_ft: Option<f64>) -> WeatherSnapshot {
    let density = air_density_factor(
        observation.temperature_f,
        observation.humidity,
        observation.pressure_hpa,
    );
    WeatherSnapshot {
        temperature_f: observation.temperature_f,
        humidity: observation.humidity,
        wind_speed_mph: observation.wind_speed_mph,
        wind_direction_deg: observation.wind_direction_deg,
        wind_gusts_mph: observation.wind_gusts_mph,
        pressure_hpa: observation.pressure_hpa,
        altitude_ft: altitude_ft.filter(|feet| feet.is_finite()).unwrap_or(0.0),
        air_density_factor: round_to(density, 4),
        conditions: TurfCondition::estimate(
            observation.temperature_f,
            observation.humidity,
            observation.precipitation_mm,
        ),
    }
}
