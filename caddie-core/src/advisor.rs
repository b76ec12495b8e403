//! Shot requests and the `Advisor` abstraction.
//!
//! An [`Advisor`] turns a [`ShotRequest`] into a
//! [`CaddieRecommendation`]. Implementations are infallible: absent
//! weather, statistics, or hazards degrade the answer instead of failing it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CaddieRecommendation, HoleContext, PlayerProfile, PlayerStatistics, WeatherSnapshot};

/// Everything needed to recommend one shot.
///
/// # Examples
/// ```
/// use caddie_core::{HoleContext, ShotRequest, WeatherSnapshot};
///
/// let request = ShotRequest::new(HoleContext::new(4, 3, 172))
///     .with_distance(165)
///     .with_weather(WeatherSnapshot::default().with_wind(12.0, 180.0))
///     .with_bearing(180.0);
/// assert_eq!(request.raw_distance(), 165);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShotRequest {
    /// The hole being played.
    pub hole: HoleContext,
    /// Measured distance to the target; the card yardage when absent.
    #[cfg_attr(feature = "serde", serde(default, alias = "distance_yards"))]
    pub distance: Option<u32>,
    /// Club distances and handicap.
    #[cfg_attr(feature = "serde", serde(default))]
    pub player: PlayerProfile,
    /// Current weather, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weather: Option<WeatherSnapshot>,
    /// Statistics derived from round history, if any.
    #[cfg_attr(feature = "serde", serde(default, alias = "player_stats"))]
    pub statistics: Option<PlayerStatistics>,
    /// Bearing of the shot in degrees clockwise from north.
    #[cfg_attr(feature = "serde", serde(default, alias = "shot_bearing"))]
    pub bearing_deg: f64,
}

impl ShotRequest {
    /// A request for the full hole with no weather, statistics, or profile.
    pub fn new(hole: HoleContext) -> Self {
        Self {
            hole,
            distance: None,
            player: PlayerProfile::default(),
            weather: None,
            statistics: None,
            bearing_deg: 0.0,
        }
    }

    /// Set the measured distance.
    #[must_use]
    pub const fn with_distance(mut self, yards: u32) -> Self {
        self.distance = Some(yards);
        self
    }

    /// Set the player profile.
    #[must_use]
    pub fn with_player(mut self, player: PlayerProfile) -> Self {
        self.player = player;
        self
    }

    /// Set the weather snapshot.
    #[must_use]
    pub fn with_weather(mut self, weather: WeatherSnapshot) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Set the player statistics.
    #[must_use]
    pub fn with_statistics(mut self, statistics: PlayerStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// Set the shot bearing.
    #[must_use]
    pub const fn with_bearing(mut self, bearing_deg: f64) -> Self {
        self.bearing_deg = bearing_deg;
        self
    }

    /// Distance to play from, never less than one yard.
    pub fn raw_distance(&self) -> u32 {
        self.distance.unwrap_or(self.hole.yards).max(1)
    }
}

/// Produce a recommendation for a shot.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one advisor can
/// serve concurrent requests.
///
/// # Examples
///
/// ```rust
/// use caddie_core::{Advisor, CaddieRecommendation, ShotRequest};
///
/// struct Stubborn(CaddieRecommendation);
///
/// impl Advisor for Stubborn {
///     fn recommend(&self, _request: &ShotRequest) -> CaddieRecommendation {
///         self.0.clone()
///     }
/// }
/// ```
pub trait Advisor: Send + Sync {
    /// Recommend a shot for `request`.
    fn recommend(&self, request: &ShotRequest) -> CaddieRecommendation;
}
