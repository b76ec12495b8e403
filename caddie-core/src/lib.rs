//! Core domain types for the caddie engine.
//!
//! These models describe a hole, the weather, the player, and the
//! recommendation handed back for a shot, together with the statistical
//! tables every recommendation leans on: shot dispersion and expected
//! strokes. Numeric inputs outside modelled ranges are clamped rather than
//! rejected so a recommendation is always possible.

#![forbid(unsafe_code)]
#![warn(clippy::cast_possible_truncation)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod advisor;
pub mod club;
pub mod dispersion;
pub mod elevation;
mod error;
pub mod hole;
pub mod interpolate;
pub mod player;
pub mod recommendation;
mod rounding;
pub mod strokes;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod weather;

pub use advisor::{Advisor, ShotRequest};
pub use club::{Club, ClubCategory, ClubDistances};
pub use dispersion::{Dispersion, dispersion};
pub use elevation::ElevationProvider;
pub use error::ParseEnumError;
pub use hole::{
    GreenSlope, Hazard, HazardKind, HazardSide, HoleContext, HoleHistory, Severity, SlopeSeverity,
};
pub use player::{
    DEFAULT_HANDICAP, MissDirection, ParAverages, PlayerProfile, PlayerStatistics,
    PlayerTendencies, ScoringDistribution, StrokesGainedSummary, resolve_handicap,
};
pub use recommendation::{
    AdjustmentKind, Aggressiveness, AimPoint, CaddieRecommendation, MissPreference, MissSide,
    PinLight, ShotAdjustment,
};
pub use rounding::{round_to, round_yards};
pub use strokes::{BallPosition, Lie, expected_strokes, handicap_multiplier, strokes_gained};
pub use weather::{TurfCondition, WEATHER_FRESHNESS, WeatherSnapshot, air_density_factor};
