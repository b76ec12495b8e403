//! Facade crate for the caddie recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the advisor,
//! statistics, course-intelligence, and session layers behind feature flags.

#![forbid(unsafe_code)]

pub use caddie_core::{
    Advisor, AimPoint, BallPosition, CaddieRecommendation, Club, ClubDistances,
    ElevationProvider, Hazard, HazardKind, HazardSide, HoleContext, HoleHistory, Lie,
    MissDirection, MissSide, PinLight, PlayerProfile, PlayerStatistics, ShotAdjustment,
    ShotRequest, WeatherSnapshot,
};

#[cfg(feature = "advisor")]
pub use caddie_advisor::{AdvisorConfig, CaddieAdvisor};

#[cfg(feature = "stats")]
pub use caddie_stats::{RoundRecord, analyze_rounds, default_statistics, hole_history};

#[cfg(feature = "course")]
pub use caddie_course::{
    CourseFeatures, HoleLayout, LatLng, WeatherObservation, build_hole_context, weather_snapshot,
};

#[cfg(feature = "session")]
pub use caddie_session::{RoundCaddie, SessionConfig, SessionError, SessionStore, Sweeper};
