//! Test doubles and fixtures for exercising the engine in isolation.

use geo::Coord;

use crate::{
    ElevationProvider, Hazard, HazardKind, HazardSide, HoleContext, MissDirection,
    PlayerStatistics, Severity,
};

/// Reports the same elevation everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatElevation(pub f64);

impl ElevationProvider for FlatElevation {
    fn elevation_ft(&self, _location: Coord<f64>) -> Option<f64> {
        Some(self.0)
    }
}

/// Never has a sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingElevation;

impl ElevationProvider for MissingElevation {
    fn elevation_ft(&self, _location: Coord<f64>) -> Option<f64> {
        None
    }
}

/// A tilted plane: elevation rises linearly with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridElevation {
    /// Elevation at `origin`, in feet.
    pub base_ft: f64,
    /// Reference coordinate.
    pub origin: Coord<f64>,
    /// Feet gained per degree of longitude (`x`) and latitude (`y`).
    pub rise_ft_per_deg: Coord<f64>,
}

impl GridElevation {
    /// A plane through `origin` at `base_ft` with the given rise.
    pub const fn new(base_ft: f64, origin: Coord<f64>, rise_ft_per_deg: Coord<f64>) -> Self {
        Self {
            base_ft,
            origin,
            rise_ft_per_deg,
        }
    }
}

impl ElevationProvider for GridElevation {
    fn elevation_ft(&self, location: Coord<f64>) -> Option<f64> {
        let offset = location - self.origin;
        Some(self.base_ft + offset.x * self.rise_ft_per_deg.x + offset.y * self.rise_ft_per_deg.y)
    }
}

/// A par 4 with a single death hazard: water right, five yards off the green.
pub fn water_right_hole() -> HoleContext {
    HoleContext::new(5, 4, 385).with_hazard(Hazard::new(
        HazardKind::Water,
        HazardSide::Right,
        5.0,
        Severity::Death,
    ))
}

/// A par 3 guarded by two severe hazards within ten yards.
pub fn tucked_pin_hole() -> HoleContext {
    HoleContext::new(12, 3, 155)
        .with_hazard(Hazard::new(
            HazardKind::Bunker,
            HazardSide::Left,
            4.0,
            Severity::Severe,
        ))
        .with_hazard(Hazard::new(
            HazardKind::Water,
            HazardSide::Front,
            8.0,
            Severity::Death,
        ))
}

/// Statistics for a player who tends to miss in `direction`.
pub fn statistics_missing(direction: MissDirection, rounds_analyzed: u32) -> PlayerStatistics {
    let mut stats = PlayerStatistics {
        rounds_analyzed,
        ..PlayerStatistics::default()
    };
    stats.tendencies.miss_direction = direction;
    stats
}
