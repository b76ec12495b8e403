//! Shot-pattern statistics by club category and handicap.
//!
//! Each category carries a table of (width, depth, short bias) at handicaps
//! 0, 5, 10, 15, 20, 25, and 30. Lookups clamp the handicap to `0..=30` and
//! interpolate between breakpoints.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::interpolate::{Lerp, PiecewiseLinear};
use crate::{Club, ClubCategory, resolve_handicap};

/// Shot pattern for one club at one skill level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dispersion {
    /// Total left-to-right spread (two standard deviations), yards.
    pub width_yards: f64,
    /// Total short-to-long spread (two standard deviations), yards.
    pub depth_yards: f64,
    /// Percentage of misses that finish short.
    pub short_bias_pct: f64,
}

impl Lerp for Dispersion {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            width_yards: self.width_yards.lerp(other.width_yards, t),
            depth_yards: self.depth_yards.lerp(other.depth_yards, t),
            short_bias_pct: self.short_bias_pct.lerp(other.short_bias_pct, t),
        }
    }
}

impl Dispersion {
    /// Whether a hazard at `hazard_offset` yards falls inside the pattern's
    /// half-width around `aim_offset`.
    ///
    /// # Examples
    /// ```
    /// use caddie_core::Dispersion;
    ///
    /// let pattern = Dispersion { width_yards: 30.0, depth_yards: 20.0, short_bias_pct: 55.0 };
    /// assert!(pattern.covers_hazard(0.0, 14.0));
    /// assert!(!pattern.covers_hazard(0.0, 15.0));
    /// ```
    pub fn covers_hazard(&self, aim_offset: f64, hazard_offset: f64) -> bool {
        (hazard_offset - aim_offset).abs() < self.width_yards / 2.0
    }
}

const fn pattern(width_yards: f64, depth_yards: f64, short_bias_pct: f64) -> Dispersion {
    Dispersion {
        width_yards,
        depth_yards,
        short_bias_pct,
    }
}

type Table = [(f64, Dispersion); 7];

static DRIVER: Table = [
    (0.0, pattern(42.0, 30.0, 40.0)),
    (5.0, pattern(52.0, 35.0, 42.0)),
    (10.0, pattern(65.0, 40.0, 45.0)),
    (15.0, pattern(75.0, 48.0, 50.0)),
    (20.0, pattern(85.0, 55.0, 52.0)),
    (25.0, pattern(95.0, 60.0, 55.0)),
    (30.0, pattern(110.0, 70.0, 58.0)),
];

static THREE_WOOD: Table = [
    (0.0, pattern(36.0, 28.0, 45.0)),
    (5.0, pattern(45.0, 33.0, 48.0)),
    (10.0, pattern(55.0, 38.0, 50.0)),
    (15.0, pattern(65.0, 44.0, 53.0)),
    (20.0, pattern(75.0, 50.0, 55.0)),
    (25.0, pattern(85.0, 56.0, 57.0)),
    (30.0, pattern(98.0, 65.0, 60.0)),
];

static FIVE_WOOD: Table = [
    (0.0, pattern(34.0, 26.0, 48.0)),
    (5.0, pattern(42.0, 30.0, 50.0)),
    (10.0, pattern(52.0, 36.0, 52.0)),
    (15.0, pattern(62.0, 42.0, 55.0)),
    (20.0, pattern(72.0, 48.0, 57.0)),
    (25.0, pattern(82.0, 54.0, 58.0)),
    (30.0, pattern(94.0, 62.0, 60.0)),
];

static HYBRID: Table = [
    (0.0, pattern(32.0, 24.0, 48.0)),
    (5.0, pattern(40.0, 28.0, 50.0)),
    (10.0, pattern(50.0, 34.0, 52.0)),
    (15.0, pattern(60.0, 40.0, 55.0)),
    (20.0, pattern(68.0, 46.0, 57.0)),
    (25.0, pattern(78.0, 52.0, 58.0)),
    (30.0, pattern(90.0, 60.0, 60.0)),
];

static LONG_IRON: Table = [
    (0.0, pattern(28.0, 22.0, 50.0)),
    (5.0, pattern(36.0, 26.0, 52.0)),
    (10.0, pattern(45.0, 32.0, 54.0)),
    (15.0, pattern(56.0, 40.0, 56.0)),
    (20.0, pattern(65.0, 46.0, 58.0)),
    (25.0, pattern(74.0, 52.0, 60.0)),
    (30.0, pattern(85.0, 60.0, 62.0)),
];

static MID_IRON: Table = [
    (0.0, pattern(24.0, 18.0, 52.0)),
    (5.0, pattern(30.0, 22.0, 54.0)),
    (10.0, pattern(38.0, 28.0, 56.0)),
    (15.0, pattern(48.0, 36.0, 58.0)),
    (20.0, pattern(58.0, 42.0, 60.0)),
    (25.0, pattern(66.0, 48.0, 62.0)),
    (30.0, pattern(76.0, 56.0, 64.0)),
];

static SHORT_IRON: Table = [
    (0.0, pattern(18.0, 14.0, 54.0)),
    (5.0, pattern(24.0, 18.0, 56.0)),
    (10.0, pattern(32.0, 24.0, 58.0)),
    (15.0, pattern(40.0, 30.0, 60.0)),
    (20.0, pattern(48.0, 36.0, 62.0)),
    (25.0, pattern(56.0, 42.0, 64.0)),
    (30.0, pattern(66.0, 50.0, 66.0)),
];

static WEDGE: Table = [
    (0.0, pattern(14.0, 10.0, 56.0)),
    (5.0, pattern(18.0, 14.0, 58.0)),
    (10.0, pattern(24.0, 18.0, 60.0)),
    (15.0, pattern(30.0, 24.0, 62.0)),
    (20.0, pattern(38.0, 30.0, 64.0)),
    (25.0, pattern(44.0, 36.0, 66.0)),
    (30.0, pattern(52.0, 42.0, 68.0)),
];

impl ClubCategory {
    /// Breakpoint table for this category.
    pub const fn dispersion_table(self) -> PiecewiseLinear<Dispersion> {
        let table: &'static Table = match self {
            Self::Driver => &DRIVER,
            Self::ThreeWood => &THREE_WOOD,
            Self::FiveWood => &FIVE_WOOD,
            Self::Hybrid => &HYBRID,
            Self::LongIron => &LONG_IRON,
            Self::MidIron => &MID_IRON,
            Self::ShortIron => &SHORT_IRON,
            Self::Wedge => &WEDGE,
        };
        PiecewiseLinear::new(table).with_clamp(0.0, 30.0)
    }

    /// Shot pattern for this category at `handicap`.
    pub fn dispersion(self, handicap: f64) -> Dispersion {
        self.dispersion_table()
            .at(handicap)
            .unwrap_or(pattern(48.0, 36.0, 58.0))
    }
}

/// Shot pattern for `club` at `handicap`, defaulting to a 15 handicap.
///
/// # Examples
/// ```
/// use caddie_core::{Club, dispersion};
///
/// let pattern = dispersion(&Club::SevenIron, Some(10.0));
/// assert_eq!(pattern.width_yards, 38.0);
/// ```
pub fn dispersion(club: &Club, handicap: Option<f64>) -> Dispersion {
    club.category().dispersion(resolve_handicap(handicap))
}
