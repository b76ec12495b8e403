//! Expected strokes to hole out, and strokes gained for a single shot.
//!
//! Baselines come from tour-level tables per lie, scaled by a handicap
//! multiplier. Green distances are in feet; every other lie is in yards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hole::tagged_enum;
use crate::interpolate::PiecewiseLinear;
use crate::resolve_handicap;

tagged_enum! {
    /// Surface the ball rests on.
    Lie, "lie" {
        /// Teeing ground.
        Tee => "tee",
        /// Fairway.
        Fairway => "fairway",
        /// Rough.
        Rough => "rough",
        /// Bunker sand.
        Sand => "sand",
        /// Putting surface; distances in feet.
        Green => "green",
    }
}

static TEE: [(f64, f64); 23] = [
    (100.0, 2.85),
    (120.0, 3.00),
    (140.0, 3.15),
    (160.0, 3.28),
    (180.0, 3.40),
    (200.0, 3.50),
    (220.0, 3.58),
    (240.0, 3.65),
    (260.0, 3.70),
    (280.0, 3.75),
    (300.0, 3.80),
    (320.0, 3.84),
    (340.0, 3.88),
    (360.0, 3.92),
    (380.0, 3.96),
    (400.0, 4.00),
    (420.0, 4.05),
    (440.0, 4.08),
    (460.0, 4.12),
    (480.0, 4.15),
    (500.0, 4.20),
    (550.0, 4.30),
    (600.0, 4.40),
];

static FAIRWAY: [(f64, f64); 23] = [
    (30.0, 2.47),
    (40.0, 2.50),
    (50.0, 2.52),
    (60.0, 2.55),
    (70.0, 2.58),
    (80.0, 2.62),
    (90.0, 2.66),
    (100.0, 2.70),
    (110.0, 2.74),
    (120.0, 2.78),
    (125.0, 2.80),
    (130.0, 2.82),
    (140.0, 2.86),
    (150.0, 2.92),
    (160.0, 2.98),
    (170.0, 3.05),
    (175.0, 3.08),
    (180.0, 3.12),
    (190.0, 3.18),
    (200.0, 3.25),
    (220.0, 3.40),
    (240.0, 3.50),
    (260.0, 3.60),
];

static ROUGH: [(f64, f64); 14] = [
    (20.0, 2.63),
    (30.0, 2.68),
    (40.0, 2.72),
    (50.0, 2.75),
    (60.0, 2.78),
    (80.0, 2.85),
    (100.0, 2.95),
    (120.0, 3.00),
    (130.0, 3.05),
    (140.0, 3.10),
    (150.0, 3.15),
    (160.0, 3.30),
    (180.0, 3.45),
    (200.0, 3.60),
];

static SAND: [(f64, f64); 6] = [
    (10.0, 2.30),
    (20.0, 2.43),
    (30.0, 2.53),
    (40.0, 2.60),
    (50.0, 2.70),
    (60.0, 2.80),
];

static GREEN_FEET: [(f64, f64); 20] = [
    (1.0, 1.02),
    (2.0, 1.06),
    (3.0, 1.13),
    (4.0, 1.20),
    (5.0, 1.28),
    (6.0, 1.38),
    (8.0, 1.50),
    (10.0, 1.63),
    (15.0, 1.80),
    (20.0, 1.94),
    (25.0, 2.02),
    (30.0, 2.10),
    (35.0, 2.14),
    (40.0, 2.20),
    (45.0, 2.25),
    (50.0, 2.30),
    (60.0, 2.40),
    (70.0, 2.50),
    (80.0, 2.55),
    (90.0, 2.60),
];

static HANDICAP_MULTIPLIER: [(f64, f64); 8] = [
    (0.0, 1.00),
    (5.0, 1.06),
    (10.0, 1.14),
    (15.0, 1.22),
    (20.0, 1.32),
    (25.0, 1.42),
    (30.0, 1.55),
    (36.0, 1.70),
];

impl Lie {
    /// Tour baseline table for this lie.
    pub const fn baseline(self) -> PiecewiseLinear<f64> {
        let table: &'static [(f64, f64)] = match self {
            Self::Tee => &TEE,
            Self::Fairway => &FAIRWAY,
            Self::Rough => &ROUGH,
            Self::Sand => &SAND,
            Self::Green => &GREEN_FEET,
        };
        PiecewiseLinear::new(table)
    }
}

/// Multiplier applied to tour baselines for a handicap, clamped to `0..=36`.
///
/// Absent handicaps resolve to 15. The result is never below `1.0`.
pub fn handicap_multiplier(handicap: Option<f64>) -> f64 {
    PiecewiseLinear::new(&HANDICAP_MULTIPLIER)
        .with_clamp(0.0, 36.0)
        .at(resolve_handicap(handicap))
        .unwrap_or(1.0)
        .max(1.0)
}

/// Expected strokes to hole out from `distance` on `lie`.
///
/// # Examples
/// ```
/// use caddie_core::{Lie, expected_strokes};
///
/// let scratch = expected_strokes(150.0, Lie::Fairway, Some(0.0));
/// assert!((scratch - 2.92).abs() < 1e-9);
/// ```
pub fn expected_strokes(distance: f64, lie: Lie, handicap: Option<f64>) -> f64 {
    let base = lie.baseline().at(distance).unwrap_or(3.0);
    base * handicap_multiplier(handicap)
}

/// Where the ball finished after a shot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "state", rename_all = "snake_case"))]
pub enum BallPosition {
    /// The ball is still in play.
    InPlay {
        /// Yards to the hole, or feet on the green.
        distance: f64,
        /// Surface.
        lie: Lie,
    },
    /// The ball is in the hole.
    Holed,
}

impl BallPosition {
    /// Expected strokes remaining from this position.
    pub fn expected_strokes(self, handicap: Option<f64>) -> f64 {
        match self {
            Self::InPlay { distance, lie } => expected_strokes(distance, lie, handicap),
            Self::Holed => 0.0,
        }
    }
}

/// Strokes gained by one shot: `expected(before) - expected(after) - taken`.
///
/// Positive values beat the expectation for the player's handicap.
///
/// # Examples
/// ```
/// use caddie_core::{BallPosition, Lie, strokes_gained};
///
/// let start = BallPosition::InPlay { distance: 5.0, lie: Lie::Green };
/// let gained = strokes_gained(start, BallPosition::Holed, 1, Some(0.0));
/// assert!((gained - 0.28).abs() < 1e-9);
/// ```
pub fn strokes_gained(
    start: BallPosition,
    end: BallPosition,
    strokes_taken: u32,
    handicap: Option<f64>,
) -> f64 {
    start.expected_strokes(handicap) - end.expected_strokes(handicap) - f64::from(strokes_taken)
}
