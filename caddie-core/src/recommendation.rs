//! The structured recommendation returned for every shot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Club;
use crate::hole::tagged_enum;

tagged_enum! {
    /// The physical cause behind a distance adjustment.
    AdjustmentKind, "adjustment kind" {
        /// Uphill or downhill.
        Elevation => "elevation",
        /// Head, tail, or cross wind.
        Wind => "wind",
        /// Air temperature.
        Temperature => "temperature",
        /// Course altitude.
        Altitude => "altitude",
        /// Turf firmness.
        Conditions => "conditions",
    }
}

/// One named change to the playing distance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShotAdjustment {
    /// What caused the change.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: AdjustmentKind,
    /// Signed change in yards; positive plays longer.
    pub yards: i64,
    /// Player-facing description.
    pub description: String,
}

impl ShotAdjustment {
    /// Build an adjustment.
    pub fn new(kind: AdjustmentKind, yards: i64, description: impl Into<String>) -> Self {
        Self {
            kind,
            yards,
            description: description.into(),
        }
    }
}

tagged_enum! {
    /// Traffic-light rating of how safe it is to aim at the flag.
    PinLight, "pin light" {
        /// Fire at the flag.
        Green => "green",
        /// Aim between the flag and the centre.
        Yellow => "yellow",
        /// Aim at the centre of the green.
        Red => "red",
    }
}

tagged_enum! {
    /// How much risk the recommendation accepts.
    Aggressiveness, "aggressiveness" {
        /// Play away from trouble.
        Conservative => "conservative",
        /// Standard strategy.
        Moderate => "moderate",
        /// Attack.
        Aggressive => "aggressive",
    }
}

tagged_enum! {
    /// Where a miss should finish.
    MissPreference, "miss side" {
        /// Left of the target.
        Left => "left",
        /// Right of the target.
        Right => "right",
        /// Short of the target.
        Short => "short",
        /// Past the target.
        Long => "long",
    }
}

impl MissPreference {
    /// The side directly across from this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Short => Self::Long,
            Self::Long => Self::Short,
        }
    }
}

/// Where to aim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AimPoint {
    /// Player-facing description.
    pub description: String,
}

/// Which side to miss on and which to avoid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MissSide {
    /// Safe side.
    pub preferred: MissPreference,
    /// Why the safe side is safe.
    pub description: String,
    /// The side to stay away from.
    pub avoid_side: MissPreference,
    /// Why it should be avoided.
    pub avoid: String,
}

/// A complete shot recommendation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaddieRecommendation {
    /// Club to hit.
    pub club: Club,
    /// Rated carry of the chosen club.
    pub club_carry_yards: u32,
    /// Distance the shot plays after adjustments.
    pub target_yards: u32,
    /// Measured distance.
    pub raw_yards: u32,
    /// Crosswind drift in yards. Positive when the wind comes from the
    /// player's right and pushes the ball left.
    pub crosswind_drift_yards: i64,
    /// Where to aim.
    pub aim_point: AimPoint,
    /// Ordered, player-facing reasoning.
    pub reasoning: Vec<String>,
    /// Miss-side guidance.
    pub miss_side: MissSide,
    /// Every adjustment that passed its threshold, in evaluation order.
    pub adjustments: Vec<ShotAdjustment>,
    /// Pin traffic light.
    pub pin_light: PinLight,
    /// Confidence in `0.0..=0.95`.
    pub confidence: f64,
    /// Risk posture.
    pub aggressiveness: Aggressiveness,
    /// Expected strokes to hole out from the raw distance.
    pub expected_score: f64,
}
