//! Hole geometry, hazards, and green-slope summaries.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

macro_rules! tagged_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $tag))]
                $variant,
            )+
        }

        impl $name {
            /// Return the lowercase tag used in data contracts.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($tag => Ok(Self::$variant),)+
                    _ => Err($crate::ParseEnumError::new($label, s)),
                }
            }
        }
    };
}

pub(crate) use tagged_enum;

tagged_enum! {
    /// The kind of trouble a hazard represents.
    HazardKind, "hazard kind" {
        /// Lakes, ponds, and creeks.
        Water => "water",
        /// Sand bunkers.
        Bunker => "bunker",
        /// Out of bounds.
        OutOfBounds => "ob",
        /// Trees and heavy cover.
        Trees => "trees",
    }
}

impl HazardKind {
    /// Short label used in player-facing descriptions.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Bunker => "bunker",
            Self::OutOfBounds => "OB",
            Self::Trees => "trees",
        }
    }
}

tagged_enum! {
    /// Where a hazard sits relative to the green, looking from the tee.
    HazardSide, "hazard side" {
        /// Left of the green.
        Left => "left",
        /// Right of the green.
        Right => "right",
        /// Short of the green.
        Front => "front",
        /// Over the green.
        Back => "back",
        /// No orientation could be determined.
        Center => "center",
    }
}

/// How costly it is to find a hazard, from mild to death.
///
/// The ordering follows the penalty: `Mild < Moderate < Severe < Death`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Easy recovery.
    Mild,
    /// Costs roughly half a stroke.
    Moderate,
    /// Costs roughly a stroke.
    Severe,
    /// Stroke and distance or worse.
    Death,
}

impl Severity {
    /// Return the lowercase tag used in data contracts.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Death => "death",
        }
    }

    /// Weight used when comparing miss sides: 1, 2, 3, or 5.
    pub const fn danger_score(&self) -> u8 {
        match self {
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
            Self::Death => 5,
        }
    }

    /// Whether this severity counts towards a tucked pin.
    pub const fn is_severe_or_worse(&self) -> bool {
        matches!(self, Self::Severe | Self::Death)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mild" => Ok(Self::Mild),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            "death" => Ok(Self::Death),
            _ => Err(ParseEnumError::new("severity", s)),
        }
    }
}

/// A classified hazard near the green.
///
/// Hazards are immutable once built; the distance accessor never reports a
/// negative or non-finite value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hazard {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: HazardKind,
    side: HazardSide,
    #[cfg_attr(feature = "serde", serde(default))]
    distance_from_green: f64,
    penalty_severity: Severity,
}

impl Hazard {
    /// Build a hazard. Negative or non-finite distances become zero.
    pub fn new(
        kind: HazardKind,
        side: HazardSide,
        distance_from_green: f64,
        penalty_severity: Severity,
    ) -> Self {
        Self {
            kind,
            side,
            distance_from_green: non_negative(distance_from_green),
            penalty_severity,
        }
    }

    /// The kind of trouble.
    pub const fn kind(&self) -> HazardKind {
        self.kind
    }

    /// Which side of the green the hazard is on.
    pub const fn side(&self) -> HazardSide {
        self.side
    }

    /// Distance from the green in yards.
    pub fn distance_from_green(&self) -> f64 {
        non_negative(self.distance_from_green)
    }

    /// Penalty severity.
    pub const fn severity(&self) -> Severity {
        self.penalty_severity
    }

    /// Whether the hazard lies within `yards` of the green.
    pub fn within(&self, yards: f64) -> bool {
        self.distance_from_green() <= yards
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

tagged_enum! {
    /// Severity tier of a green's slope.
    SlopeSeverity, "slope severity" {
        /// Under one percent.
        Flat => "flat",
        /// One to two and a half percent.
        Mild => "mild",
        /// Two and a half to five percent.
        Moderate => "moderate",
        /// Five percent or more.
        Severe => "severe",
    }
}

impl SlopeSeverity {
    /// Tier for a percent grade.
    pub fn from_grade(percent_grade: f64) -> Self {
        if percent_grade < 1.0 {
            Self::Flat
        } else if percent_grade < 2.5 {
            Self::Mild
        } else if percent_grade < 5.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }
}

/// Summary of how a green falls away.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GreenSlope {
    /// Downhill direction in degrees clockwise from north.
    #[cfg_attr(feature = "serde", serde(rename = "direction", alias = "direction_deg"))]
    pub direction_deg: f64,
    /// Severity tier.
    pub severity: SlopeSeverity,
    /// Percent grade.
    pub percent_grade: f64,
    /// Player-facing description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// A player's scoring record on one hole.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HoleHistory {
    /// Number of recorded scores.
    pub times_played: u32,
    /// Mean score, rounded to two decimals.
    pub avg_score: f64,
    /// Lowest score.
    pub best_score: u32,
    /// Highest score.
    pub worst_score: u32,
    /// Percentage of scores under par, one decimal.
    pub birdie_rate: f64,
    /// Percentage of scores over par, one decimal.
    pub bogey_rate: f64,
}

const fn default_handicap_rating() -> u8 {
    9
}

/// Everything the engine knows about the hole being played.
///
/// Effective yardage is derived on demand from [`HoleContext::yards`] and
/// [`HoleContext::elevation_change_ft`] and is never stored.
///
/// # Examples
/// ```
/// use caddie_core::{Hazard, HazardKind, HazardSide, HoleContext, Severity};
///
/// let hole = HoleContext::new(7, 4, 410)
///     .with_elevation_change(-12.0)
///     .with_hazard(Hazard::new(HazardKind::Water, HazardSide::Right, 5.0, Severity::Death));
/// assert_eq!(hole.effective_yards(), 406);
/// assert_eq!(hole.hazards.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HoleContext {
    /// Hole number on the card.
    pub hole_number: u8,
    /// Par.
    pub par: u8,
    /// Card yardage.
    pub yards: u32,
    /// Stroke index.
    #[cfg_attr(feature = "serde", serde(default = "default_handicap_rating"))]
    pub handicap_rating: u8,
    /// Green elevation minus tee elevation in feet; positive is uphill.
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation_change_ft: f64,
    /// Green-slope summary, when elevation samples were available.
    #[cfg_attr(feature = "serde", serde(default))]
    pub green_slope: Option<GreenSlope>,
    /// Hazards around the green, in classification order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hazards: Vec<Hazard>,
    /// The player's scoring record on this hole.
    #[cfg_attr(feature = "serde", serde(default, rename = "player_history"))]
    pub history: Option<HoleHistory>,
}

impl HoleContext {
    /// A hole with no elevation change, slope, hazards, or history.
    pub const fn new(hole_number: u8, par: u8, yards: u32) -> Self {
        Self {
            hole_number,
            par,
            yards,
            handicap_rating: default_handicap_rating(),
            elevation_change_ft: 0.0,
            green_slope: None,
            hazards: Vec::new(),
            history: None,
        }
    }

    /// Set the elevation change in feet.
    #[must_use]
    pub const fn with_elevation_change(mut self, feet: f64) -> Self {
        self.elevation_change_ft = feet;
        self
    }

    /// Set the stroke index.
    #[must_use]
    pub const fn with_handicap_rating(mut self, rating: u8) -> Self {
        self.handicap_rating = rating;
        self
    }

    /// Append a hazard.
    #[must_use]
    pub fn with_hazard(mut self, hazard: Hazard) -> Self {
        self.hazards.push(hazard);
        self
    }

    /// Attach a green-slope summary.
    #[must_use]
    pub fn with_green_slope(mut self, slope: GreenSlope) -> Self {
        self.green_slope = Some(slope);
        self
    }

    /// Attach the player's record on this hole.
    #[must_use]
    pub fn with_history(mut self, history: HoleHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Elevation change, with non-finite values treated as flat.
    pub fn elevation_change(&self) -> f64 {
        if self.elevation_change_ft.is_finite() {
            self.elevation_change_ft
        } else {
            0.0
        }
    }

    /// Card yardage adjusted by one yard per three feet of elevation.
    ///
    /// Never less than one yard.
    pub fn effective_yards(&self) -> u32 {
        let delta = crate::round_yards(self.elevation_change() / 3.0);
        let yards = i64::from(self.yards).saturating_add(delta).max(1);
        u32::try_from(yards).unwrap_or(u32::MAX)
    }

    /// Number of hazards with [`Severity::Death`].
    pub fn death_hazard_count(&self) -> usize {
        self.hazards
            .iter()
            .filter(|hazard| hazard.severity() == Severity::Death)
            .count()
    }
}
