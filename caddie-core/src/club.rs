//! Clubs, club categories, and a player's carry-distance profile.
//!
//! External profiles name clubs in several ways (`"threeWood"`,
//! `"pitchingWedge"`, `"7iron"`). [`Club::parse`] maps every known spelling
//! onto one canonical variant and keeps anything else as
//! [`Club::Custom`], so lookups never silently fall through on a typo.
//!
//! # Examples
//! ```
//! use caddie_core::{Club, ClubCategory};
//!
//! assert_eq!(Club::parse("threeWood"), Club::ThreeWood);
//! assert_eq!(Club::SevenIron.id(), "7iron");
//! assert_eq!(Club::SevenIron.display_name(), "7 Iron");
//! assert_eq!(Club::parse("chipper").category(), ClubCategory::MidIron);
//! ```

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A club in the bag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Club {
    /// Driver.
    Driver,
    /// Three wood.
    ThreeWood,
    /// Five wood.
    FiveWood,
    /// Hybrid.
    Hybrid,
    /// Four iron.
    FourIron,
    /// Five iron.
    FiveIron,
    /// Six iron.
    SixIron,
    /// Seven iron.
    SevenIron,
    /// Eight iron.
    EightIron,
    /// Nine iron.
    NineIron,
    /// Pitching wedge.
    PitchingWedge,
    /// Gap wedge.
    GapWedge,
    /// Sand wedge.
    SandWedge,
    /// Lob wedge.
    LobWedge,
    /// A club outside the canonical set, kept under its original name.
    Custom(String),
}

impl Club {
    /// The fourteen canonical clubs, longest first.
    pub const CANONICAL: [Self; 14] = [
        Self::Driver,
        Self::ThreeWood,
        Self::FiveWood,
        Self::Hybrid,
        Self::FourIron,
        Self::FiveIron,
        Self::SixIron,
        Self::SevenIron,
        Self::EightIron,
        Self::NineIron,
        Self::PitchingWedge,
        Self::GapWedge,
        Self::SandWedge,
        Self::LobWedge,
    ];

    /// Resolve a club from a canonical id or an external profile name.
    ///
    /// Unrecognised names become [`Club::Custom`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "driver" => Self::Driver,
            "3wood" | "threeWood" => Self::ThreeWood,
            "5wood" | "fiveWood" => Self::FiveWood,
            "hybrid" => Self::Hybrid,
            "4iron" | "fourIron" => Self::FourIron,
            "5iron" | "fiveIron" => Self::FiveIron,
            "6iron" | "sixIron" => Self::SixIron,
            "7iron" | "sevenIron" => Self::SevenIron,
            "8iron" | "eightIron" => Self::EightIron,
            "9iron" | "nineIron" => Self::NineIron,
            "pw" | "pitchingWedge" => Self::PitchingWedge,
            "gw" | "gapWedge" => Self::GapWedge,
            "sw" | "sandWedge" => Self::SandWedge,
            "lw" | "lobWedge" => Self::LobWedge,
            other => Self::Custom(other.to_owned()),
        }
    }

    /// Canonical identifier, e.g. `"3wood"` or `"pw"`.
    pub fn id(&self) -> &str {
        match self {
            Self::Driver => "driver",
            Self::ThreeWood => "3wood",
            Self::FiveWood => "5wood",
            Self::Hybrid => "hybrid",
            Self::FourIron => "4iron",
            Self::FiveIron => "5iron",
            Self::SixIron => "6iron",
            Self::SevenIron => "7iron",
            Self::EightIron => "8iron",
            Self::NineIron => "9iron",
            Self::PitchingWedge => "pw",
            Self::GapWedge => "gw",
            Self::SandWedge => "sw",
            Self::LobWedge => "lw",
            Self::Custom(name) => name,
        }
    }

    /// Name suitable for display to a player.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Driver => "Driver",
            Self::ThreeWood => "3 Wood",
            Self::FiveWood => "5 Wood",
            Self::Hybrid => "Hybrid",
            Self::FourIron => "4 Iron",
            Self::FiveIron => "5 Iron",
            Self::SixIron => "6 Iron",
            Self::SevenIron => "7 Iron",
            Self::EightIron => "8 Iron",
            Self::NineIron => "9 Iron",
            Self::PitchingWedge => "PW",
            Self::GapWedge => "GW",
            Self::SandWedge => "SW",
            Self::LobWedge => "LW",
            Self::Custom(name) => name,
        }
    }

    /// Dispersion category. Custom clubs are treated as mid irons.
    pub const fn category(&self) -> ClubCategory {
        match self {
            Self::Driver => ClubCategory::Driver,
            Self::ThreeWood => ClubCategory::ThreeWood,
            Self::FiveWood => ClubCategory::FiveWood,
            Self::Hybrid => ClubCategory::Hybrid,
            Self::FourIron | Self::FiveIron => ClubCategory::LongIron,
            Self::SixIron | Self::SevenIron | Self::Custom(_) => ClubCategory::MidIron,
            Self::EightIron | Self::NineIron => ClubCategory::ShortIron,
            Self::PitchingWedge | Self::GapWedge | Self::SandWedge | Self::LobWedge => {
                ClubCategory::Wedge
            }
        }
    }

    /// Built-in carry distance in yards, used when a player supplies none.
    pub const fn default_carry(&self) -> Option<u32> {
        let yards = match self {
            Self::Driver => 250,
            Self::ThreeWood => 230,
            Self::FiveWood => 215,
            Self::Hybrid => 200,
            Self::FourIron => 190,
            Self::FiveIron => 180,
            Self::SixIron => 170,
            Self::SevenIron => 160,
            Self::EightIron => 150,
            Self::NineIron => 140,
            Self::PitchingWedge => 130,
            Self::GapWedge => 115,
            Self::SandWedge => 100,
            Self::LobWedge => 85,
            Self::Custom(_) => return None,
        };
        Some(yards)
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Club {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Club {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Club> for String {
    fn from(value: Club) -> Self {
        match value {
            Club::Custom(name) => name,
            canonical => canonical.id().to_owned(),
        }
    }
}

/// Shot-pattern category shared by clubs with similar dispersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClubCategory {
    /// Driver.
    Driver,
    /// Three wood.
    #[cfg_attr(feature = "serde", serde(rename = "3wood"))]
    ThreeWood,
    /// Five wood.
    #[cfg_attr(feature = "serde", serde(rename = "5wood"))]
    FiveWood,
    /// Hybrids.
    Hybrid,
    /// Four and five irons.
    LongIron,
    /// Six and seven irons, and unrecognised clubs.
    MidIron,
    /// Eight and nine irons.
    ShortIron,
    /// Every wedge.
    Wedge,
}

impl ClubCategory {
    /// Every category, longest clubs first.
    pub const ALL: [Self; 8] = [
        Self::Driver,
        Self::ThreeWood,
        Self::FiveWood,
        Self::Hybrid,
        Self::LongIron,
        Self::MidIron,
        Self::ShortIron,
        Self::Wedge,
    ];
}

/// Carry distances keyed by canonical club.
///
/// Construction drops non-positive distances and folds external club names
/// onto their canonical form.
///
/// # Examples
/// ```
/// use caddie_core::{Club, ClubDistances};
///
/// let clubs = ClubDistances::from_raw([("sevenIron", 155), ("pw", 0)]);
/// assert_eq!(clubs.get(&Club::SevenIron), Some(155));
/// assert_eq!(clubs.get(&Club::PitchingWedge), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, u32>")
)]
pub struct ClubDistances {
    carries: BTreeMap<Club, u32>,
}

impl ClubDistances {
    /// Normalise a raw mapping of club names to yards.
    pub fn from_raw<I, K>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let carries = raw
            .into_iter()
            .filter_map(|(name, yards)| {
                let carry = u32::try_from(yards).ok().filter(|carry| *carry > 0)?;
                Some((Club::parse(name.as_ref()), carry))
            })
            .collect();
        Self { carries }
    }

    /// The built-in distance table.
    pub fn defaults() -> Self {
        let carries = Club::CANONICAL
            .into_iter()
            .filter_map(|club| club.default_carry().map(|carry| (club, carry)))
            .collect();
        Self { carries }
    }

    /// Return `self`, or the built-in table when `self` is empty.
    pub fn or_defaults(self) -> Self {
        if self.is_empty() {
            log::warn!("club profile is empty; using default carry distances");
            Self::defaults()
        } else {
            self
        }
    }

    /// Insert or replace a carry distance. Zero distances are ignored.
    pub fn insert(&mut self, club: Club, carry: u32) {
        if carry > 0 {
            self.carries.insert(club, carry);
        }
    }

    /// Builder variant of [`ClubDistances::insert`].
    #[must_use]
    pub fn with_carry(mut self, club: Club, carry: u32) -> Self {
        self.insert(club, carry);
        self
    }

    /// Carry distance for `club`, if known.
    pub fn get(&self, club: &Club) -> Option<u32> {
        self.carries.get(club).copied()
    }

    /// Whether no distances are recorded.
    pub fn is_empty(&self) -> bool {
        self.carries.is_empty()
    }

    /// Number of clubs recorded.
    pub fn len(&self) -> usize {
        self.carries.len()
    }

    /// Iterate over clubs and carries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&Club, u32)> {
        self.carries.iter().map(|(club, carry)| (club, *carry))
    }

    /// Clubs sorted by carry, longest first. Ties keep canonical order.
    pub fn by_carry_desc(&self) -> Vec<(&Club, u32)> {
        let mut clubs: Vec<_> = self.iter().collect();
        clubs.sort_by_key(|&(_, carry)| std::cmp::Reverse(carry));
        clubs
    }
}

/// Fractional carries round to whole yards, ties to even.
impl From<BTreeMap<String, f64>> for ClubDistances {
    fn from(raw: BTreeMap<String, f64>) -> Self {
        Self::from_raw(
            raw.into_iter()
                .map(|(name, yards)| (name, crate::round_yards(yards))),
        )
    }
}

impl From<ClubDistances> for BTreeMap<String, u32> {
    fn from(value: ClubDistances) -> Self {
        value
            .carries
            .into_iter()
            .map(|(club, carry)| (String::from(club), carry))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ClubDistances {
    type Item = (&'a Club, &'a u32);
    type IntoIter = std::collections::btree_map::Iter<'a, Club, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.carries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("threeWood", Club::ThreeWood)]
    #[case("3wood", Club::ThreeWood)]
    #[case("pitchingWedge", Club::PitchingWedge)]
    #[case("lobWedge", Club::LobWedge)]
    #[case("9iron", Club::NineIron)]
    fn parses_external_and_canonical_names(#[case] raw: &str, #[case] expected: Club) {
        assert_eq!(Club::parse(raw), expected);
    }

    #[rstest]
    fn unknown_names_are_kept_verbatim() {
        let club = Club::parse("chipper");
        assert_eq!(club, Club::Custom("chipper".into()));
        assert_eq!(club.id(), "chipper");
        assert_eq!(club.category(), ClubCategory::MidIron);
        assert_eq!(club.default_carry(), None);
    }

    #[rstest]
    fn canonical_ids_round_trip() {
        for club in Club::CANONICAL {
            assert_eq!(Club::parse(club.id()), club);
        }
    }

    #[rstest]
    #[case(Club::FourIron, ClubCategory::LongIron)]
    #[case(Club::SevenIron, ClubCategory::MidIron)]
    #[case(Club::EightIron, ClubCategory::ShortIron)]
    #[case(Club::GapWedge, ClubCategory::Wedge)]
    fn irons_and_wedges_map_to_categories(#[case] club: Club, #[case] expected: ClubCategory) {
        assert_eq!(club.category(), expected);
    }

    #[rstest]
    fn non_positive_distances_are_dropped() {
        let clubs = ClubDistances::from_raw([("driver", 240), ("3wood", 0), ("5wood", -10)]);
        assert_eq!(clubs.len(), 1);
        assert_eq!(clubs.get(&Club::Driver), Some(240));
    }

    #[rstest]
    fn empty_profile_falls_back_to_defaults() {
        let clubs = ClubDistances::default().or_defaults();
        assert_eq!(clubs.len(), 14);
        assert_eq!(clubs.get(&Club::SevenIron), Some(160));
    }

    #[rstest]
    fn sorts_longest_first() {
        let clubs = ClubDistances::from_raw([("pw", 120), ("driver", 230), ("7iron", 150)]);
        let order: Vec<_> = clubs.by_carry_desc().into_iter().map(|(c, _)| c.clone()).collect();
        assert_eq!(order, vec![Club::Driver, Club::SevenIron, Club::PitchingWedge]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_external_profiles() {
        let clubs: ClubDistances =
            serde_json::from_str(r#"{"sevenIron": 155, "driver": 245, "lw": -1}"#)
                .expect("profile should decode");
        assert_eq!(clubs.get(&Club::SevenIron), Some(155));
        assert_eq!(clubs.get(&Club::Driver), Some(245));
        assert_eq!(clubs.len(), 2);
        let encoded = serde_json::to_string(&clubs).expect("profile should encode");
        assert_eq!(encoded, r#"{"7iron":155,"driver":245}"#);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn fractional_carries_round_to_whole_yards() {
        let clubs: ClubDistances =
            serde_json::from_str(r#"{"7iron": 152.5, "pw": 121.6, "lw": 0.4}"#)
                .expect("profile should decode");
        assert_eq!(clubs.get(&Club::SevenIron), Some(152));
        assert_eq!(clubs.get(&Club::PitchingWedge), Some(122));
        assert_eq!(clubs.get(&Club::LobWedge), None);
    }
}
