//! Pick a club for a played distance.

use caddie_core::{Club, ClubDistances};

/// Yards of slack allowed above a club's rated carry.
///
/// Rated carries are comfortable distances, not maximums.
const CARRY_TOLERANCE: i64 = 8;

/// Club used when no table is available at all.
const FALLBACK_CARRY: u32 = 160;

/// How strongly to favour a longer club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bias {
    /// Club down: treat the target as five yards shorter.
    Aggressive,
    /// No shift.
    Moderate,
    /// Club up: treat the target as five yards longer.
    Conservative,
}

impl Bias {
    /// Signed shift applied to the target.
    #[must_use]
    pub const fn shift_yards(self) -> i64 {
        match self {
            Self::Aggressive => -5,
            Self::Moderate => 0,
            Self::Conservative => 5,
        }
    }
}

/// A selected club and its rated carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubChoice {
    /// Club to hit.
    pub club: Club,
    /// Rated carry in yards.
    pub carry_yards: u32,
}

/// Select the longest club whose carry fits the biased target.
///
/// Clubs are scanned longest first; the first carry within
/// `target + bias + 8` wins. When nothing fits, the shortest club is used.
/// An empty table falls back to the built-in distances.
///
/// # Examples
/// ```
/// use caddie_advisor::{Bias, select_club};
/// use caddie_core::{Club, ClubDistances};
///
/// let choice = select_club(150, &ClubDistances::defaults(), Bias::Conservative);
/// assert_eq!(choice.club, Club::SevenIron);
/// assert_eq!(choice.carry_yards, 160);
/// ```
#[must_use]
pub fn select_club(target_yards: u32, clubs: &ClubDistances, bias: Bias) -> ClubChoice {
    let table = clubs.clone().or_defaults();

    let ceiling = i64::from(target_yards)
        .saturating_add(bias.shift_yards())
        .saturating_add(CARRY_TOLERANCE);
    let ordered = table.by_carry_desc();
    let chosen = ordered
        .iter()
        .find(|(_, carry)| i64::from(*carry) <= ceiling)
        .or_else(|| ordered.last());

    chosen.map_or(
        ClubChoice {
            club: Club::SevenIron,
            carry_yards: FALLBACK_CARRY,
        },
        |(club, carry)| ClubChoice {
            club: (*club).clone(),
            carry_yards: *carry,
        },
    )
}

#[cfg(test)]
mod tests {
    //! Club selection against the default and custom tables.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn defaults() -> ClubDistances {
        ClubDistances::defaults()
    }

    #[rstest]
    #[case(150, Bias::Moderate, Club::EightIron)]
    #[case(150, Bias::Conservative, Club::SevenIron)]
    #[case(145, Bias::Aggressive, Club::NineIron)]
    #[case(150, Bias::Aggressive, Club::EightIron)]
    #[case(245, Bias::Moderate, Club::Driver)]
    #[case(400, Bias::Moderate, Club::Driver)]
    #[case(122, Bias::Moderate, Club::PitchingWedge)]
    fn picks_longest_fitting_club(
        defaults: ClubDistances,
        #[case] target: u32,
        #[case] bias: Bias,
        #[case] expected: Club,
    ) {
        assert_eq!(select_club(target, &defaults, bias).club, expected);
    }

    #[rstest]
    fn short_targets_fall_back_to_the_shortest_club(defaults: ClubDistances) {
        let choice = select_club(20, &defaults, Bias::Moderate);
        assert_eq!(choice.club, Club::LobWedge);
        assert_eq!(choice.carry_yards, 85);
    }

    #[rstest]
    fn empty_profile_uses_defaults() {
        let choice = select_club(150, &ClubDistances::default(), Bias::Moderate);
        assert_eq!(choice.club, Club::EightIron);
        assert_eq!(choice.carry_yards, 150);
    }

    #[rstest]
    fn custom_clubs_take_part() {
        let clubs = ClubDistances::default()
            .with_carry(Club::Custom("chipper".to_owned()), 60)
            .with_carry(Club::SevenIron, 150);
        let choice = select_club(55, &clubs, Bias::Moderate);
        assert_eq!(choice.club, Club::Custom("chipper".to_owned()));
        assert_eq!(choice.carry_yards, 60);
    }
}
