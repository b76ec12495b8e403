//! Player profiles and the statistics derived from round history.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ClubDistances;
use crate::hole::tagged_enum;

/// Handicap assumed when a player has not supplied one.
pub const DEFAULT_HANDICAP: f64 = 15.0;

/// What the engine knows about the player before any history.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerProfile {
    /// Handicap index, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub handicap: Option<f64>,
    /// Carry distances keyed by canonical club.
    #[cfg_attr(feature = "serde", serde(default))]
    pub club_distances: ClubDistances,
}

impl PlayerProfile {
    /// Build a profile.
    pub const fn new(handicap: Option<f64>, club_distances: ClubDistances) -> Self {
        Self {
            handicap,
            club_distances,
        }
    }

    /// Handicap, falling back to [`DEFAULT_HANDICAP`] when absent or not finite.
    pub fn handicap_or_default(&self) -> f64 {
        resolve_handicap(self.handicap)
    }
}

/// Resolve an optional handicap to a usable value.
pub fn resolve_handicap(handicap: Option<f64>) -> f64 {
    handicap
        .filter(|value| value.is_finite())
        .unwrap_or(DEFAULT_HANDICAP)
}

tagged_enum! {
    /// The player's dominant lateral miss.
    #[derive(Default)]
    MissDirection, "miss direction" {
        /// Misses tend left.
        Left => "left",
        /// Misses tend right.
        Right => "right",
        /// No dominant miss.
        #[default]
        Balanced => "balanced",
    }
}

/// Percentage of holes finished at each score relative to par.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringDistribution {
    /// Eagle or better.
    pub eagles: f64,
    /// Birdies.
    pub birdies: f64,
    /// Pars.
    pub pars: f64,
    /// Bogeys.
    pub bogeys: f64,
    /// Double bogeys.
    pub doubles: f64,
    /// Triple bogey or worse.
    pub triples_plus: f64,
}

impl ScoringDistribution {
    /// Sum of every bucket; close to 100 for derived distributions.
    pub fn total(&self) -> f64 {
        self.eagles + self.birdies + self.pars + self.bogeys + self.doubles + self.triples_plus
    }
}

/// Average strokes on par 3s, 4s, and 5s.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParAverages {
    /// Par 3 average.
    pub par3: f64,
    /// Par 4 average.
    pub par4: f64,
    /// Par 5 average.
    pub par5: f64,
}

impl Default for ParAverages {
    fn default() -> Self {
        Self {
            par3: 3.5,
            par4: 4.8,
            par5: 5.5,
        }
    }
}

/// Heuristic tendencies used to shape aim and miss guidance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerTendencies {
    /// Dominant lateral miss.
    pub miss_direction: MissDirection,
    /// Percentage of misses that come up short.
    pub miss_short_pct: f64,
    /// Percentage of misses that go long.
    pub miss_long_pct: f64,
    /// Three-putts per round.
    pub three_putts_per_round: f64,
    /// Double bogeys or worse per round.
    pub doubles_per_round: f64,
    /// Percentage of par 5s finished in six or more.
    pub par5_bogey_rate: f64,
    /// Bogey rate from inside 150 yards.
    pub scoring_zone_bogey_rate: f64,
}

impl Default for PlayerTendencies {
    fn default() -> Self {
        Self {
            miss_direction: MissDirection::Balanced,
            miss_short_pct: 55.0,
            miss_long_pct: 45.0,
            three_putts_per_round: 2.0,
            doubles_per_round: 2.0,
            par5_bogey_rate: 20.0,
            scoring_zone_bogey_rate: 25.0,
        }
    }
}

/// Strokes gained by category. Zero until shot-level data exists.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrokesGainedSummary {
    /// Tee shots on par 4s and 5s.
    pub off_the_tee: f64,
    /// Approach shots.
    pub approach: f64,
    /// Around the green.
    pub short_game: f64,
    /// On the green.
    pub putting: f64,
    /// Sum of every category.
    pub total: f64,
}

/// Statistics derived from a player's rounds. Never edited by hand.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerStatistics {
    /// Handicap the statistics were derived with.
    pub handicap: Option<f64>,
    /// Rounds that contributed at least one score.
    pub rounds_analyzed: u32,
    /// Strokes gained by category.
    pub strokes_gained: StrokesGainedSummary,
    /// Score-to-par distribution in percent.
    pub scoring_distribution: ScoringDistribution,
    /// Averages by par.
    pub par_averages: ParAverages,
    /// Tendencies.
    pub tendencies: PlayerTendencies,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 15.0)]
    #[case(Some(f64::NAN), 15.0)]
    #[case(Some(0.0), 0.0)]
    #[case(Some(22.4), 22.4)]
    fn resolves_handicap(#[case] handicap: Option<f64>, #[case] expected: f64) {
        assert!((resolve_handicap(handicap) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn unknown_tendency_is_balanced() {
        assert_eq!(MissDirection::default(), MissDirection::Balanced);
        assert_eq!(
            PlayerTendencies::default().miss_direction,
            MissDirection::Balanced
        );
    }

    #[rstest]
    fn default_tendencies_are_balanced() {
        let stats = PlayerStatistics::default();
        assert_eq!(stats.tendencies.miss_direction, MissDirection::Balanced);
        assert_eq!(stats.rounds_analyzed, 0);
    }
}
