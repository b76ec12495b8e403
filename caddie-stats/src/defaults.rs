//! Statistics assumed for a player with no recorded rounds.

use caddie_core::{
    MissDirection, ParAverages, PlayerStatistics, PlayerTendencies, ScoringDistribution,
    resolve_handicap,
};

/// Handicap above which players are assumed to slice.
pub(crate) const SLICE_HANDICAP: f64 = 10.0;

/// Handicap bands for the default profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandicapTier {
    /// Up to 5.
    Low,
    /// Over 5, up to 15.
    Mid,
    /// Over 15, up to 25.
    High,
    /// Over 25.
    Beginner,
}

impl HandicapTier {
    /// Band for `handicap`.
    #[must_use]
    pub const fn of(handicap: f64) -> Self {
        if handicap <= 5.0 {
            Self::Low
        } else if handicap <= 15.0 {
            Self::Mid
        } else if handicap <= 25.0 {
            Self::High
        } else {
            Self::Beginner
        }
    }

    /// Typical score-to-par distribution for the band.
    #[must_use]
    pub const fn distribution(self) -> ScoringDistribution {
        let (eagles, birdies, pars, bogeys, doubles, triples_plus) = match self {
            Self::Low => (1.0, 15.0, 50.0, 25.0, 7.0, 2.0),
            Self::Mid => (0.5, 8.0, 35.0, 35.0, 15.0, 6.5),
            Self::High => (0.2, 3.0, 20.0, 35.0, 25.0, 16.8),
            Self::Beginner => (0.0, 1.0, 10.0, 25.0, 30.0, 34.0),
        };
        ScoringDistribution {
            eagles,
            birdies,
            pars,
            bogeys,
            doubles,
            triples_plus,
        }
    }

    /// Typical averages by par for the band.
    #[must_use]
    pub const fn par_averages(self) -> ParAverages {
        let (par3, par4, par5) = match self {
            Self::Low => (3.1, 4.2, 4.9),
            Self::Mid => (3.5, 4.8, 5.3),
            Self::High => (4.0, 5.3, 6.0),
            Self::Beginner => (4.5, 5.8, 6.8),
        };
        ParAverages { par3, par4, par5 }
    }
}

/// Short/long miss split for a handicap.
pub(crate) const fn miss_depth_split(handicap: f64) -> (f64, f64) {
    if handicap > SLICE_HANDICAP {
        (58.0, 42.0)
    } else {
        (52.0, 48.0)
    }
}

/// Statistics for a player with no rounds, bucketed by handicap.
///
/// An absent handicap is treated as 15, so such players are assumed to
/// miss right.
///
/// # Examples
/// ```
/// use caddie_core::MissDirection;
/// use caddie_stats::default_statistics;
///
/// let stats = default_statistics(Some(22.0));
/// assert_eq!(stats.tendencies.miss_direction, MissDirection::Right);
/// assert_eq!(stats.scoring_distribution.triples_plus, 16.8);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "per-round heuristics scale with handicap"
)]
#[must_use]
pub fn default_statistics(handicap: Option<f64>) -> PlayerStatistics {
    let resolved = resolve_handicap(handicap);
    let tier = HandicapTier::of(resolved);
    let (miss_short_pct, miss_long_pct) = miss_depth_split(resolved);
    let per_round = (resolved * 0.15).max(0.5);

    PlayerStatistics {
        handicap,
        rounds_analyzed: 0,
        scoring_distribution: tier.distribution(),
        par_averages: tier.par_averages(),
        tendencies: PlayerTendencies {
            miss_direction: if resolved > SLICE_HANDICAP {
                MissDirection::Right
            } else {
                MissDirection::Balanced
            },
            miss_short_pct,
            miss_long_pct,
            three_putts_per_round: per_round,
            doubles_per_round: per_round,
            ..PlayerTendencies::default()
        },
        ..PlayerStatistics::default()
    }
}
