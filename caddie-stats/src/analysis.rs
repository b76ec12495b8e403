//! Scoring patterns from round history.

use caddie_core::{
    MissDirection, ParAverages, PlayerStatistics, PlayerTendencies, ScoringDistribution,
    resolve_handicap, round_to,
};

use crate::defaults::{SLICE_HANDICAP, default_statistics, miss_depth_split};
use crate::{RoundRecord, ScoredHole, count_f64, percent, summarise_strokes_gained};

/// Par 5 scores at or above this count as a par-5 bogey.
const PAR5_BOGEY_STROKES: u32 = 6;
/// Par-5 bogey rate assumed when no par 5 has been played.
const DEFAULT_PAR5_BOGEY_RATE: f64 = 20.0;

/// Analyse a player's rounds.
///
/// Rounds without scores are skipped. When nothing usable remains the
/// handicap-bucketed [`default_statistics`] are returned instead.
///
/// Miss direction is only inferred from an explicit handicap over 10; the
/// short/long split and per-round heuristics fall back to a handicap of 15.
///
/// # Examples
/// ```
/// use caddie_stats::{HoleCard, HoleScore, RoundRecord, analyze_rounds};
///
/// let round = RoundRecord {
///     course_id: None,
///     holes: vec![HoleCard { number: 1, par: Some(4) }],
///     scores: vec![HoleScore { hole_number: Some(1), strokes: Some(5) }],
///     shots: Vec::new(),
/// };
/// let stats = analyze_rounds(&[round], Some(8.0));
/// assert_eq!(stats.rounds_analyzed, 1);
/// assert_eq!(stats.scoring_distribution.bogeys, 100.0);
/// ```
#[must_use]
pub fn analyze_rounds(rounds: &[RoundRecord], handicap: Option<f64>) -> PlayerStatistics {
    let played: Vec<&RoundRecord> = rounds
        .iter()
        .filter(|round| !round.scores.is_empty())
        .collect();
    let scores: Vec<ScoredHole> = played
        .iter()
        .flat_map(|round| round.scored_holes())
        .collect();
    if scores.is_empty() {
        log::debug!("no scored holes in {} rounds; using defaults", rounds.len());
        return default_statistics(handicap);
    }
    let rounds_analyzed = u32::try_from(played.len()).unwrap_or(u32::MAX);

    PlayerStatistics {
        handicap,
        rounds_analyzed,
        strokes_gained: summarise_strokes_gained(rounds, handicap),
        scoring_distribution: distribution(&scores),
        par_averages: par_averages(&scores),
        tendencies: tendencies(&scores, rounds_analyzed, handicap),
    }
}

/// Percentage of holes at each score to par, one decimal.
#[must_use]
pub fn distribution(scores: &[ScoredHole]) -> ScoringDistribution {
    let share = |keep: fn(i64) -> bool| {
        let count = scores.iter().filter(|score| keep(score.to_par())).count();
        round_to(percent(count, scores.len()), 1)
    };
    ScoringDistribution {
        eagles: share(|to_par| to_par <= -2),
        birdies: share(|to_par| to_par == -1),
        pars: share(|to_par| to_par == 0),
        bogeys: share(|to_par| to_par == 1),
        doubles: share(|to_par| to_par == 2),
        triples_plus: share(|to_par| to_par >= 3),
    }
}

/// Mean strokes on each par, falling back to the defaults for pars not
/// played.
#[expect(clippy::float_arithmetic, reason = "averages are ratios")]
#[must_use]
pub fn par_averages(scores: &[ScoredHole]) -> ParAverages {
    let fallback = ParAverages::default();
    let average = |par: u8, fallback: f64| {
        let strokes: Vec<u32> = scores
            .iter()
            .filter(|score| score.par == par)
            .map(|score| score.strokes)
            .collect();
        if strokes.is_empty() {
            return fallback;
        }
        let total: u64 = strokes.iter().copied().map(u64::from).sum();
        count_f64(total) / count_f64(strokes.len())
    };
    ParAverages {
        par3: average(3, fallback.par3),
        par4: average(4, fallback.par4),
        par5: average(5, fallback.par5),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "tendency heuristics are rates and handicap scalings"
)]
fn tendencies(scores: &[ScoredHole], rounds: u32, handicap: Option<f64>) -> PlayerTendencies {
    let resolved = resolve_handicap(handicap);
    let doubles = scores.iter().filter(|score| score.to_par() >= 2).count();
    let doubles_per_round = count_f64(doubles) / f64::from(rounds.max(1));

    let par5: Vec<&ScoredHole> = scores.iter().filter(|score| score.par == 5).collect();
    let par5_bogey_rate = if par5.is_empty() {
        DEFAULT_PAR5_BOGEY_RATE
    } else {
        let bogeys = par5
            .iter()
            .filter(|score| score.strokes >= PAR5_BOGEY_STROKES)
            .count();
        percent(bogeys, par5.len())
    };

    let miss_direction = match handicap.filter(|value| value.is_finite()) {
        Some(value) if value > SLICE_HANDICAP => MissDirection::Right,
        _ => MissDirection::Balanced,
    };
    let (miss_short_pct, miss_long_pct) = miss_depth_split(resolved);

    PlayerTendencies {
        miss_direction,
        miss_short_pct,
        miss_long_pct,
        three_putts_per_round: (resolved * 0.15).clamp(0.5, 5.0),
        doubles_per_round: round_to(doubles_per_round, 1),
        par5_bogey_rate: round_to(par5_bogey_rate, 1),
        ..PlayerTendencies::default()
    }
}
