//! A player's record on one hole.

use caddie_core::{HoleHistory, round_to};

use crate::{RoundRecord, ScoredHole};

/// Scores on `hole_number` across every round played on `course_id`.
///
/// Each score is compared with the par on its own round's card. Returns
/// `None` when the hole has never been played.
///
/// # Examples
/// ```
/// use caddie_stats::{HoleCard, HoleScore, RoundRecord, hole_history};
///
/// let round = RoundRecord {
///     course_id: Some("pebble".to_owned()),
///     holes: vec![HoleCard { number: 7, par: Some(3) }],
///     scores: vec![HoleScore { hole_number: Some(7), strokes: Some(2) }],
///     shots: Vec::new(),
/// };
/// let history = hole_history(&[round], "pebble", 7).expect("played once");
/// assert_eq!(history.times_played, 1);
/// assert_eq!(history.birdie_rate, 100.0);
/// ```
#[expect(clippy::float_arithmetic, reason = "averages and rates are ratios")]
#[must_use]
pub fn hole_history(rounds: &[RoundRecord], course_id: &str, hole_number: u8) -> Option<HoleHistory> {
    let scores: Vec<ScoredHole> = rounds
        .iter()
        .filter(|round| round.is_on(course_id))
        .flat_map(RoundRecord::scored_holes)
        .filter(|score| score.hole_number == hole_number)
        .collect();

    let best_score = scores.iter().map(|score| score.strokes).min()?;
    let worst_score = scores.iter().map(|score| score.strokes).max()?;
    let times_played = u32::try_from(scores.len()).unwrap_or(u32::MAX);
    let played = f64::from(times_played);
    let total: u64 = scores.iter().map(|score| u64::from(score.strokes)).sum();
    let birdies = scores.iter().filter(|score| score.to_par() < 0).count();
    let bogeys = scores.iter().filter(|score| score.to_par() > 0).count();

    Some(HoleHistory {
        times_played,
        avg_score: round_to(crate::count_f64(total) / played, 2),
        best_score,
        worst_score,
        birdie_rate: round_to(crate::percent(birdies, scores.len()), 1),
        bogey_rate: round_to(crate::percent(bogeys, scores.len()), 1),
    })
}
