//! Strokes gained by category from tracked shots.

use caddie_core::{BallPosition, Lie, StrokesGainedSummary, round_to, strokes_gained};

use crate::RoundRecord;

/// Shots starting this close to the hole, off the green, are short game.
const SHORT_GAME_YARDS: f64 = 50.0;

/// Category a shot counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotCategory {
    /// Tee shot on a par 4 or 5.
    OffTheTee,
    /// Any other full shot.
    Approach,
    /// Within 50 yards, off the green.
    ShortGame,
    /// On the green.
    Putting,
}

impl ShotCategory {
    /// Categorise a shot from `start` on a hole of `par`.
    ///
    /// Returns `None` for a shot that starts in the hole.
    #[must_use]
    pub const fn of(start: BallPosition, par: u8) -> Option<Self> {
        let BallPosition::InPlay { distance, lie } = start else {
            return None;
        };
        Some(match lie {
            Lie::Tee if par >= 4 => Self::OffTheTee,
            Lie::Green => Self::Putting,
            _ if distance <= SHORT_GAME_YARDS => Self::ShortGame,
            _ => Self::Approach,
        })
    }
}

/// Average strokes gained per tracked round, by category.
///
/// Rounds without tracked shots are ignored; with none at all, every
/// category is zero. Values are rounded to two decimals.
#[expect(
    clippy::float_arithmetic,
    reason = "strokes gained are summed and averaged"
)]
#[must_use]
pub fn summarise_strokes_gained(
    rounds: &[RoundRecord],
    handicap: Option<f64>,
) -> StrokesGainedSummary {
    let mut totals = StrokesGainedSummary::default();
    let mut tracked_rounds = 0_u32;

    for round in rounds.iter().filter(|round| !round.shots.is_empty()) {
        tracked_rounds = tracked_rounds.saturating_add(1);
        for shot in &round.shots {
            let Some(category) = ShotCategory::of(shot.start, round.par_for(shot.hole_number))
            else {
                continue;
            };
            let gained = strokes_gained(shot.start, shot.end, shot.strokes, handicap);
            let slot = match category {
                ShotCategory::OffTheTee => &mut totals.off_the_tee,
                ShotCategory::Approach => &mut totals.approach,
                ShotCategory::ShortGame => &mut totals.short_game,
                ShotCategory::Putting => &mut totals.putting,
            };
            *slot += gained;
        }
    }

    if tracked_rounds == 0 {
        return totals;
    }
    let rounds_f = f64::from(tracked_rounds);
    let per_round = |value: f64| round_to(value / rounds_f, 2);
    let off_the_tee = per_round(totals.off_the_tee);
    let approach = per_round(totals.approach);
    let short_game = per_round(totals.short_game);
    let putting = per_round(totals.putting);
    StrokesGainedSummary {
        off_the_tee,
        approach,
        short_game,
        putting,
        total: round_to(off_the_tee + approach + short_game + putting, 2),
    }
}
