//! Round records as stored by the scoring app.

use caddie_core::BallPosition;
use serde::{Deserialize, Serialize};

/// Par assumed for a hole missing from the scorecard.
pub const DEFAULT_PAR: u8 = 4;

/// One completed round.
///
/// Field names accept both the snake-case and the camel-case spelling used
/// by the scoring app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Course the round was played on.
    #[serde(default, alias = "courseId")]
    pub course_id: Option<String>,
    /// Scorecard: hole numbers and pars.
    #[serde(default)]
    pub holes: Vec<HoleCard>,
    /// Strokes per hole.
    #[serde(default)]
    pub scores: Vec<HoleScore>,
    /// Shot-level detail, when tracked.
    #[serde(default)]
    pub shots: Vec<ShotOutcome>,
}

impl RoundRecord {
    /// Par of `hole_number` on this round's card, or [`DEFAULT_PAR`].
    #[must_use]
    pub fn par_for(&self, hole_number: u8) -> u8 {
        self.holes
            .iter()
            .find(|hole| hole.number == hole_number)
            .and_then(|hole| hole.par)
            .unwrap_or(DEFAULT_PAR)
    }

    /// Whether the round was played on `course_id`.
    #[must_use]
    pub fn is_on(&self, course_id: &str) -> bool {
        self.course_id.as_deref() == Some(course_id)
    }

    /// Complete scores with their par. Entries missing a hole number or a
    /// stroke count are skipped.
    #[must_use]
    pub fn scored_holes(&self) -> impl Iterator<Item = ScoredHole> + '_ {
        self.scores.iter().filter_map(|score| {
            let hole_number = score.hole_number?;
            let strokes = score.strokes?;
            Some(ScoredHole {
                hole_number,
                strokes,
                par: self.par_for(hole_number),
            })
        })
    }
}

/// A scorecard entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleCard {
    /// Hole number.
    pub number: u8,
    /// Par, when recorded.
    #[serde(default)]
    pub par: Option<u8>,
}

/// Strokes on one hole. Either field may be missing in partial rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleScore {
    /// Hole number.
    #[serde(default, alias = "holeNumber")]
    pub hole_number: Option<u8>,
    /// Strokes taken.
    #[serde(default)]
    pub strokes: Option<u32>,
}

/// A complete score joined with its par.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredHole {
    /// Hole number.
    pub hole_number: u8,
    /// Strokes taken.
    pub strokes: u32,
    /// Par of the hole.
    pub par: u8,
}

impl ScoredHole {
    /// Strokes relative to par; negative is under par.
    #[must_use]
    pub fn to_par(&self) -> i64 {
        i64::from(self.strokes) - i64::from(self.par)
    }
}

/// One tracked shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotOutcome {
    /// Hole the shot was played on.
    #[serde(alias = "holeNumber")]
    pub hole_number: u8,
    /// Where the shot started.
    pub start: BallPosition,
    /// Where the ball finished.
    pub end: BallPosition,
    /// Strokes charged, including penalties.
    #[serde(default = "one_stroke")]
    pub strokes: u32,
}

const fn one_stroke() -> u32 {
    1
}
