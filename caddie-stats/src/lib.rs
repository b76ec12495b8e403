//! Player statistics for the caddie engine.
//!
//! The crate turns a player's [`RoundRecord`]s into
//! [`PlayerStatistics`](caddie_core::PlayerStatistics): a score-to-par
//! distribution, averages by par, heuristic tendencies, and strokes gained
//! when shots were tracked. Players without rounds get a handicap-bucketed
//! default profile. [`hole_history`] summarises the player's record on a
//! single hole for the recommendation reasoning.
//!
//! # Examples
//!
//! ```
//! use caddie_core::MissDirection;
//! use caddie_stats::analyze_rounds;
//!
//! let stats = analyze_rounds(&[], Some(3.0));
//! assert_eq!(stats.rounds_analyzed, 0);
//! assert_eq!(stats.tendencies.miss_direction, MissDirection::Balanced);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod defaults;
mod history;
mod strokes_gained;
mod types;

pub use analysis::{analyze_rounds, distribution, par_averages};
pub use defaults::{HandicapTier, default_statistics};
pub use history::hole_history;
pub use strokes_gained::{ShotCategory, summarise_strokes_gained};
pub use types::{DEFAULT_PAR, HoleCard, HoleScore, RoundRecord, ScoredHole, ShotOutcome};

/// Convert a count to `f64`, saturating at `u32::MAX`.
pub(crate) fn count_f64<T: TryInto<u32>>(count: T) -> f64 {
    count.try_into().map_or(f64::from(u32::MAX), f64::from)
}

/// `part` as a percentage of `whole`; zero when `whole` is zero.
#[expect(clippy::float_arithmetic, reason = "percentages are ratios")]
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    count_f64(part) / count_f64(whole) * 100.0
}

#[cfg(test)]
mod tests;
