//! Player-facing reasoning lines.

use caddie_core::{HoleHistory, MissDirection, PinLight, ShotAdjustment};

use crate::{AdjustedDistance, ClubChoice};

/// Everything the reasoning lines mention.
#[derive(Debug, Clone, Copy)]
pub struct ReasoningInputs<'a> {
    /// Measured distance.
    pub raw_yards: u32,
    /// Adjusted distance and the adjustments behind it.
    pub adjusted: &'a AdjustedDistance,
    /// Chosen club.
    pub choice: &'a ClubChoice,
    /// Pin traffic light.
    pub pin: PinLight,
    /// Player's dominant miss, if statistics are known.
    pub miss: Option<MissDirection>,
    /// History on this hole, if any.
    pub history: Option<&'a HoleHistory>,
    /// Plays needed before history is mentioned.
    pub history_threshold: u32,
}

/// Build the ordered reasoning list.
///
/// Lines appear in a fixed order: adjustments, played distance, club,
/// pin warning, miss tendency, hole history. Each is omitted when it has
/// nothing to say.
#[must_use]
pub fn reasoning(inputs: &ReasoningInputs<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    let adjusted = inputs.adjusted;

    if !adjusted.adjustments.is_empty() {
        lines.push(format!(
            "Distance adjustments: {}",
            summarise(&adjusted.adjustments)
        ));
    }
    if adjusted.yards != inputs.raw_yards {
        lines.push(format!(
            "Plays {} yards (raw {})",
            adjusted.yards, inputs.raw_yards
        ));
    }
    lines.push(format!(
        "{} ({}y): best fit for {}y",
        inputs.choice.club.display_name(),
        inputs.choice.carry_yards,
        adjusted.yards
    ));
    match inputs.pin {
        PinLight::Red => {
            lines.push("Red light pin: play to the center, don't short-side yourself".to_owned());
        }
        PinLight::Yellow => lines.push("Yellow light pin: aim between pin and center".to_owned()),
        PinLight::Green => {}
    }
    if let Some(miss) = inputs.miss.filter(|miss| *miss != MissDirection::Balanced) {
        lines.push(format!(
            "Your miss tendency is {miss}: aim point accounts for this"
        ));
    }
    if let Some(history) = inputs
        .history
        .filter(|history| history.times_played >= inputs.history_threshold)
    {
        lines.push(format!(
            "Your history: avg {:.1} (best {}) in {} rounds",
            history.avg_score, history.best_score, history.times_played
        ));
    }
    lines
}

fn summarise(adjustments: &[ShotAdjustment]) -> String {
    adjustments
        .iter()
        .map(|adjustment| {
            let sign = if adjustment.yards > 0 { "+" } else { "" };
            format!("{}: {sign}{}y", adjustment.kind, adjustment.yards)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
