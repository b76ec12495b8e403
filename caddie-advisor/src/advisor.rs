//! `CaddieAdvisor`, the default [`Advisor`].
//!
//! The advisor runs the distance pipeline, picks a club, reads the hole's
//! danger, and assembles the recommendation. Every step is infallible; absent
//! weather, statistics, or history only lower the confidence.

use caddie_core::{
    Advisor, Aggressiveness, CaddieRecommendation, HoleContext, Lie, PinLight, ShotRequest,
    expected_strokes, round_to,
};

use crate::reasoning::{ReasoningInputs, reasoning};
use crate::{Bias, ShotConditions, adjust_distance, aim_point, classify_pin, miss_side, select_club};

/// Configuration for [`CaddieAdvisor`].
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    /// A shot at least this fraction of the card yardage is a tee shot.
    pub tee_shot_ratio: f64,
    /// Club-selection bias for tee shots.
    pub tee_bias: Bias,
    /// Club-selection bias for approach shots.
    pub approach_bias: Bias,
    /// Lie assumed when estimating the expected score.
    pub assumed_lie: Lie,
    /// Plays of a hole needed before its history is quoted.
    pub history_threshold: u32,
    /// Confidence with no supporting data.
    pub base_confidence: f64,
    /// Added when weather is known.
    pub weather_confidence: f64,
    /// Added when the hole has an elevation change.
    pub elevation_confidence: f64,
    /// Added when statistics cover more than `statistics_rounds` rounds.
    pub statistics_confidence: f64,
    /// Rounds of statistics needed for `statistics_confidence`.
    pub statistics_rounds: u32,
    /// Added when the hole has mapped hazards.
    pub hazard_confidence: f64,
    /// Upper bound on confidence.
    pub max_confidence: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            tee_shot_ratio: 0.85,
            tee_bias: Bias::Moderate,
            approach_bias: Bias::Conservative,
            assumed_lie: Lie::Fairway,
            history_threshold: 3,
            base_confidence: 0.5,
            weather_confidence: 0.15,
            elevation_confidence: 0.1,
            statistics_confidence: 0.15,
            statistics_rounds: 5,
            hazard_confidence: 0.1,
            max_confidence: 0.95,
        }
    }
}

/// Recommendation engine combining distance, club, and danger analysis.
///
/// # Examples
/// ```
/// use caddie_advisor::CaddieAdvisor;
/// use caddie_core::{Advisor, Club, HoleContext, ShotRequest};
///
/// let advisor = CaddieAdvisor::new();
/// let hole = HoleContext::new(7, 4, 390).with_elevation_change(9.0);
/// let recommendation = advisor.recommend(&ShotRequest::new(hole).with_distance(150));
/// assert_eq!(recommendation.target_yards, 153);
/// assert_eq!(recommendation.club, Club::SevenIron);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaddieAdvisor {
    config: AdvisorConfig,
}

impl CaddieAdvisor {
    /// Construct an advisor using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AdvisorConfig::default())
    }

    /// Construct an advisor with explicit configuration.
    #[must_use]
    pub const fn with_config(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "tee detection compares against a fraction of the hole"
    )]
    fn bias_for(&self, raw_yards: u32, hole: &HoleContext) -> Bias {
        if f64::from(raw_yards) >= f64::from(hole.yards) * self.config.tee_shot_ratio {
            self.config.tee_bias
        } else {
            self.config.approach_bias
        }
    }

    #[expect(clippy::float_arithmetic, reason = "confidence is an additive score")]
    fn confidence(&self, request: &ShotRequest) -> f64 {
        let config = &self.config;
        let mut confidence = config.base_confidence;
        if request.weather.is_some() {
            confidence += config.weather_confidence;
        }
        if request.hole.elevation_change() != 0.0 {
            confidence += config.elevation_confidence;
        }
        if request
            .statistics
            .as_ref()
            .is_some_and(|stats| stats.rounds_analyzed > config.statistics_rounds)
        {
            confidence += config.statistics_confidence;
        }
        if !request.hole.hazards.is_empty() {
            confidence += config.hazard_confidence;
        }
        confidence.min(config.max_confidence)
    }
}

/// Risk posture for a hole.
///
/// Red pins and holes with two or more death hazards are played
/// conservatively; a green pin on a hazard-free hole can be attacked.
#[must_use]
pub fn aggressiveness(hole: &HoleContext, pin: PinLight) -> Aggressiveness {
    if pin == PinLight::Red || hole.death_hazard_count() >= 2 {
        Aggressiveness::Conservative
    } else if pin == PinLight::Green && hole.hazards.is_empty() {
        Aggressiveness::Aggressive
    } else {
        Aggressiveness::Moderate
    }
}

impl Advisor for CaddieAdvisor {
    fn recommend(&self, request: &ShotRequest) -> CaddieRecommendation {
        let hole = &request.hole;
        let raw_yards = request.raw_distance();
        let handicap = request.player.handicap_or_default();

        let adjusted = adjust_distance(&ShotConditions {
            raw_yards,
            elevation_change_ft: hole.elevation_change(),
            weather: request.weather.as_ref(),
            bearing_deg: request.bearing_deg,
        });
        let bias = self.bias_for(raw_yards, hole);
        let choice = select_club(adjusted.yards, &request.player.club_distances, bias);

        let pin = classify_pin(hole);
        let miss_direction = request
            .statistics
            .as_ref()
            .map(|stats| stats.tendencies.miss_direction);
        let aim = aim_point(hole, pin, miss_direction.unwrap_or_default());
        let miss = miss_side(hole);

        let lines = reasoning(&ReasoningInputs {
            raw_yards,
            adjusted: &adjusted,
            choice: &choice,
            pin,
            miss: miss_direction,
            history: hole.history.as_ref(),
            history_threshold: self.config.history_threshold,
        });
        let expected = expected_strokes(
            f64::from(raw_yards),
            self.config.assumed_lie,
            Some(handicap),
        );

        log::debug!(
            "hole {}: {raw_yards}y plays {}y, {} ({bias:?}), {pin} pin",
            hole.hole_number,
            adjusted.yards,
            choice.club,
        );

        CaddieRecommendation {
            club: choice.club,
            club_carry_yards: choice.carry_yards,
            target_yards: adjusted.yards,
            raw_yards,
            crosswind_drift_yards: adjusted.crosswind_drift_yards,
            aim_point: aim,
            reasoning: lines,
            miss_side: miss,
            adjustments: adjusted.adjustments,
            pin_light: pin,
            confidence: self.confidence(request),
            aggressiveness: aggressiveness(hole, pin),
            expected_score: round_to(expected, 2),
        }
    }
}
