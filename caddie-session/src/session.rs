//! State kept for one round.

use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use caddie_core::{
    CaddieRecommendation, Club, ClubDistances, HoleContext, PlayerProfile, PlayerStatistics,
    WeatherSnapshot,
};
use serde::{Deserialize, Serialize};

/// A shot the player reported during the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Hole the shot was played on.
    pub hole_number: u8,
    /// Club used.
    pub club: Club,
    /// Distance the shot was played from, in yards.
    pub distance_yards: u32,
    /// Where it finished, in the player's words ("fairway", "bunker", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Who said something in the round's conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The golfer.
    #[serde(alias = "user")]
    Player,
    /// The caddie.
    #[serde(alias = "assistant")]
    Caddie,
}

/// One message in the round's conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who spoke.
    #[serde(rename = "role")]
    pub speaker: Speaker,
    /// What was said.
    pub content: String,
}

/// Everything cached for one in-progress round.
///
/// Timestamps come from the store's [`Clock`](crate::Clock), so a session
/// is only meaningful alongside the store that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSession {
    /// Round identifier.
    pub round_id: String,
    /// Course being played, when known.
    pub course_id: Option<String>,
    /// When the session was created.
    pub created_at: Instant,
    /// When the session was last read or written through the store.
    pub last_accessed: Instant,
    /// Latest weather snapshot.
    pub weather: Option<WeatherSnapshot>,
    /// When [`weather`](Self::weather) was fetched.
    pub weather_fetched_at: Option<Instant>,
    /// Hole contexts by hole number.
    pub holes: BTreeMap<u8, HoleContext>,
    /// Player statistics for the round's golfer.
    pub statistics: Option<PlayerStatistics>,
    /// Hole the player is on.
    pub current_hole: u8,
    /// Most recent recommendation.
    pub last_recommendation: Option<CaddieRecommendation>,
    /// Shots in the order they were reported.
    pub shots: Vec<ShotRecord>,
    /// Conversation in the order it happened.
    pub conversation: Vec<ConversationTurn>,
    /// The player's club distances; empty means the default table.
    pub club_distances: ClubDistances,
    /// The player's handicap.
    pub handicap: Option<f64>,
}

impl RoundSession {
    /// A fresh session on the first hole.
    #[must_use]
    pub fn new(round_id: impl Into<String>, course_id: Option<String>, now: Instant) -> Self {
        Self {
            round_id: round_id.into(),
            course_id,
            created_at: now,
            last_accessed: now,
            weather: None,
            weather_fetched_at: None,
            holes: BTreeMap::new(),
            statistics: None,
            current_hole: 1,
            last_recommendation: None,
            shots: Vec::new(),
            conversation: Vec::new(),
            club_distances: ClubDistances::default(),
            handicap: None,
        }
    }

    /// How long the session has gone untouched at `now`.
    #[must_use]
    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_accessed)
    }

    /// Whether the session has been idle for longer than `ttl` at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.idle_for(now) > ttl
    }

    /// Store a weather snapshot fetched at `fetched_at`.
    pub fn set_weather(&mut self, weather: WeatherSnapshot, fetched_at: Instant) {
        self.weather = Some(weather);
        self.weather_fetched_at = Some(fetched_at);
    }

    /// Whether the weather is missing or older than `freshness` at `now`.
    #[must_use]
    pub fn weather_is_stale(&self, now: Instant, freshness: Duration) -> bool {
        match (self.weather.as_ref(), self.weather_fetched_at) {
            (Some(_), Some(fetched_at)) => now.saturating_duration_since(fetched_at) > freshness,
            _ => true,
        }
    }

    /// Cache a hole context under its hole number, replacing any earlier one.
    pub fn insert_hole(&mut self, hole: HoleContext) {
        self.holes.insert(hole.hole_number, hole);
    }

    /// The player's profile as the advisor expects it.
    #[must_use]
    pub fn player_profile(&self) -> PlayerProfile {
        PlayerProfile::new(self.handicap, self.club_distances.clone())
    }

    /// Number of distinct holes with at least one recorded shot.
    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.shots
            .iter()
            .map(|shot| shot.hole_number)
            .collect::<BTreeSet<_>>()
            .len()
    }
}
