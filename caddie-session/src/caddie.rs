//! Session-aware recommendations.

use std::sync::Arc;

use caddie_advisor::CaddieAdvisor;
use caddie_core::{
    Advisor, CaddieRecommendation, ClubDistances, HoleContext, PlayerStatistics, ShotRequest,
    WeatherSnapshot,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Clock, ConversationTurn, RoundSession, SessionError, SessionStore, ShotRecord, Speaker,
    SystemClock,
};

/// What is known about the player when a round starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundStart {
    /// Round identifier.
    pub round_id: String,
    /// Course being played.
    #[serde(default)]
    pub course_id: Option<String>,
    /// The player's club distances.
    #[serde(default)]
    pub club_distances: ClubDistances,
    /// The player's handicap.
    #[serde(default)]
    pub handicap: Option<f64>,
}

impl RoundStart {
    /// Start `round_id` with nothing known about the player.
    #[must_use]
    pub fn new(round_id: impl Into<String>) -> Self {
        Self {
            round_id: round_id.into(),
            course_id: None,
            club_distances: ClubDistances::default(),
            handicap: None,
        }
    }

    /// Set the course.
    #[must_use]
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// Set the club distances.
    #[must_use]
    pub fn with_club_distances(mut self, club_distances: ClubDistances) -> Self {
        self.club_distances = club_distances;
        self
    }

    /// Set the handicap.
    #[must_use]
    pub const fn with_handicap(mut self, handicap: f64) -> Self {
        self.handicap = Some(handicap);
        self
    }
}

/// A shot to advise on within a round.
///
/// `par` and `yards` describe the hole when no context was cached for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleShot {
    /// Round identifier.
    pub round_id: String,
    /// Hole being played.
    pub hole_number: u8,
    /// Par of the hole.
    #[serde(default = "default_par")]
    pub par: u8,
    /// Card yardage.
    #[serde(default = "default_yards")]
    pub yards: u32,
    /// Measured distance to the target.
    #[serde(default, alias = "distance_yards")]
    pub distance: Option<u32>,
    /// Bearing of the shot in degrees clockwise from north.
    #[serde(default)]
    pub bearing_deg: f64,
}

const fn default_par() -> u8 {
    4
}

const fn default_yards() -> u32 {
    400
}

impl HoleShot {
    /// A full-hole shot on a par 4 of 400 yards.
    #[must_use]
    pub fn new(round_id: impl Into<String>, hole_number: u8) -> Self {
        Self {
            round_id: round_id.into(),
            hole_number,
            par: default_par(),
            yards: default_yards(),
            distance: None,
            bearing_deg: 0.0,
        }
    }

    /// Set par and card yardage.
    #[must_use]
    pub const fn with_card(mut self, par: u8, yards: u32) -> Self {
        self.par = par;
        self.yards = yards;
        self
    }

    /// Set the measured distance.
    #[must_use]
    pub const fn with_distance(mut self, yards: u32) -> Self {
        self.distance = Some(yards);
        self
    }

    /// Set the shot bearing.
    #[must_use]
    pub const fn with_bearing(mut self, bearing_deg: f64) -> Self {
        self.bearing_deg = bearing_deg;
        self
    }
}

/// A snapshot of a round's cached state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatus {
    /// Round identifier.
    pub round_id: String,
    /// Hole the player is on.
    pub current_hole: u8,
    /// Holes with a cached context, ascending.
    pub holes_with_intel: Vec<u8>,
    /// Whether weather is cached.
    pub has_weather: bool,
    /// Whether the weather is missing or stale.
    pub weather_stale: bool,
    /// Shots recorded so far.
    pub shot_count: usize,
    /// Conversation turns so far.
    pub conversation_length: usize,
    /// Most recent recommendation.
    pub last_recommendation: Option<CaddieRecommendation>,
}

impl SessionStatus {
    fn of(session: &RoundSession, weather_stale: bool) -> Self {
        Self {
            round_id: session.round_id.clone(),
            current_hole: session.current_hole,
            holes_with_intel: session.holes.keys().copied().collect(),
            has_weather: session.weather.is_some(),
            weather_stale,
            shot_count: session.shots.len(),
            conversation_length: session.conversation.len(),
            last_recommendation: session.last_recommendation.clone(),
        }
    }
}

/// Totals reported when a round ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    /// Round identifier.
    pub round_id: String,
    /// Shots recorded.
    pub shots_recorded: usize,
    /// Distinct holes with at least one recorded shot.
    pub holes_played: usize,
    /// Conversation turns exchanged.
    pub messages_exchanged: usize,
}

/// Recommends shots using whatever a round has cached.
///
/// Weather, hole contexts, and statistics are supplied once per round and
/// reused on every later recommendation. A hole without a cached context is
/// treated as a bare hole of the requested par and yardage.
#[derive(Debug)]
pub struct RoundCaddie<A = CaddieAdvisor, C = SystemClock> {
    store: Arc<SessionStore<C>>,
    advisor: A,
}

impl<C: Clock> RoundCaddie<CaddieAdvisor, C> {
    /// A caddie using the default advisor.
    #[must_use]
    pub fn new(store: Arc<SessionStore<C>>) -> Self {
        Self::with_advisor(store, CaddieAdvisor::new())
    }
}

impl<A: Advisor, C: Clock> RoundCaddie<A, C> {
    /// A caddie using `advisor`.
    #[must_use]
    pub const fn with_advisor(store: Arc<SessionStore<C>>, advisor: A) -> Self {
        Self { store, advisor }
    }

    /// The underlying session store.
    #[must_use]
    pub const fn store(&self) -> &Arc<SessionStore<C>> {
        &self.store
    }

    /// Start or resume a round.
    ///
    /// A non-empty club table and a known handicap replace what the session
    /// held; absent values leave it untouched.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyRoundId`] for an empty identifier.
    pub fn start(&self, start: RoundStart) -> Result<SessionStatus, SessionError> {
        let RoundStart {
            round_id,
            course_id,
            club_distances,
            handicap,
        } = start;
        self.store.get_or_create(&round_id, course_id.as_deref())?;
        self.store.modify(&round_id, |session| {
            if !club_distances.is_empty() {
                session.club_distances = club_distances;
            }
            if handicap.is_some() {
                session.handicap = handicap;
            }
            if session.course_id.is_none() {
                session.course_id = course_id;
            }
            SessionStatus::of(session, self.store.needs_weather_refresh(session))
        })
    }

    /// Cache a weather snapshot fetched now.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn cache_weather(&self, round_id: &str, weather: WeatherSnapshot) -> Result<(), SessionError> {
        let fetched_at = self.store.clock().now();
        self.store
            .modify(round_id, |session| session.set_weather(weather, fetched_at))
    }

    /// Whether the round's weather should be fetched again.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn needs_weather(&self, round_id: &str) -> Result<bool, SessionError> {
        let session = self.store.get(round_id)?;
        Ok(self.store.needs_weather_refresh(&session))
    }

    /// Cache hole contexts, replacing earlier ones for the same holes.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn cache_holes(
        &self,
        round_id: &str,
        holes: impl IntoIterator<Item = HoleContext>,
    ) -> Result<(), SessionError> {
        self.store.modify(round_id, |session| {
            for hole in holes {
                session.insert_hole(hole);
            }
        })
    }

    /// Cache the player's statistics.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn cache_statistics(
        &self,
        round_id: &str,
        statistics: PlayerStatistics,
    ) -> Result<(), SessionError> {
        self.store
            .modify(round_id, |session| session.statistics = Some(statistics))
    }

    /// Recommend a shot, remembering it as the round's latest.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn recommend(&self, shot: &HoleShot) -> Result<CaddieRecommendation, SessionError> {
        let session = self.store.get(&shot.round_id)?;
        let hole = session
            .holes
            .get(&shot.hole_number)
            .cloned()
            .unwrap_or_else(|| HoleContext::new(shot.hole_number, shot.par, shot.yards));
        let request = ShotRequest {
            hole,
            distance: shot.distance,
            player: session.player_profile(),
            weather: session.weather,
            statistics: session.statistics,
            bearing_deg: shot.bearing_deg,
        };

        let recommendation = self.advisor.recommend(&request);
        debug!(
            "round {}: hole {} recommendation {}",
            shot.round_id,
            shot.hole_number,
            recommendation.club.id()
        );
        self.store.modify(&shot.round_id, |live| {
            live.current_hole = shot.hole_number;
            live.last_recommendation = Some(recommendation.clone());
        })?;
        Ok(recommendation)
    }

    /// Record a shot and return the number recorded so far.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn record_shot(&self, round_id: &str, shot: ShotRecord) -> Result<usize, SessionError> {
        self.store.modify(round_id, |session| {
            session.shots.push(shot);
            session.shots.len()
        })
    }

    /// Append one exchange to the conversation and return its length.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn record_exchange(
        &self,
        round_id: &str,
        player: impl Into<String>,
        caddie: impl Into<String>,
    ) -> Result<usize, SessionError> {
        let turns = [
            ConversationTurn {
                speaker: Speaker::Player,
                content: player.into(),
            },
            ConversationTurn {
                speaker: Speaker::Caddie,
                content: caddie.into(),
            },
        ];
        self.store.modify(round_id, |session| {
            session.conversation.extend(turns);
            session.conversation.len()
        })
    }

    /// Report the round's cached state.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn status(&self, round_id: &str) -> Result<SessionStatus, SessionError> {
        self.store.modify(round_id, |session| {
            SessionStatus::of(session, self.store.needs_weather_refresh(session))
        })
    }

    /// End the round and summarise it.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn end(&self, round_id: &str) -> Result<RoundSummary, SessionError> {
        let session = self.store.end(round_id)?;
        Ok(RoundSummary {
            holes_played: session.holes_played(),
            shots_recorded: session.shots.len(),
            messages_exchanged: session.conversation.len(),
            round_id: session.round_id,
        })
    }
}
