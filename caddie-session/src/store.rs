//! The round session store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::{Clock, RoundSession, SessionError, SystemClock};

/// Expiry and refresh policy for round sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Idle time after which a session is gone.
    pub ttl: Duration,
    /// Age after which cached weather should be fetched again.
    pub weather_freshness: Duration,
    /// How often the [`Sweeper`](crate::Sweeper) removes expired sessions.
    pub sweep_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(8 * 60 * 60),
            weather_freshness: caddie_core::WEATHER_FRESHNESS,
            sweep_interval: Duration::from_secs(5 * 60),
        }
    }
}

impl SessionConfig {
    /// Override the idle time-to-live.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the weather freshness window.
    #[must_use]
    pub const fn with_weather_freshness(mut self, freshness: Duration) -> Self {
        self.weather_freshness = freshness;
        self
    }

    /// Override the sweep interval.
    #[must_use]
    pub const fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }
}

/// Concurrency-safe map from round identifier to [`RoundSession`].
///
/// Idle time is a sliding window: every successful read or write refreshes
/// the session's last-access time, and a session idle for longer than
/// [`SessionConfig::ttl`] is treated as absent and evicted on sight.
///
/// The map is guarded by one mutex held only for the map operation itself.
/// [`get`](Self::get) hands out a copy, so a read-modify-write through
/// [`get`](Self::get) and [`update`](Self::update) is not atomic; use
/// [`modify`](Self::modify) when concurrent writers to one round matter.
#[derive(Debug)]
pub struct SessionStore<C = SystemClock> {
    sessions: Mutex<HashMap<String, RoundSession>>,
    clock: C,
    config: SessionConfig,
}

impl SessionStore<SystemClock> {
    /// A store on the system clock with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock, SessionConfig::default())
    }
}

impl Default for SessionStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionStore<C> {
    /// A store reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: C, config: SessionConfig) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
            config,
        }
    }

    /// The store's policy.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The store's time source.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Return the round's session, creating it when absent or expired.
    ///
    /// An existing session has its last-access time refreshed; `course_id`
    /// only applies to a new session.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyRoundId`] for an empty identifier.
    pub fn get_or_create(
        &self,
        round_id: &str,
        course_id: Option<&str>,
    ) -> Result<RoundSession, SessionError> {
        ensure_round_id(round_id)?;
        let now = self.clock.now();
        let mut sessions = self.lock();
        if sessions
            .get(round_id)
            .is_some_and(|session| session.is_expired(now, self.config.ttl))
        {
            debug!("round {round_id}: expired session replaced");
            sessions.remove(round_id);
        }
        let session = sessions.entry(round_id.to_owned()).or_insert_with(|| {
            debug!("round {round_id}: session created");
            RoundSession::new(round_id, course_id.map(str::to_owned), now)
        });
        session.last_accessed = now;
        Ok(session.clone())
    }

    /// Return a copy of the round's session and refresh its last access.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no session or
    /// its session has expired; an expired session is evicted.
    pub fn get(&self, round_id: &str) -> Result<RoundSession, SessionError> {
        self.modify(round_id, |session| session.clone())
    }

    /// Apply `change` to the round's session under the store lock.
    ///
    /// The session's last access is refreshed after `change` runs.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn modify<R>(
        &self,
        round_id: &str,
        change: impl FnOnce(&mut RoundSession) -> R,
    ) -> Result<R, SessionError> {
        let now = self.clock.now();
        let mut sessions = self.lock();
        let session = live_entry(&mut sessions, round_id, now, self.config.ttl)?;
        let outcome = change(session);
        session.last_accessed = now;
        Ok(outcome)
    }

    /// Write `session` back and refresh its last access.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyRoundId`] for a session with an empty
    /// identifier.
    pub fn update(&self, mut session: RoundSession) -> Result<(), SessionError> {
        ensure_round_id(&session.round_id)?;
        session.last_accessed = self.clock.now();
        self.lock().insert(session.round_id.clone(), session);
        Ok(())
    }

    /// Remove the round's session and return it.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] when the round has no live session.
    pub fn end(&self, round_id: &str) -> Result<RoundSession, SessionError> {
        let now = self.clock.now();
        let mut sessions = self.lock();
        let session = sessions
            .remove(round_id)
            .ok_or_else(|| SessionError::not_found(round_id))?;
        if session.is_expired(now, self.config.ttl) {
            debug!("round {round_id}: expired session evicted");
            return Err(SessionError::not_found(round_id));
        }
        debug!("round {round_id}: session ended");
        Ok(session)
    }

    /// Remove every expired session and return how many were removed.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let ttl = self.config.ttl;
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, ttl));
        let removed = before.saturating_sub(sessions.len());
        if removed > 0 {
            debug!("swept {removed} expired sessions");
        }
        removed
    }

    /// Number of sessions in the map, including expired ones not yet swept.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.lock().len()
    }

    /// Whether the session's weather is missing or stale.
    #[must_use]
    pub fn needs_weather_refresh(&self, session: &RoundSession) -> bool {
        session.weather_is_stale(self.clock.now(), self.config.weather_freshness)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, RoundSession>> {
        self.sessions.lock().unwrap_or_else(|poisoned| {
            warn!("session store lock was poisoned; continuing with its data");
            poisoned.into_inner()
        })
    }
}

fn ensure_round_id(round_id: &str) -> Result<(), SessionError> {
    if round_id.is_empty() {
        Err(SessionError::EmptyRoundId)
    } else {
        Ok(())
    }
}

fn live_entry<'a>(
    sessions: &'a mut HashMap<String, RoundSession>,
    round_id: &str,
    now: Instant,
    ttl: Duration,
) -> Result<&'a mut RoundSession, SessionError> {
    if sessions
        .get(round_id)
        .is_some_and(|session| session.is_expired(now, ttl))
    {
        debug!("round {round_id}: expired session evicted");
        sessions.remove(round_id);
    }
    sessions
        .get_mut(round_id)
        .ok_or_else(|| SessionError::not_found(round_id))
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast on unexpected values")]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ManualClock;
    use caddie_core::WeatherSnapshot;
    use rstest::{fixture, rstest};

    const HOUR: Duration = Duration::from_secs(60 * 60);
    const MINUTE: Duration = Duration::from_secs(60);

    #[fixture]
    fn store() -> SessionStore<Arc<ManualClock>> {
        SessionStore::with_clock(Arc::new(ManualClock::new()), SessionConfig::default())
    }

    fn advance(store: &SessionStore<Arc<ManualClock>>, step: Duration) {
        store.clock().advance(step);
    }

    #[rstest]
    fn creates_once_then_reuses(store: SessionStore<Arc<ManualClock>>) {
        let first = store.get_or_create("r1", Some("links")).expect("create");
        advance(&store, MINUTE);
        let again = store.get_or_create("r1", Some("other")).expect("reuse");
        assert_eq!(again.created_at, first.created_at);
        assert_eq!(again.course_id.as_deref(), Some("links"));
        assert!(again.last_accessed > first.last_accessed);
        assert_eq!(store.active_count(), 1);
    }

    #[rstest]
    fn empty_round_ids_are_rejected(store: SessionStore<Arc<ManualClock>>) {
        assert!(matches!(
            store.get_or_create("", None),
            Err(SessionError::EmptyRoundId)
        ));
    }

    #[rstest]
    fn access_slides_the_window(store: SessionStore<Arc<ManualClock>>) {
        store.get_or_create("r1", None).expect("create");
        advance(&store, 7 * HOUR + 59 * MINUTE);
        store.get("r1").expect("still live at 7h59m");
        advance(&store, MINUTE);
        store.get("r1").expect("window restarted at the last read");
    }

    #[rstest]
    fn idle_sessions_expire_and_are_evicted(store: SessionStore<Arc<ManualClock>>) {
        store.get_or_create("r1", None).expect("create");
        advance(&store, 8 * HOUR + MINUTE);
        assert!(matches!(
            store.get("r1"),
            Err(SessionError::NotFound { round_id }) if round_id == "r1"
        ));
        assert_eq!(store.active_count(), 0);
    }

    #[rstest]
    fn expired_sessions_restart_fresh(store: SessionStore<Arc<ManualClock>>) {
        let mut session = store.get_or_create("r1", None).expect("create");
        session.current_hole = 9;
        store.update(session).expect("update");
        advance(&store, 9 * HOUR);
        let fresh = store.get_or_create("r1", None).expect("recreate");
        assert_eq!(fresh.current_hole, 1);
    }

    #[rstest]
    fn update_writes_back(store: SessionStore<Arc<ManualClock>>) {
        let mut session = store.get_or_create("r1", None).expect("create");
        session.current_hole = 4;
        store.update(session).expect("update");
        assert_eq!(store.get("r1").expect("live").current_hole, 4);
    }

    #[rstest]
    fn modify_applies_in_place(store: SessionStore<Arc<ManualClock>>) {
        store.get_or_create("r1", None).expect("create");
        let hole = store
            .modify("r1", |session| {
                session.current_hole = 7;
                session.current_hole
            })
            .expect("live");
        assert_eq!(hole, 7);
        assert!(store.modify("missing", |_| ()).is_err());
    }

    #[rstest]
    fn end_removes_the_session(store: SessionStore<Arc<ManualClock>>) {
        store.get_or_create("r1", None).expect("create");
        let ended = store.end("r1").expect("live");
        assert_eq!(ended.round_id, "r1");
        assert!(store.get("r1").is_err());
        assert!(store.end("r1").is_err());
    }

    #[rstest]
    fn sweep_keeps_recent_sessions(store: SessionStore<Arc<ManualClock>>) {
        store.get_or_create("old", None).expect("create");
        advance(&store, 5 * HOUR);
        store.get_or_create("new", None).expect("create");
        advance(&store, 4 * HOUR);
        assert_eq!(store.sweep(), 1);
        assert_eq!(store.active_count(), 1);
        assert!(store.get("new").is_ok());
    }

    #[rstest]
    fn weather_refresh_follows_freshness(store: SessionStore<Arc<ManualClock>>) {
        let mut session = store.get_or_create("r1", None).expect("create");
        assert!(store.needs_weather_refresh(&session));
        session.set_weather(WeatherSnapshot::default(), store.clock().now());
        assert!(!store.needs_weather_refresh(&session));
        advance(&store, 31 * MINUTE);
        assert!(store.needs_weather_refresh(&session));
    }

    #[rstest]
    fn concurrent_lookups_after_expiry_both_miss(store: SessionStore<Arc<ManualClock>>) {
        store.get_or_create("r1", None).expect("create");
        advance(&store, 8 * HOUR + MINUTE);
        let outcomes: Vec<bool> = std::thread::scope(|scope| {
            let lookups: Vec<_> = (0..2)
                .map(|_| scope.spawn(|| store.get("r1").is_ok()))
                .collect();
            lookups
                .into_iter()
                .map(|lookup| lookup.join().expect("lookup thread"))
                .collect()
        });
        assert_eq!(outcomes, vec![false, false]);
    }

    #[rstest]
    fn poisoned_lock_is_recovered(store: SessionStore<Arc<ManualClock>>) {
        store.get_or_create("r1", None).expect("create");
        let poisoned = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = store.lock();
                    panic!("poison the session lock");
                })
                .join()
        });
        assert!(poisoned.is_err());
        assert!(store.get("r1").is_ok());
    }
}
