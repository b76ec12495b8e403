//! Background removal of expired sessions.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use crate::{Clock, SessionError, SessionStore};

/// Sweeps a [`SessionStore`] every [`SessionConfig::sweep_interval`] until
/// stopped or dropped.
///
/// [`SessionConfig::sweep_interval`]: crate::SessionConfig::sweep_interval
#[derive(Debug)]
pub struct Sweeper {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Sweeper {
    /// Start sweeping `store` on a named background thread.
    ///
    /// # Errors
    /// Returns [`SessionError::SpawnSweeper`] when the thread cannot start.
    pub fn spawn<C>(store: Arc<SessionStore<C>>) -> Result<Self, SessionError>
    where
        C: Clock + 'static,
    {
        let (stop, stopped) = mpsc::channel::<()>();
        let interval = store.config().sweep_interval;
        let handle = thread::Builder::new()
            .name("caddie-session-sweeper".to_owned())
            .spawn(move || {
                debug!("session sweeper started, every {interval:?}");
                loop {
                    match stopped.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            store.sweep();
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("session sweeper stopped");
            })
            .map_err(|source| SessionError::SpawnSweeper { source })?;
        Ok(Self {
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    /// Stop sweeping and wait for the thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take()
            && stop.send(()).is_err()
        {
            debug!("session sweeper already exited");
        }
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("session sweeper panicked");
        }
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast on unexpected values")]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::{ManualClock, SessionConfig};
    use rstest::rstest;

    #[rstest]
    fn sweeps_expired_sessions_in_the_background() {
        let clock = Arc::new(ManualClock::new());
        let config = SessionConfig::default()
            .with_ttl(Duration::from_secs(60))
            .with_sweep_interval(Duration::from_millis(5));
        let store = Arc::new(SessionStore::with_clock(Arc::clone(&clock), config));
        store.get_or_create("r1", None).expect("create");
        let sweeper = Sweeper::spawn(Arc::clone(&store)).expect("spawn sweeper");

        clock.advance(Duration::from_secs(61));
        let deadline = Instant::now() + Duration::from_secs(5);
        while store.active_count() > 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        sweeper.stop();
        assert_eq!(store.active_count(), 0);
    }

    #[rstest]
    fn stopping_leaves_live_sessions() {
        let store = Arc::new(SessionStore::new());
        store.get_or_create("r1", None).expect("create");
        let sweeper = Sweeper::spawn(Arc::clone(&store)).expect("spawn sweeper");
        drop(sweeper);
        assert_eq!(store.active_count(), 1);
    }
}
