//! Round-scoped state for the caddie engine.
//!
//! A round is addressed by an opaque, non-empty identifier. The
//! [`SessionStore`] keeps one [`RoundSession`] per round so weather, hole
//! contexts, and player statistics are supplied once and reused on every
//! later call. Sessions expire after a sliding idle window; a [`Sweeper`]
//! thread removes the ones nobody comes back for.
//!
//! [`RoundCaddie`] layers the recommendation flow on top: start a round,
//! cache its inputs, ask for a shot on any hole, record what happened, and
//! end the round with a summary.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use caddie_session::{RoundCaddie, RoundStart, SessionStore};
//!
//! let caddie = RoundCaddie::new(Arc::new(SessionStore::new()));
//! caddie.start(RoundStart::new("round-1"))?;
//! let status = caddie.status("round-1")?;
//! assert_eq!(status.current_hole, 1);
//! assert!(!status.has_weather);
//! # Ok::<(), caddie_session::SessionError>(())
//! ```

#![forbid(unsafe_code)]

mod caddie;
mod clock;
mod error;
mod session;
mod store;
mod sweeper;

pub use caddie::{HoleShot, RoundCaddie, RoundStart, RoundSummary, SessionStatus};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::SessionError;
pub use session::{ConversationTurn, RoundSession, ShotRecord, Speaker};
pub use store::{SessionConfig, SessionStore};
pub use sweeper::Sweeper;
