//! Errors raised by the session store.

use thiserror::Error;

/// Failures when addressing a round session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Round identifiers must contain at least one character.
    #[error("round id must not be empty")]
    EmptyRoundId,
    /// The round was never started, was ended, or expired. Start it again.
    #[error("no active session for round `{round_id}`")]
    NotFound {
        /// Identifier that was looked up.
        round_id: String,
    },
    /// The background sweeper thread could not be started.
    #[error("failed to start the session sweeper")]
    SpawnSweeper {
        /// Error reported by the thread builder.
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    pub(crate) fn not_found(round_id: &str) -> Self {
        Self::NotFound {
            round_id: round_id.to_owned(),
        }
    }
}
