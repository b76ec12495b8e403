//! Errors raised when decoding textual tags.

use thiserror::Error;

/// A textual tag did not name a known variant.
///
/// # Examples
/// ```
/// use caddie_core::{HazardSide, ParseEnumError};
///
/// let err = "sideways".parse::<HazardSide>().unwrap_err();
/// assert_eq!(err.kind(), "hazard side");
/// assert_eq!(err.to_string(), "unknown hazard side 'sideways'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    /// Record a rejected `value` for the enumeration named `kind`.
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Name of the enumeration that rejected the value.
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected text.
    pub fn value(&self) -> &str {
        &self.value
    }
}
