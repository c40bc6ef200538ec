//! Game error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Kinds of failure a game transition can report.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// An index, cell or step was outside its valid range.
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// A postcondition did not hold after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`GameErrorKind::InvalidArgument`] error.
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidArgument(message.into()))
    }

    /// Shorthand for an [`GameErrorKind::InvariantViolation`] error.
    #[track_caller]
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvariantViolation(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }

    /// True when the caller passed an out-of-range argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, GameErrorKind::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_caller_location() {
        let err = GameError::invalid_argument("cell 9");
        assert_eq!(err.file, file!());
        assert!(err.line > 0);
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_display_includes_kind() {
        let err = GameError::invariant_violation("step out of range");
        let text = err.to_string();
        assert!(text.starts_with("Game error: Invariant violation: step out of range at "));
    }
}
