//! Error types for the dialog domain.

/// Errors that abort a turn.
///
/// Missing and ambiguous slot values are not errors; they are answered
/// with a re-prompt (see `Outcome`).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),
}
