//! Errors reported by the game engine

use crate::core::{UnequalLengthError, WordError};
use thiserror::Error;

/// Failure of a [`GameEngine`](super::GameEngine) operation
///
/// Every variant except `Collaborator` is detected before anything is
/// persisted, so the session is left exactly as it was.
#[derive(Error, Debug)]
pub enum GameError {
    /// The guess does not have as many letters as the target
    #[error(transparent)]
    UnequalLength(#[from] UnequalLengthError),

    /// A requested word length outside the playable range
    #[error("Word length must be between 5 and 15 letters, got {0}")]
    InvalidLength(usize),

    /// The owner has no active or pending-trivia session
    #[error("No game in progress for {0}")]
    SessionNotFound(String),

    /// A trivia question must be answered before the next guess
    #[error("Answer the trivia question before guessing again")]
    TriviaPending,

    #[error("No trivia question is waiting for an answer")]
    NoTriviaPending,

    /// The guess is not made of letters only
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Store, word source or trivia gate failure
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl GameError {
    /// Whether the caller can fix the request and retry
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::Collaborator(_))
    }
}
