//! Core domain types for the game
//!
//! Pure and I/O free: word validation, per-letter match results and the
//! scoring algorithm.

mod feedback;
mod scoring;
mod word;

pub use feedback::{Feedback, FeedbackParseError, MatchResult};
pub use scoring::{UnequalLengthError, classify};
pub use word::{WORD_LENGTH_MAX, WORD_LENGTH_MIN, Word, WordError, is_playable_length};
