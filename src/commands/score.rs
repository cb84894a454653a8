//! Score command
//!
//! Classifies a guess against a target without starting a game.

use crate::core::{Feedback, Word, classify};
use anyhow::{Context, Result};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub threshold: u32,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is not 5 to 15 letters
/// - The words differ in length
pub fn score_guess(guess: &str, target: &str, threshold: u32) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;
    let feedback = classify(guess.text(), target.text(), threshold)?;

    Ok(ScoreResult {
        guess: guess.into_text(),
        target: target.into_text(),
        threshold,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_normalizes_case() {
        let result = score_guess("apple", "sport", 4).unwrap();

        assert_eq!(result.guess, "APPLE");
        assert_eq!(result.target, "SPORT");
        assert_eq!(result.feedback.encode(), "40244");
    }

    #[test]
    fn score_rejects_bad_words() {
        assert!(score_guess("abc", "sport", 4).is_err());
        assert!(score_guess("apple", "sp0rt", 4).is_err());
        assert!(score_guess("apples", "sport", 4).is_err());
    }

    #[test]
    fn threshold_is_passed_through() {
        let result = score_guess("APPLE", "SPORT", 0).unwrap();
        assert_eq!(result.threshold, 0);
        assert_eq!(result.feedback.encode(), "40444");
    }
}
