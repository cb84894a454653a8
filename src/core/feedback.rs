//! Per-letter match classification and the feedback for a whole guess
//!
//! A [`MatchResult`] carries a numeric code (0-4). Lower codes are stricter
//! matches; a guess wins iff every code is 0. [`Feedback`] is the ordered
//! sequence of results for one guess and persists as one digit per letter,
//! e.g. `"40244"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum MatchResult {
    /// Same letter at the same position
    CorrectLetterCorrectPosition = 0,
    /// Letter occurs elsewhere in the target
    CorrectLetterWrongPosition = 1,
    /// Letter is alphabetically close to the target letter at this position
    DeviatedLetterCorrectPosition = 2,
    /// Letter is alphabetically close to a target letter elsewhere
    DeviatedLetterWrongPosition = 3,
    /// Nothing matched
    WrongLetter = 4,
}

impl MatchResult {
    /// All results in code order
    pub const ALL: [Self; 5] = [
        Self::CorrectLetterCorrectPosition,
        Self::CorrectLetterWrongPosition,
        Self::DeviatedLetterCorrectPosition,
        Self::DeviatedLetterWrongPosition,
        Self::WrongLetter,
    ];

    /// Numeric code (0-4)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Result for a numeric code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::CorrectLetterCorrectPosition),
            1 => Some(Self::CorrectLetterWrongPosition),
            2 => Some(Self::DeviatedLetterCorrectPosition),
            3 => Some(Self::DeviatedLetterWrongPosition),
            4 => Some(Self::WrongLetter),
            _ => None,
        }
    }

    /// The guessed letter occurs in the target (codes 0 and 1)
    #[inline]
    #[must_use]
    pub const fn is_correct_letter(self) -> bool {
        matches!(
            self,
            Self::CorrectLetterCorrectPosition | Self::CorrectLetterWrongPosition
        )
    }

    /// The guessed letter was only near a target letter (codes 2 and 3)
    #[inline]
    #[must_use]
    pub const fn is_deviated(self) -> bool {
        matches!(
            self,
            Self::DeviatedLetterCorrectPosition | Self::DeviatedLetterWrongPosition
        )
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CorrectLetterCorrectPosition => "correct letter, correct position",
            Self::CorrectLetterWrongPosition => "correct letter, wrong position",
            Self::DeviatedLetterCorrectPosition => "deviated letter, correct position",
            Self::DeviatedLetterWrongPosition => "deviated letter, wrong position",
            Self::WrongLetter => "wrong letter",
        };
        f.write_str(name)
    }
}

/// The classification of every letter of one guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Feedback(Vec<MatchResult>);

/// Error parsing a persisted feedback string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("Feedback is empty")]
    Empty,
    #[error("Invalid feedback code '{character}' at position {position}")]
    InvalidCode { position: usize, character: char },
}

impl Feedback {
    #[must_use]
    pub const fn new(results: Vec<MatchResult>) -> Self {
        Self(results)
    }

    /// True iff every letter is in the correct position
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|&r| r == MatchResult::CorrectLetterCorrectPosition)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[MatchResult] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = MatchResult> + '_ {
        self.0.iter().copied()
    }

    /// Count the letters with the given classification
    #[must_use]
    pub fn count(&self, result: MatchResult) -> usize {
        self.0.iter().filter(|&&r| r == result).count()
    }

    /// Encode as one digit per letter
    ///
    /// # Examples
    /// ```
    /// use trivia_wordle::core::classify;
    ///
    /// let feedback = classify("APPLE", "SPORT", 4).unwrap();
    /// assert_eq!(feedback.encode(), "40244");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|r| char::from(b'0' + r.code()))
            .collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FeedbackParseError::Empty);
        }

        s.chars()
            .enumerate()
            .map(|(position, character)| {
                character
                    .to_digit(10)
                    .and_then(|d| MatchResult::from_code(d as u8))
                    .ok_or(FeedbackParseError::InvalidCode {
                        position,
                        character,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Feedback> for String {
    fn from(feedback: Feedback) -> Self {
        feedback.encode()
    }
}

impl TryFrom<String> for Feedback {
    type Error = FeedbackParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
