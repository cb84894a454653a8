//! Trivia questions that gate the next guess
//!
//! After a wrong guess the engine draws one question from a [`TriviaGate`].
//! Checking the player's answer is left to the caller.

mod bank;
mod math;

pub use bank::QuestionBank;
pub use math::MathQuestions;

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A multiple-choice question with exactly three wrong answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaQuestion {
    pub question: String,
    pub correct_answer: String,
    pub wrong_answers: [String; 3],
}

impl TriviaQuestion {
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        wrong_answers: [String; 3],
    ) -> Self {
        Self {
            question: question.into(),
            correct_answer: correct_answer.into(),
            wrong_answers,
        }
    }

    /// All four answers in random order
    pub fn choices<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&str> {
        let mut choices: Vec<&str> = std::iter::once(self.correct_answer.as_str())
            .chain(self.wrong_answers.iter().map(String::as_str))
            .collect();
        choices.shuffle(rng);
        choices
    }

    /// Compare an answer ignoring case and surrounding whitespace
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case(self.correct_answer.trim())
    }
}

/// Source of trivia questions
#[async_trait]
pub trait TriviaGate: Send + Sync {
    async fn next_question(&self) -> Result<TriviaQuestion>;
}
