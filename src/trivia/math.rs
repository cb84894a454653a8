//! Generated math questions
//!
//! Every question has an exact answer; wrong answers are small offsets of
//! it so they look plausible.

use super::{TriviaGate, TriviaQuestion};
use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;
use rand::seq::SliceRandom;

const OFFSETS: [i64; 8] = [-4, -3, -2, -1, 1, 2, 3, 4];

/// Kind of generated problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Problem {
    LinearEquation,
    RectangleArea,
    AngleComplement,
    Derivative,
    Mean,
}

impl Problem {
    const ALL: [Self; 5] = [
        Self::LinearEquation,
        Self::RectangleArea,
        Self::AngleComplement,
        Self::Derivative,
        Self::Mean,
    ];
}

/// Arithmetic, geometry, calculus and statistics questions
#[derive(Debug, Default, Clone, Copy)]
pub struct MathQuestions;

impl MathQuestions {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate a question with the given generator
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> TriviaQuestion {
        let problem = Problem::ALL[rng.random_range(0..Problem::ALL.len())];

        match problem {
            Problem::LinearEquation => {
                let a: i64 = rng.random_range(1..=9);
                let x: i64 = rng.random_range(-9..=9);
                let b = -a * x;
                let question = match b {
                    0 => format!("Solve for x: {a}x = 0"),
                    b if b < 0 => format!("Solve for x: {a}x - {} = 0", -b),
                    b => format!("Solve for x: {a}x + {b} = 0"),
                };
                integer_question(rng, question, x, |v| format!("x = {v}"))
            }
            Problem::RectangleArea => {
                let length: i64 = rng.random_range(2..=20);
                let width: i64 = rng.random_range(2..=20);
                integer_question(
                    rng,
                    format!("What is the area of a rectangle with length {length} and width {width}?"),
                    length * width,
                    |v| v.to_string(),
                )
            }
            Problem::AngleComplement => {
                let angle: i64 = rng.random_range(5..=85);
                integer_question(
                    rng,
                    format!("What is the complement of a {angle} degree angle?"),
                    90 - angle,
                    |v| format!("{v} degrees"),
                )
            }
            Problem::Derivative => {
                let coeff: i64 = rng.random_range(3..=9);
                integer_question(
                    rng,
                    format!("What is the derivative of {coeff}x^2?"),
                    2 * coeff,
                    |v| format!("{v}x"),
                )
            }
            Problem::Mean => {
                let values = loop {
                    let values: Vec<i64> = (0..5).map(|_| rng.random_range(1..=20)).collect();
                    if values.iter().sum::<i64>() % 5 == 0 {
                        break values;
                    }
                };
                let mean = values.iter().sum::<i64>() / 5;
                let listed = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                integer_question(
                    rng,
                    format!("What is the mean of {listed}?"),
                    mean,
                    |v| v.to_string(),
                )
            }
        }
    }
}

/// Build a question whose wrong answers are distinct offsets of `answer`
fn integer_question<R, F>(rng: &mut R, question: String, answer: i64, render: F) -> TriviaQuestion
where
    R: Rng + ?Sized,
    F: Fn(i64) -> String,
{
    let mut offsets = OFFSETS;
    offsets.shuffle(rng);
    let wrong = [0, 1, 2].map(|i| render(answer + offsets[i]));
    TriviaQuestion::new(question, render(answer), wrong)
}

#[async_trait]
impl TriviaGate for MathQuestions {
    async fn next_question(&self) -> Result<TriviaQuestion> {
        let question = self.generate(&mut rand::rng());
        tracing::debug!(question = %question.question, "math trivia generated");
        Ok(question)
    }
}
