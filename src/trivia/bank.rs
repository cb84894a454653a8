//! Embedded general-knowledge questions

use super::{TriviaGate, TriviaQuestion};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rand::Rng;
use rand::seq::IndexedRandom;

type Entry = (&'static str, &'static str, [&'static str; 3]);

const QUESTIONS: &[Entry] = &[
    ("What is the chemical symbol for gold?", "Au", ["Ag", "Gd", "Go"]),
    ("How many sides does a hexagon have?", "6", ["5", "7", "8"]),
    ("Which planet is known as the Red Planet?", "Mars", ["Venus", "Jupiter", "Mercury"]),
    ("What is the largest ocean on Earth?", "Pacific", ["Atlantic", "Indian", "Arctic"]),
    ("Who wrote \"Romeo and Juliet\"?", "William Shakespeare", ["Charles Dickens", "Jane Austen", "Mark Twain"]),
    ("What is the boiling point of water at sea level in Celsius?", "100", ["90", "110", "212"]),
    ("Which gas do plants absorb from the air?", "Carbon dioxide", ["Oxygen", "Nitrogen", "Helium"]),
    ("What is the capital of Japan?", "Tokyo", ["Kyoto", "Osaka", "Seoul"]),
    ("How many continents are there?", "7", ["5", "6", "8"]),
    ("What is the hardest natural substance?", "Diamond", ["Quartz", "Granite", "Iron"]),
    ("Which instrument has 88 keys?", "Piano", ["Organ", "Harpsichord", "Accordion"]),
    ("In which year did the first person walk on the Moon?", "1969", ["1965", "1972", "1959"]),
    ("What is the smallest prime number?", "2", ["1", "3", "0"]),
    ("Which organ pumps blood through the body?", "Heart", ["Liver", "Lungs", "Kidney"]),
    ("What is the longest river in Africa?", "Nile", ["Congo", "Niger", "Zambezi"]),
    ("How many bits are in a byte?", "8", ["4", "16", "10"]),
    ("What color do you get by mixing blue and yellow?", "Green", ["Purple", "Orange", "Brown"]),
    ("Which language has the most native speakers?", "Mandarin Chinese", ["English", "Spanish", "Hindi"]),
    ("What is the freezing point of water in Fahrenheit?", "32", ["0", "16", "100"]),
    ("Who painted the Mona Lisa?", "Leonardo da Vinci", ["Michelangelo", "Raphael", "Donatello"]),
];

/// Questions compiled into the binary, drawn uniformly at random
#[derive(Debug, Default, Clone, Copy)]
pub struct QuestionBank;

impl QuestionBank {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Number of questions available
    #[must_use]
    pub const fn len(&self) -> usize {
        QUESTIONS.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        QUESTIONS.is_empty()
    }

    /// Draw a question with the given generator
    ///
    /// # Errors
    ///
    /// Fails only if the bank is empty.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TriviaQuestion> {
        let (question, correct, wrong) = QUESTIONS
            .choose(rng)
            .ok_or_else(|| anyhow!("question bank is empty"))?;

        Ok(TriviaQuestion::new(
            *question,
            *correct,
            wrong.map(str::to_string),
        ))
    }
}

#[async_trait]
impl TriviaGate for QuestionBank {
    async fn next_question(&self) -> Result<TriviaQuestion> {
        let question = self.draw(&mut rand::rng())?;
        tracing::debug!(question = %question.question, "trivia drawn from bank");
        Ok(question)
    }
}
