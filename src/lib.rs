//! Trivia Wordle
//!
//! A word-guessing game engine with graded letter feedback and a trivia gate
//! between guesses. Words are 5 to 15 letters long; besides exact and
//! misplaced letters, the feedback marks letters whose character codes are
//! close to a target letter.
//!
//! # Quick Start
//!
//! ```rust
//! use trivia_wordle::core::{classify, MatchResult};
//!
//! let feedback = classify("GYPSY", "SPORT", 4).unwrap();
//! assert_eq!(feedback.count(MatchResult::CorrectLetterWrongPosition), 2);
//! assert!(!feedback.is_win());
//! ```

// Core domain types and scoring
pub mod core;

// Sessions and the game engine
pub mod game;

// Session persistence
pub mod storage;

// Trivia questions
pub mod trivia;

// Word sources and the embedded dictionary
pub mod wordlists;

// Engine and application configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
