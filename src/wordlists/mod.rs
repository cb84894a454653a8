//! Word sources for new games
//!
//! The engine asks a [`WordSource`] for target words, for guess legality and
//! for the definition and synonyms used by hints. [`DictionaryWordSource`]
//! serves all three from a dictionary compiled into the binary or loaded
//! from a file.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use source::DictionaryWordSource;

use crate::game::Difficulty;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// One dictionary record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Upper case
    pub word: String,
    pub difficulty: Difficulty,
    pub definition: String,
    pub synonyms: Vec<String>,
}

/// Lexical metadata of a word; empty when nothing is known
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordInfo {
    pub definition: Option<String>,
    pub synonyms: BTreeSet<String>,
}

/// Provider of target words and word metadata
#[async_trait]
pub trait WordSource: Send + Sync {
    /// A playable word of `length` letters, or of any playable length
    async fn pick_word(&self, length: Option<usize>, difficulty: Difficulty) -> Result<String>;

    /// Whether `word` may be used as a guess
    async fn is_valid_word(&self, word: &str) -> Result<bool>;

    async fn lookup(&self, word: &str) -> Result<WordInfo>;
}
