//! Generate command
//!
//! Draws a random word and tells what the dictionary knows about it.

use crate::core::is_playable_length;
use crate::game::Difficulty;
use crate::wordlists::{WordInfo, WordSource};
use anyhow::{Result, bail};

/// A freshly drawn word and its metadata
pub struct GenerateResult {
    pub word: String,
    pub difficulty: Difficulty,
    pub info: WordInfo,
}

/// Draw a word of `length` letters (random when `None`)
///
/// # Errors
///
/// Returns an error if the length is outside 5..=15 or the word source
/// fails.
pub async fn generate_word(
    source: &dyn WordSource,
    length: Option<usize>,
    difficulty: Difficulty,
) -> Result<GenerateResult> {
    if let Some(length) = length.filter(|&l| !is_playable_length(l)) {
        bail!("Word length must be 5 to 15, got {length}");
    }

    let word = source.pick_word(length, difficulty).await?;
    let info = source.lookup(&word).await?;
    Ok(GenerateResult {
        word: word.to_ascii_uppercase(),
        difficulty,
        info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DictionaryWordSource;

    #[tokio::test]
    async fn generated_word_has_requested_length_and_metadata() {
        let source = DictionaryWordSource::embedded();

        for length in [5, 9, 15] {
            let result = generate_word(&source, Some(length), Difficulty::Hard)
                .await
                .unwrap();
            assert_eq!(result.word.len(), length);
            assert!(result.info.definition.is_some(), "{}", result.word);
        }
    }

    #[tokio::test]
    async fn random_length_is_playable() {
        let source = DictionaryWordSource::embedded();
        let result = generate_word(&source, None, Difficulty::Easy).await.unwrap();
        assert!(is_playable_length(result.word.len()));
    }

    #[tokio::test]
    async fn unplayable_length_is_rejected() {
        let source = DictionaryWordSource::embedded();
        assert!(generate_word(&source, Some(4), Difficulty::Easy).await.is_err());
        assert!(generate_word(&source, Some(16), Difficulty::Easy).await.is_err());
    }
}
