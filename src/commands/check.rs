//! Word check command

use crate::wordlists::{WordInfo, WordSource};
use anyhow::Result;

/// Legality and metadata of a word
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    pub info: WordInfo,
}

/// Check whether `word` may be guessed and look up what is known about it
///
/// # Errors
///
/// Returns an error if the word source fails.
pub async fn check_word(source: &dyn WordSource, word: &str) -> Result<CheckResult> {
    let valid = source.is_valid_word(word).await?;
    let info = if valid {
        source.lookup(word).await?
    } else {
        WordInfo::default()
    };

    Ok(CheckResult {
        word: word.trim().to_ascii_uppercase(),
        valid,
        info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DictionaryWordSource;

    #[tokio::test]
    async fn dictionary_word_has_metadata() {
        let source = DictionaryWordSource::embedded();
        let result = check_word(&source, "castle").await.unwrap();

        assert_eq!(result.word, "CASTLE");
        assert!(result.valid);
        assert!(result.info.definition.is_some());
        assert!(result.info.synonyms.contains("fortress"));
    }

    #[tokio::test]
    async fn unknown_word_is_valid_outside_strict_mode() {
        let source = DictionaryWordSource::embedded();
        let result = check_word(&source, "plumb").await.unwrap();

        assert!(result.valid);
        assert_eq!(result.info, WordInfo::default());

        let strict = DictionaryWordSource::embedded().with_strict(true);
        assert!(!check_word(&strict, "plumb").await.unwrap().valid);
    }

    #[tokio::test]
    async fn malformed_word_is_invalid() {
        let source = DictionaryWordSource::embedded();
        assert!(!check_word(&source, "cat").await.unwrap().valid);
        assert!(!check_word(&source, "c4stle").await.unwrap().valid);
    }
}
