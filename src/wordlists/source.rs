//! Dictionary-backed word source

use super::loader::{entries_from_slice, load_from_file};
use super::{DICTIONARY, DictionaryEntry, WordInfo, WordSource};
use crate::core::{WORD_LENGTH_MAX, WORD_LENGTH_MIN, Word};
use crate::game::Difficulty;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::Path;

/// Word source over a fixed set of dictionary entries
///
/// Entries are indexed by length for picking and by word for lookups.
/// Outside strict mode any alphabetic word of playable length is a legal
/// guess; in strict mode it must also be in the dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryWordSource {
    entries: Vec<DictionaryEntry>,
    by_length: BTreeMap<usize, Vec<usize>>,
    by_word: FxHashMap<String, usize>,
    strict: bool,
}

impl DictionaryWordSource {
    /// Build from entries; words that are not playable are dropped
    #[must_use]
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        let entries: Vec<DictionaryEntry> = entries
            .into_iter()
            .filter_map(|mut entry| {
                entry.word = Word::new(&entry.word).ok()?.into_text();
                Some(entry)
            })
            .collect();

        let mut by_length: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        let mut by_word = FxHashMap::default();
        for (index, entry) in entries.iter().enumerate() {
            by_length.entry(entry.word.len()).or_default().push(index);
            // First entry wins on duplicates
            by_word.entry(entry.word.clone()).or_insert(index);
        }

        Self {
            entries,
            by_length,
            by_word,
            strict: false,
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(entries_from_slice(DICTIONARY))
    }

    /// Load a TSV dictionary file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or holds no usable entry.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let entries = load_from_file(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
        let source = Self::new(entries);
        if source.is_empty() {
            return Err(anyhow!("Dictionary {} has no playable words", path.display()));
        }
        Ok(source)
    }

    /// Require guesses to be dictionary words
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick an entry with the given generator
    ///
    /// Prefers entries of the requested difficulty and falls back to any
    /// entry of the length. Without a length, one is drawn among the
    /// playable lengths the dictionary covers.
    ///
    /// # Errors
    ///
    /// Fails if no entry has the requested length.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: Option<usize>,
        difficulty: Difficulty,
    ) -> Result<&DictionaryEntry> {
        let length = match length {
            Some(length) => length,
            None => {
                let lengths: Vec<usize> = self
                    .by_length
                    .range(WORD_LENGTH_MIN..=WORD_LENGTH_MAX)
                    .map(|(length, _)| *length)
                    .collect();
                *lengths
                    .choose(rng)
                    .ok_or_else(|| anyhow!("Dictionary has no playable words"))?
            }
        };

        let candidates = self
            .by_length
            .get(&length)
            .ok_or_else(|| anyhow!("No dictionary word has {length} letters"))?;

        let matching: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&i| self.entries[i].difficulty == difficulty)
            .collect();
        let pool = if matching.is_empty() {
            tracing::debug!(length, %difficulty, "no word of this difficulty, using any");
            candidates.as_slice()
        } else {
            matching.as_slice()
        };

        pool.choose(rng)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| anyhow!("No dictionary word has {length} letters"))
    }

    /// Guess legality for this source's mode
    ///
    /// Outside strict mode any well-formed word is accepted, since the
    /// dictionary only holds target words.
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        match Word::new(word) {
            Ok(word) => !self.strict || self.by_word.contains_key(word.text()),
            Err(_) => false,
        }
    }

    /// Definition and synonyms of a word, empty when unknown
    #[must_use]
    pub fn info(&self, word: &str) -> WordInfo {
        let Some(&index) = self.by_word.get(&word.trim().to_ascii_uppercase()) else {
            return WordInfo::default();
        };
        let entry = &self.entries[index];

        WordInfo {
            definition: Some(entry.definition.clone()).filter(|d| !d.is_empty()),
            synonyms: entry.synonyms.iter().cloned().collect(),
        }
    }
}

impl Default for DictionaryWordSource {
    fn default() -> Self {
        Self::embedded()
    }
}

#[async_trait]
impl WordSource for DictionaryWordSource {
    async fn pick_word(&self, length: Option<usize>, difficulty: Difficulty) -> Result<String> {
        let entry = self.pick(&mut rand::rng(), length, difficulty)?;
        Ok(entry.word.clone())
    }

    async fn is_valid_word(&self, word: &str) -> Result<bool> {
        Ok(self.accepts(word))
    }

    async fn lookup(&self, word: &str) -> Result<WordInfo> {
        Ok(self.info(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(word: &str, difficulty: Difficulty) -> DictionaryEntry {
        DictionaryEntry {
            word: word.to_string(),
            difficulty,
            definition: format!("definition of {word}"),
            synonyms: vec!["one".to_string(), "two".to_string()],
        }
    }

    fn small() -> DictionaryWordSource {
        DictionaryWordSource::new(vec![
            entry("APPLE", Difficulty::Easy),
            entry("GLYPH", Difficulty::Hard),
            entry("GARDEN", Difficulty::Easy),
        ])
    }

    #[test]
    fn pick_respects_length_and_difficulty() {
        let source = small();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            let entry = source.pick(&mut rng, Some(5), Difficulty::Hard).unwrap();
            assert_eq!(entry.word, "GLYPH");
        }
    }

    #[test]
    fn pick_falls_back_to_any_difficulty() {
        let source = small();
        let mut rng = StdRng::seed_from_u64(5);

        let entry = source.pick(&mut rng, Some(6), Difficulty::Hard).unwrap();
        assert_eq!(entry.word, "GARDEN");
    }

    #[test]
    fn pick_unknown_length_fails() {
        let source = small();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(source.pick(&mut rng, Some(9), Difficulty::Easy).is_err());
    }

    #[test]
    fn pick_without_length_uses_present_lengths() {
        let source = small();
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..50 {
            let entry = source.pick(&mut rng, None, Difficulty::Medium).unwrap();
            assert!(matches!(entry.word.len(), 5 | 6));
        }
    }

    #[test]
    fn embedded_source_picks_every_playable_length() {
        let source = DictionaryWordSource::embedded();
        let mut rng = StdRng::seed_from_u64(1);

        for length in WORD_LENGTH_MIN..=WORD_LENGTH_MAX {
            for difficulty in Difficulty::ALL {
                let entry = source.pick(&mut rng, Some(length), difficulty).unwrap();
                assert_eq!(entry.word.len(), length);
            }
        }
    }

    #[test]
    fn unplayable_entries_are_dropped() {
        let source = DictionaryWordSource::new(vec![
            entry("ABC", Difficulty::Easy),
            entry("APPLE", Difficulty::Easy),
        ]);
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn shape_check_outside_strict_mode() {
        let source = small();

        assert!(source.accepts("world"));
        assert!(source.accepts("WORLD"));
        assert!(source.accepts("xylophonesxxxyz"));
        assert!(!source.accepts("abcd"));
        assert!(!source.accepts("abcdefghijklmnop"));
        assert!(!source.accepts("wor1d"));
        assert!(!source.accepts(""));
    }

    #[test]
    fn strict_mode_requires_membership() {
        let source = small().with_strict(true);

        assert!(source.is_strict());
        assert!(source.accepts("apple"));
        assert!(source.accepts("GARDEN"));
        assert!(!source.accepts("WORLD"));
    }

    #[test]
    fn info_for_known_and_unknown_words() {
        let source = small();

        let info = source.info("apple");
        assert_eq!(info.definition.as_deref(), Some("definition of APPLE"));
        assert_eq!(
            info.synonyms.into_iter().collect::<Vec<_>>(),
            ["one", "two"]
        );

        assert_eq!(source.info("WORLD"), WordInfo::default());
    }

    #[test]
    fn from_file_rejects_empty_dictionary() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(DictionaryWordSource::from_file(file.path()).is_err());
    }

    #[tokio::test]
    async fn trait_methods_delegate() {
        let source = small().with_strict(true);

        let word = source.pick_word(Some(6), Difficulty::Easy).await.unwrap();
        assert_eq!(word, "GARDEN");
        assert!(source.is_valid_word("glyph").await.unwrap());
        assert!(!source.is_valid_word("world").await.unwrap());
        assert!(source.lookup("GLYPH").await.unwrap().definition.is_some());
    }
}
