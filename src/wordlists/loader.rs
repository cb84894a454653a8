//! Dictionary loading utilities
//!
//! Provides functions to load dictionary entries from a TSV file or from the
//! embedded constant.

use super::DictionaryEntry;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary entries from a file
///
/// Each line holds `word`, `difficulty`, `definition` and comma-separated
/// `synonyms`, separated by tabs. Blank lines and `#` comments are skipped,
/// as are malformed lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use trivia_wordle::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/dictionary.tsv").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<DictionaryEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let entries = parse_entries(&content);
    tracing::debug!(path = %path.display(), count = entries.len(), "dictionary loaded");
    Ok(entries)
}

/// Parse TSV dictionary content, skipping anything malformed
#[must_use]
pub fn parse_entries(content: &str) -> Vec<DictionaryEntry> {
    content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<DictionaryEntry> {
    let mut fields = line.split('\t');
    let word = Word::new(fields.next()?).ok()?;
    let difficulty = fields.next()?.parse().ok()?;
    let definition = fields.next()?.trim().to_string();
    let synonyms = split_synonyms(fields.next().unwrap_or_default());

    if fields.next().is_some() {
        return None;
    }

    Some(DictionaryEntry {
        word: word.into_text(),
        difficulty,
        definition,
        synonyms,
    })
}

fn split_synonyms(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert the embedded dictionary to entries
///
/// # Examples
/// ```
/// use trivia_wordle::wordlists::loader::entries_from_slice;
/// use trivia_wordle::wordlists::DICTIONARY;
///
/// let entries = entries_from_slice(DICTIONARY);
/// assert_eq!(entries.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str, &str, &[&str])]) -> Vec<DictionaryEntry> {
    slice
        .iter()
        .filter_map(|&(word, difficulty, definition, synonyms)| {
            Some(DictionaryEntry {
                word: Word::new(word).ok()?.into_text(),
                difficulty: difficulty.parse().ok()?,
                definition: definition.to_string(),
                synonyms: synonyms.iter().map(|s| (*s).to_string()).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Difficulty;
    use std::io::Write;

    #[test]
    fn parse_reads_every_field() {
        let entries = parse_entries("river\tmedium\ta large stream\tstream, waterway\n");

        assert_eq!(
            entries,
            [DictionaryEntry {
                word: "RIVER".to_string(),
                difficulty: Difficulty::Medium,
                definition: "a large stream".to_string(),
                synonyms: vec!["stream".to_string(), "waterway".to_string()],
            }]
        );
    }

    #[test]
    fn parse_skips_comments_blank_and_malformed_lines() {
        let content = "\
# header
APPLE\teasy\ta fruit\tpome

ABC\teasy\ttoo short\t
GHOST\tscary\tbad difficulty\t
NYMPH\thard
SPORT\teasy\tgames\tgame\textra
HOUSE\teasy\ta building
";
        let words: Vec<_> = parse_entries(content).into_iter().map(|e| e.word).collect();
        assert_eq!(words, ["APPLE", "HOUSE"]);
    }

    #[test]
    fn missing_synonyms_are_empty() {
        let entries = parse_entries("HOUSE\teasy\ta building\t  ,  \n");
        assert!(entries[0].synonyms.is_empty());
    }

    #[test]
    fn load_from_file_reads_tsv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# word\tdifficulty\tdefinition\tsynonyms").unwrap();
        writeln!(file, "castle\tmedium\ta fortified building\tfortress,citadel").unwrap();

        let entries = load_from_file(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "CASTLE");
        assert_eq!(entries[0].synonyms, ["fortress", "citadel"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.tsv")).is_err());
    }

    #[test]
    fn entries_from_slice_skips_invalid() {
        let slice: &[(&str, &str, &str, &[&str])] = &[
            ("apple", "easy", "a fruit", &["pome"]),
            ("abc", "easy", "too short", &[]),
            ("glyph", "expert", "unknown difficulty", &[]),
        ];
        let entries = entries_from_slice(slice);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "APPLE");
        assert_eq!(entries[0].difficulty, Difficulty::Easy);
    }
}
