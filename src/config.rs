//! Engine and application configuration
//!
//! Everything has a default, so an empty TOML file (or none at all) is a
//! valid configuration:
//!
//! ```toml
//! dictionary = "data/dictionary.tsv"
//! strict_words = false
//! trivia = "math"
//!
//! [engine]
//! deviation_threshold = 4
//!
//! [engine.hint_weights]
//! letter = 80
//! definition = 10
//! synonyms = 10
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default maximum character-code distance for a deviated letter
pub const DEFAULT_DEVIATION_THRESHOLD: u32 = 4;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Hint weights must not all be zero")]
    NoHintWeight,
}

/// Relative odds of each hint kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintWeights {
    pub letter: u32,
    pub definition: u32,
    pub synonyms: u32,
}

impl Default for HintWeights {
    fn default() -> Self {
        Self {
            letter: 80,
            definition: 10,
            synonyms: 10,
        }
    }
}

impl HintWeights {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.as_array().into_iter().map(u64::from).sum()
    }

    /// Weights in hint order: letter, definition, synonyms
    #[must_use]
    pub const fn as_array(&self) -> [u32; 3] {
        [self.letter, self.definition, self.synonyms]
    }
}

/// Game rules used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub deviation_threshold: u32,
    pub hint_weights: HintWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deviation_threshold: DEFAULT_DEVIATION_THRESHOLD,
            hint_weights: HintWeights::default(),
        }
    }
}

impl EngineConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::NoHintWeight` if every hint weight is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hint_weights.total() == 0 {
            return Err(ConfigError::NoHintWeight);
        }
        Ok(())
    }
}

/// Where trivia questions come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriviaKind {
    /// Embedded general-knowledge questions
    #[default]
    Bank,
    /// Generated math questions
    Math,
}

impl std::str::FromStr for TriviaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bank" => Ok(Self::Bank),
            "math" => Ok(Self::Math),
            other => Err(format!("Unknown trivia source: {other} (expected bank or math)")),
        }
    }
}

/// Configuration of the terminal game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// TSV dictionary to use instead of the embedded one
    pub dictionary: Option<PathBuf>,
    /// Only accept dictionary words as guesses
    pub strict_words: bool,
    pub trivia: TriviaKind,
}

impl AppConfig {
    /// Parse and validate TOML text
    ///
    /// # Errors
    ///
    /// Fails on invalid TOML or an invalid engine configuration.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Load a TOML config file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.engine.deviation_threshold, 4);
        assert_eq!(config.engine.hint_weights.as_array(), [80, 10, 10]);
        assert_eq!(config.trivia, TriviaKind::Bank);
        assert!(!config.strict_words);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            trivia = "math"

            [engine]
            deviation_threshold = 2

            [engine.hint_weights]
            synonyms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.trivia, TriviaKind::Math);
        assert_eq!(config.engine.deviation_threshold, 2);
        assert_eq!(config.engine.hint_weights.as_array(), [80, 10, 0]);
    }

    #[test]
    fn zero_hint_weights_are_rejected() {
        let result = AppConfig::from_toml(
            "[engine.hint_weights]\nletter = 0\ndefinition = 0\nsynonyms = 0\n",
        );
        assert!(matches!(result, Err(ConfigError::NoHintWeight)));
    }

    #[test]
    fn unknown_trivia_kind_is_a_parse_error() {
        let result = AppConfig::from_toml("trivia = \"history\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strict_words = true").unwrap();
        writeln!(file, "dictionary = \"words.tsv\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.strict_words);
        assert_eq!(config.dictionary, Some(PathBuf::from("words.tsv")));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn trivia_kind_from_str() {
        assert_eq!("Math".parse::<TriviaKind>(), Ok(TriviaKind::Math));
        assert_eq!("bank".parse::<TriviaKind>(), Ok(TriviaKind::Bank));
        assert!("quiz".parse::<TriviaKind>().is_err());
    }
}
