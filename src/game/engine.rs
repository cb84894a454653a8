//! Game engine: the session state machine
//!
//! ```text
//! Active --wrong guess--> PendingTrivia --correct answer--> Active
//!   |                          |
//!   +--win / end--> Completed <--end
//! ```
//!
//! The engine holds no per-session state; everything lives in the
//! [`SessionStore`]. It trusts the caller to keep at most one non-terminal
//! session per owner and to serialize operations of the same owner.

use super::{Difficulty, GameError, Guess, NewSession, Session, SessionStatus};
use crate::config::EngineConfig;
use crate::core::{WORD_LENGTH_MAX, WORD_LENGTH_MIN, Word, classify, is_playable_length};
use crate::storage::SessionStore;
use crate::trivia::{TriviaGate, TriviaQuestion};
use crate::wordlists::WordSource;
use anyhow::anyhow;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Options for a new game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOptions {
    /// Word length; random in 5..=15 when absent
    pub length: Option<usize>,
    pub difficulty: Difficulty,
}

/// Result of a scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched; the session is completed
    Won { guess: Guess, guesses: usize },
    /// The session now waits for `trivia` to be answered
    Continue {
        guess: Guess,
        trivia: TriviaQuestion,
    },
}

impl GuessOutcome {
    #[must_use]
    pub const fn guess(&self) -> &Guess {
        match self {
            Self::Won { guess, .. } | Self::Continue { guess, .. } => guess,
        }
    }
}

/// Result of answering a pending trivia question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriviaResolution {
    /// Correct answer; guessing may continue
    Resumed,
    /// Wrong answer; the session still waits, now on a new question
    StillPending { trivia: TriviaQuestion },
}

/// Help about the target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// `letter` is at `position` (0-based)
    Letter { letter: char, position: usize },
    Definition(String),
    Synonyms(Vec<String>),
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter { letter, position } => {
                write!(f, "Letter {} is '{letter}'", position + 1)
            }
            Self::Definition(definition) => write!(f, "Definition: {definition}"),
            Self::Synonyms(synonyms) => write!(f, "Synonyms: {}", synonyms.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HintKind {
    Letter,
    Definition,
    Synonyms,
}

impl HintKind {
    const ALL: [Self; 3] = [Self::Letter, Self::Definition, Self::Synonyms];
}

/// Orchestrates scoring, persistence and trivia for every player
pub struct GameEngine {
    words: Arc<dyn WordSource>,
    store: Arc<dyn SessionStore>,
    trivia: Arc<dyn TriviaGate>,
    config: EngineConfig,
    rng: Mutex<StdRng>,
}

impl GameEngine {
    /// Create an engine whose random choices are seeded from the OS
    pub fn new(
        words: Arc<dyn WordSource>,
        store: Arc<dyn SessionStore>,
        trivia: Arc<dyn TriviaGate>,
        config: EngineConfig,
    ) -> Self {
        Self {
            words,
            store,
            trivia,
            config,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Replace the random generator, for reproducible lengths and hints
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    fn random<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    async fn active_session(&self, owner: &str) -> Result<Session, GameError> {
        self.store
            .get_non_terminal_by_owner(owner)
            .await?
            .ok_or_else(|| GameError::SessionNotFound(owner.to_string()))
    }

    /// Start a new game for `owner`
    ///
    /// # Errors
    ///
    /// `InvalidLength` for a length outside 5..=15, checked before the word
    /// source is asked. `Collaborator` if the word source or store fails or
    /// the word source returns an unplayable word.
    pub async fn start(&self, owner: &str, options: StartOptions) -> Result<Session, GameError> {
        let length = match options.length {
            Some(length) if !is_playable_length(length) => {
                return Err(GameError::InvalidLength(length));
            }
            Some(length) => length,
            None => self.random(|rng| rng.random_range(WORD_LENGTH_MIN..=WORD_LENGTH_MAX)),
        };

        let picked = self.words.pick_word(Some(length), options.difficulty).await?;
        let word = Word::new(&picked)
            .map_err(|e| anyhow!("word source returned '{picked}': {e}"))?
            .into_text();

        let session = self
            .store
            .create(NewSession {
                word,
                owner: owner.to_string(),
                difficulty: options.difficulty,
            })
            .await?;

        tracing::info!(
            session_id = %session.id,
            owner,
            length = session.word.len(),
            difficulty = %session.difficulty,
            "game started"
        );
        Ok(session)
    }

    /// Whether `word` is a legal guess
    ///
    /// # Errors
    ///
    /// `Collaborator` if the word source fails.
    pub async fn check_valid_word(&self, word: &str) -> Result<bool, GameError> {
        Ok(self.words.is_valid_word(word).await?)
    }

    /// Score a guess against the owner's current word
    ///
    /// A winning guess completes the session. Any other guess is persisted
    /// together with the move to `PendingTrivia`, and the trivia question to
    /// answer is returned. The question is drawn before anything is written,
    /// so a failing trivia gate leaves the session untouched.
    ///
    /// # Errors
    ///
    /// `SessionNotFound`, `TriviaPending`, `UnequalLength` and `InvalidWord`
    /// persist nothing. `Collaborator` on store or trivia failure.
    pub async fn submit_guess(&self, owner: &str, guess: &str) -> Result<GuessOutcome, GameError> {
        let session = self.active_session(owner).await?;
        if session.status == SessionStatus::PendingTrivia {
            return Err(GameError::TriviaPending);
        }

        // ASCII case folding keeps the character count of what was typed
        let guess = guess.trim().to_ascii_uppercase();
        let feedback = classify(&guess, &session.word, self.config.deviation_threshold)?;
        let guess = Word::new(&guess)?.into_text();

        if feedback.is_win() {
            let guess = self
                .store
                .commit_guess(session.id, &guess, feedback, SessionStatus::Completed)
                .await?;
            tracing::info!(
                session_id = %session.id,
                owner,
                guesses = guess.number,
                "game won"
            );
            let guesses = guess.number;
            return Ok(GuessOutcome::Won { guess, guesses });
        }

        let trivia = self.trivia.next_question().await?;
        let guess = self
            .store
            .commit_guess(session.id, &guess, feedback, SessionStatus::PendingTrivia)
            .await?;
        tracing::debug!(
            session_id = %session.id,
            number = guess.number,
            result = %guess.result,
            "guess recorded, trivia pending"
        );
        Ok(GuessOutcome::Continue { guess, trivia })
    }

    /// Record whether the pending trivia question was answered correctly
    ///
    /// # Errors
    ///
    /// `SessionNotFound` without a current game, `NoTriviaPending` when the
    /// session is active. `Collaborator` on store or trivia failure.
    pub async fn resolve_trivia(
        &self,
        owner: &str,
        correct: bool,
    ) -> Result<TriviaResolution, GameError> {
        let session = self.active_session(owner).await?;
        if session.status != SessionStatus::PendingTrivia {
            return Err(GameError::NoTriviaPending);
        }

        if correct {
            self.store
                .set_status(session.id, SessionStatus::Active)
                .await?;
            tracing::debug!(session_id = %session.id, "trivia answered, guessing resumed");
            return Ok(TriviaResolution::Resumed);
        }

        let trivia = self.trivia.next_question().await?;
        tracing::debug!(session_id = %session.id, "trivia missed, new question drawn");
        Ok(TriviaResolution::StillPending { trivia })
    }

    /// End the owner's current game, returning it so the word can be shown
    ///
    /// # Errors
    ///
    /// `SessionNotFound` without a current game. `Collaborator` on store
    /// failure.
    pub async fn end(&self, owner: &str) -> Result<Session, GameError> {
        let mut session = self.active_session(owner).await?;
        self.store
            .set_status(session.id, SessionStatus::Completed)
            .await?;
        session.status = SessionStatus::Completed;

        tracing::info!(session_id = %session.id, owner, "game ended");
        Ok(session)
    }

    /// A random hint about the current word; never changes the session
    ///
    /// Definition and synonym hints fall back to a letter hint when the word
    /// source knows nothing about the word.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` without a current game. `Collaborator` on store or
    /// word source failure.
    pub async fn hint(&self, owner: &str) -> Result<Hint, GameError> {
        let session = self.active_session(owner).await?;
        let kind = self.random(|rng| self.hint_kind(rng));

        let hint = match kind {
            HintKind::Letter => None,
            HintKind::Definition => self
                .words
                .lookup(&session.word)
                .await?
                .definition
                .map(Hint::Definition),
            HintKind::Synonyms => {
                let synonyms = self.words.lookup(&session.word).await?.synonyms;
                (!synonyms.is_empty()).then(|| Hint::Synonyms(synonyms.into_iter().collect()))
            }
        };

        let hint = match hint {
            Some(hint) => hint,
            None => {
                if kind != HintKind::Letter {
                    tracing::warn!(
                        session_id = %session.id,
                        ?kind,
                        "no word metadata, falling back to a letter hint"
                    );
                }
                self.letter_hint(&session.word)?
            }
        };

        tracing::debug!(session_id = %session.id, %hint, "hint given");
        Ok(hint)
    }

    fn hint_kind(&self, rng: &mut StdRng) -> HintKind {
        match WeightedIndex::new(self.config.hint_weights.as_array()) {
            Ok(dist) => HintKind::ALL[dist.sample(rng)],
            Err(_) => HintKind::Letter,
        }
    }

    fn letter_hint(&self, word: &str) -> Result<Hint, GameError> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Err(anyhow!("session word is empty").into());
        }

        let position = self.random(|rng| rng.random_range(0..letters.len()));
        Ok(Hint::Letter {
            letter: letters[position],
            position,
        })
    }

    /// The owner's active or pending-trivia session, if any
    ///
    /// # Errors
    ///
    /// `Collaborator` on store failure.
    pub async fn current(&self, owner: &str) -> Result<Option<Session>, GameError> {
        Ok(self.store.get_non_terminal_by_owner(owner).await?)
    }

    /// Guesses of the current game, oldest first
    ///
    /// # Errors
    ///
    /// `SessionNotFound` without a current game. `Collaborator` on store
    /// failure.
    pub async fn guesses(&self, owner: &str) -> Result<Vec<Guess>, GameError> {
        let session = self.active_session(owner).await?;
        Ok(self.store.list_guesses(session.id).await?)
    }

    /// Every game of the owner, newest first
    ///
    /// # Errors
    ///
    /// `Collaborator` on store failure.
    pub async fn history(&self, owner: &str) -> Result<Vec<Session>, GameError> {
        Ok(self.store.list_by_owner(owner).await?)
    }
}
