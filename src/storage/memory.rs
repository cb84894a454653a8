//! In-memory session store

use super::SessionStore;
use crate::core::Feedback;
use crate::game::{Guess, GuessId, NewSession, Session, SessionId, SessionStatus};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

/// Session store backed by hash maps behind a single lock
///
/// Nothing survives the process. Sessions and guesses are never deleted.
#[derive(Default)]
pub struct InMemorySessionStore {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    sessions: FxHashMap<SessionId, Session>,
    /// Creation order of sessions, for owner history
    order: Vec<SessionId>,
    guesses: FxHashMap<SessionId, Vec<Guess>>,
}

impl State {
    fn session_mut(&mut self, id: SessionId) -> Result<&mut Session> {
        self.sessions
            .get_mut(&id)
            .ok_or_else(|| anyhow!("session {id} does not exist"))
    }

    fn push_guess(&mut self, session_id: SessionId, content: &str, result: Feedback) -> Result<Guess> {
        if !self.sessions.contains_key(&session_id) {
            return Err(anyhow!("session {session_id} does not exist"));
        }

        let guesses = self.guesses.entry(session_id).or_default();
        let guess = Guess {
            id: GuessId::new(),
            session_id,
            number: guesses.len() + 1,
            content: content.to_string(),
            result,
            created_at: Utc::now(),
        };
        guesses.push(guess.clone());
        Ok(guess)
    }

    fn update_status(&mut self, id: SessionId, status: SessionStatus) -> Result<()> {
        let session = self.session_mut(id)?;
        session.status = status;
        session.updated_at = Utc::now();
        Ok(())
    }
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, new: NewSession) -> Result<Session> {
        let now = Utc::now();
        let session = Session {
            id: SessionId::new(),
            word: new.word,
            owner: new.owner,
            difficulty: new.difficulty,
            status: SessionStatus::Active,
            created_at: now,
            updated_at: now,
        };

        let mut state = self.state.write().await;
        state.sessions.insert(session.id, session.clone());
        state.order.push(session.id);
        tracing::debug!(session_id = %session.id, owner = %session.owner, "session stored");
        Ok(session)
    }

    async fn get_non_terminal_by_owner(&self, owner: &str) -> Result<Option<Session>> {
        let state = self.state.read().await;
        // Newest first, in case a caller let two non-terminal sessions exist
        Ok(state
            .order
            .iter()
            .rev()
            .filter_map(|id| state.sessions.get(id))
            .find(|s| s.owner == owner && !s.status.is_terminal())
            .cloned())
    }

    async fn get_by_id(&self, id: SessionId) -> Result<Option<Session>> {
        Ok(self.state.read().await.sessions.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Session>> {
        let state = self.state.read().await;
        Ok(state
            .order
            .iter()
            .rev()
            .filter_map(|id| state.sessions.get(id))
            .filter(|s| s.owner == owner)
            .cloned()
            .collect())
    }

    async fn set_status(&self, id: SessionId, status: SessionStatus) -> Result<()> {
        self.state.write().await.update_status(id, status)
    }

    async fn append_guess(
        &self,
        session_id: SessionId,
        content: &str,
        result: Feedback,
    ) -> Result<Guess> {
        self.state
            .write()
            .await
            .push_guess(session_id, content, result)
    }

    async fn list_guesses(&self, session_id: SessionId) -> Result<Vec<Guess>> {
        Ok(self
            .state
            .read()
            .await
            .guesses
            .get(&session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn commit_guess(
        &self,
        session_id: SessionId,
        content: &str,
        result: Feedback,
        status: SessionStatus,
    ) -> Result<Guess> {
        let mut state = self.state.write().await;
        // push_guess rejects unknown sessions, so the status write cannot fail
        let guess = state.push_guess(session_id, content, result)?;
        state.update_status(session_id, status)?;
        Ok(guess)
    }
}
