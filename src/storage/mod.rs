//! Session and player persistence
//!
//! The engine only talks to storage through [`SessionStore`]; durable
//! backends implement it outside this crate. [`InMemorySessionStore`] is the
//! reference implementation used by the terminal game and the tests.
//! [`PlayerStore`] is the player registry the front-end consults before a
//! game starts.

mod memory;
mod players;

pub use memory::InMemorySessionStore;
pub use players::InMemoryPlayerStore;

use crate::core::Feedback;
use crate::game::{
    Guess, NewPlayer, NewSession, Player, PlayerId, Session, SessionId, SessionStatus,
};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence for sessions and their guesses
///
/// Implementations must give read-your-writes consistency and keep the
/// guesses of a session in append order.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new `Active` session
    async fn create(&self, new: NewSession) -> Result<Session>;

    /// The owner's `Active` or `PendingTrivia` session, if any
    async fn get_non_terminal_by_owner(&self, owner: &str) -> Result<Option<Session>>;

    async fn get_by_id(&self, id: SessionId) -> Result<Option<Session>>;

    /// Every session of the owner, newest first
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Session>>;

    /// Change the status and bump `updated_at`
    ///
    /// # Errors
    ///
    /// Fails if the session does not exist.
    async fn set_status(&self, id: SessionId, status: SessionStatus) -> Result<()>;

    /// Append a guess; the store assigns its id, number and timestamp
    async fn append_guess(
        &self,
        session_id: SessionId,
        content: &str,
        result: Feedback,
    ) -> Result<Guess>;

    /// Guesses of the session, oldest first
    async fn list_guesses(&self, session_id: SessionId) -> Result<Vec<Guess>>;

    /// Append a guess and move the session to `status` as one unit
    ///
    /// The default appends and then writes the status. If the status write
    /// fails the guess stays persisted while the session keeps its previous
    /// status; backends that can do better should override this.
    async fn commit_guess(
        &self,
        session_id: SessionId,
        content: &str,
        result: Feedback,
        status: SessionStatus,
    ) -> Result<Guess> {
        let guess = self.append_guess(session_id, content, result).await?;
        self.set_status(session_id, status).await?;
        Ok(guess)
    }
}

/// Registry of players, keyed by unique username
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Persist a new player
    ///
    /// # Errors
    ///
    /// Fails if the username is empty or already taken.
    async fn create(&self, new: NewPlayer) -> Result<Player>;

    async fn get_by_id(&self, id: PlayerId) -> Result<Option<Player>>;

    async fn get_by_username(&self, username: &str) -> Result<Option<Player>>;

    /// The player with `new.username`, created if unknown
    ///
    /// An existing player keeps the display name it was registered with.
    async fn register(&self, new: NewPlayer) -> Result<Player> {
        match self.get_by_username(&new.username).await? {
            Some(player) => Ok(player),
            None => self.create(new).await,
        }
    }
}
