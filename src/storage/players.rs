//! In-memory player registry

use super::PlayerStore;
use crate::game::{NewPlayer, Player, PlayerId};
use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::Utc;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPlayerStore {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    players: FxHashMap<PlayerId, Player>,
    by_username: FxHashMap<String, PlayerId>,
}

impl InMemoryPlayerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn create(&self, new: NewPlayer) -> Result<Player> {
        if new.username.is_empty() {
            bail!("username must not be empty");
        }

        let mut state = self.state.write().await;
        if state.by_username.contains_key(&new.username) {
            bail!("username '{}' is already registered", new.username);
        }

        let player = Player {
            id: PlayerId::new(),
            username: new.username,
            display_name: new.display_name,
            created_at: Utc::now(),
        };
        state.by_username.insert(player.username.clone(), player.id);
        state.players.insert(player.id, player.clone());
        tracing::debug!(player_id = %player.id, username = %player.username, "player stored");
        Ok(player)
    }

    async fn get_by_id(&self, id: PlayerId) -> Result<Option<Player>> {
        Ok(self.state.read().await.players.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<Player>> {
        let state = self.state.read().await;
        Ok(state
            .by_username
            .get(username)
            .and_then(|id| state.players.get(id))
            .cloned())
    }
}
