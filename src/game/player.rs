//! Player records
//!
//! Sessions are owned by a player's `username`; the display name is only
//! used when rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Unique login name; owner key of the player's sessions
    pub username: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to register a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub username: String,
    pub display_name: String,
}

impl NewPlayer {
    /// Trimmed names; an empty display name falls back to the username
    #[must_use]
    pub fn new(username: &str, display_name: Option<&str>) -> Self {
        let username = username.trim().to_string();
        let display_name = display_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| username.clone(), str::to_string);
        Self {
            username,
            display_name,
        }
    }
}
