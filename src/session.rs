//! Per-user interview sessions and the session store
//!
//! A session tracks how far a user has progressed through the fixed
//! question sequence and accumulates their answers. Sessions live only in
//! memory; the store is a trait so request handlers can be tested against
//! an isolated instance instead of hidden global state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A step in the fixed question sequence
///
/// Each phase stores exactly one answer field. Phase 5 (generation
/// complete) is never stored: completing the final phase deletes the
/// session instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Phase 1: what type of website
    WebsiteType,
    /// Phase 2: background theme
    ColorPalette,
    /// Phase 3: main accent color
    AccentColor,
    /// Phase 4: free-text content
    AdditionalInfo,
}

impl Phase {
    /// The 1-based phase number as presented to the client
    pub fn number(&self) -> u8 {
        match self {
            Self::WebsiteType => 1,
            Self::ColorPalette => 2,
            Self::AccentColor => 3,
            Self::AdditionalInfo => 4,
        }
    }

    /// The phase that follows this one, or `None` after the final phase
    pub fn next(&self) -> Option<Phase> {
        match self {
            Self::WebsiteType => Some(Self::ColorPalette),
            Self::ColorPalette => Some(Self::AccentColor),
            Self::AccentColor => Some(Self::AdditionalInfo),
            Self::AdditionalInfo => None,
        }
    }
}

/// Answers accumulated across the interview
///
/// Each field is `None` until the corresponding phase has completed, so a
/// session only ever carries answers for phases the user has been through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responses {
    /// Phase 1 answer: type of website
    pub website_type: Option<String>,
    /// Phase 2 answer: background theme
    pub color_palette: Option<String>,
    /// Phase 3 answer: main accent color
    pub accent_color: Option<String>,
    /// Phase 4 answer: free-text content
    pub additional_info: Option<String>,
    /// Stored paths of images uploaded during the interview
    #[serde(default)]
    pub image_paths: Vec<String>,
}

/// A single user's interview state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Current phase awaiting an answer
    pub phase: Phase,
    /// Answers collected so far
    pub responses: Responses,
}

impl Session {
    /// Creates a fresh session at phase 1 with no answers
    pub fn new() -> Self {
        Self {
            phase: Phase::WebsiteType,
            responses: Responses::default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage abstraction for interview sessions
///
/// Keyed by an opaque user identifier. Implementations are shared across
/// request handlers; the provided in-memory store is the only one the
/// service ships with (no persistence across restarts).
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a session by user id
    async fn get(&self, user_id: &str) -> Option<Session>;

    /// Insert or replace a session for a user id
    async fn put(&self, user_id: &str, session: Session);

    /// Delete a session, returning it if one existed
    async fn remove(&self, user_id: &str) -> Option<Session>;
}

/// In-memory session store backed by a `HashMap`
///
/// Lock scope is a single get/put/remove; interleaved phase updates from
/// concurrent requests with the same user id are an accepted race
/// (last writer wins).
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, user_id: &str) -> Option<Session> {
        self.sessions.read().await.get(user_id).cloned()
    }

    async fn put(&self, user_id: &str, session: Session) {
        self.sessions
            .write()
            .await
            .insert(user_id.to_string(), session);
    }

    async fn remove(&self, user_id: &str) -> Option<Session> {
        self.sessions.write().await.remove(user_id)
    }
}
