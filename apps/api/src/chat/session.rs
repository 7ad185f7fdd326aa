//! Session-scoped conversation state.
//!
//! Every session owns its own transcript, unlock flag, and spoiler level;
//! nothing is shared across sessions and nothing survives session end.
//! The store is an in-memory map keyed by session id — no persistence.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::chat::spoiler::SpoilerLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Append-only, ordered by submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One user's interactive lifetime with the application.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    /// Set once by the credential gate; never resets except by session end.
    pub unlocked: bool,
    /// Mutable per turn — the last value the user submitted with a question.
    pub spoiler_level: SpoilerLevel,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            unlocked: false,
            spoiler_level: SpoilerLevel::default(),
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// In-memory session map shared by all handlers via `AppState`.
///
/// The lock is held only for map reads and short mutations — never across
/// the model call, so one session's turn cannot stall another session.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Session {
        let session = Session::new();
        self.inner.write().await.insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Marks the session unlocked after a successful gate check.
    /// Returns `false` when the session does not exist.
    pub async fn unlock(&self, id: Uuid) -> bool {
        match self.inner.write().await.get_mut(&id) {
            Some(session) => {
                session.unlocked = true;
                true
            }
            None => false,
        }
    }

    /// Appends one completed turn — the user question and the assistant
    /// reply together — and records the spoiler level used for it.
    /// A failed model call never reaches this point, so the transcript
    /// keeps strict user/assistant alternation.
    pub async fn append_turn(
        &self,
        id: Uuid,
        question: String,
        reply: String,
        spoiler_level: SpoilerLevel,
    ) -> bool {
        match self.inner.write().await.get_mut(&id) {
            Some(session) => {
                let now = Utc::now();
                session.spoiler_level = spoiler_level;
                session.messages.push(Message {
                    role: Role::User,
                    content: question,
                    created_at: now,
                });
                session.messages.push(Message {
                    role: Role::Assistant,
                    content: reply,
                    created_at: now,
                });
                true
            }
            None => false,
        }
    }

    /// Ends the session, destroying all of its state.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }
}
