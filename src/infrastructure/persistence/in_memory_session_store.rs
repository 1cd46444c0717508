use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::SessionStore;
use crate::application::services::DocumentSession;
use crate::domain::SessionId;

pub const DEFAULT_MAX_OPEN_SESSIONS: usize = 100;

/// Process-local session registry holding at most `max_open` sessions.
///
/// Inserting into a full store evicts the session with the oldest
/// `created_at` first.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Arc<DocumentSession>>>,
    max_open: usize,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_max_open(DEFAULT_MAX_OPEN_SESSIONS)
    }

    /// A cap of zero is treated as one.
    pub fn with_max_open(max_open: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_open: max_open.max(1),
        }
    }

    pub fn max_open(&self) -> usize {
        self.max_open
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn oldest_session(sessions: &HashMap<SessionId, Arc<DocumentSession>>) -> Option<SessionId> {
    sessions
        .values()
        .min_by_key(|session| session.created_at())
        .map(|session| session.id())
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Arc<DocumentSession>) {
        let mut sessions = self.sessions.write().await;

        if !sessions.contains_key(&session.id()) {
            while sessions.len() >= self.max_open {
                let Some(oldest) = oldest_session(&sessions) else {
                    break;
                };
                sessions.remove(&oldest);
                tracing::info!(
                    session_id = %oldest,
                    max_open = self.max_open,
                    "Session store full, evicted oldest session"
                );
            }
        }

        sessions.insert(session.id(), session);
    }

    async fn get(&self, id: SessionId) -> Option<Arc<DocumentSession>> {
        self.sessions.read().await.get(&id).cloned()
    }

    async fn remove(&self, id: SessionId) -> Option<Arc<DocumentSession>> {
        self.sessions.write().await.remove(&id)
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
