//! In-Memory Session Registry Adapter
//!
//! Keeps the set of known sessions in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::SessionRegistry;

/// In-memory set of existing sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRegistry {
    sessions: Arc<RwLock<HashSet<SessionId>>>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a registry with the given sessions.
    pub fn with_sessions(ids: impl IntoIterator<Item = SessionId>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(ids.into_iter().collect())),
        }
    }

    /// Mark a session as existing. Returns false if it was already known.
    pub async fn register(&self, id: SessionId) -> bool {
        self.sessions.write().await.insert(id)
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.read().await.contains(id))
    }
}
