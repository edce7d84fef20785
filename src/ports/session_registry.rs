//! Session registry port.
//!
//! Sessions are created and managed by another part of the system; stories
//! only need to know whether a session exists.

use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Resolves session identifiers to existence.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Check if a session exists.
    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_registry_is_object_safe() {
        fn _accepts_dyn(_registry: &dyn SessionRegistry) {}
    }
}
