//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRegistry` - Session existence lookups
//! - `StoryRepository` - Story persistence, including the guarded delete
//! - `VoteReader` - Read-only access to recorded votes

mod session_registry;
mod story_repository;
mod vote_reader;

pub use session_registry::SessionRegistry;
pub use story_repository::{DeleteOutcome, StoryRepository};
pub use vote_reader::VoteReader;
