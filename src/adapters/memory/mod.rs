//! In-memory adapters for tests and local development.

mod in_memory_session_registry;
mod in_memory_story_repository;
mod in_memory_vote_store;

pub use in_memory_session_registry::InMemorySessionRegistry;
pub use in_memory_story_repository::InMemoryStoryRepository;
pub use in_memory_vote_store::InMemoryVoteStore;
