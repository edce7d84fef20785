//! Planning Poker - User story lifecycle service
//!
//! Stories are added to an estimation session, move between statuses while
//! the team votes, and can be removed only before estimation starts.
//! Status reads aggregate the votes recorded against a story.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
