//! Story domain module.
//!
//! User stories are the items estimated inside a planning-poker session.
//! A story carries an immutable description, belongs to exactly one session,
//! and moves freely between statuses. Votes are owned elsewhere; this module
//! only aggregates them into a [`StoryStatusReport`].

mod aggregate;
mod errors;
mod status;
mod status_report;

pub use aggregate::{Story, MAX_DESCRIPTION_LENGTH};
pub use errors::StoryError;
pub use status::StoryStatus;
pub use status_report::StoryStatusReport;
