//! HTTP adapter for story endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateStoryRequest, ErrorResponse, StoryResponse, StoryStatusResponse,
    UpdateStoryStatusRequest,
};
pub use handlers::StoryHandlers;
pub use routes::story_routes;
