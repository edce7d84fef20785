//! HTTP routes for story endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    create_story, delete_story, get_story_status, list_stories, update_story_status,
    StoryHandlers,
};

/// Creates the story router with all endpoints.
///
/// Routes:
/// - `POST /api/sessions/:session_id/stories` - Add a story
/// - `GET /api/sessions/:session_id/stories` - List stories
/// - `GET /api/sessions/:session_id/stories/:story_id/status` - Status and votes
/// - `PUT /api/sessions/:session_id/stories/:story_id/status` - Overwrite status
/// - `DELETE /api/sessions/:session_id/stories/:story_id` - Delete a pending story
pub fn story_routes(handlers: StoryHandlers) -> Router {
    Router::new()
        .route(
            "/api/sessions/:session_id/stories",
            post(create_story).get(list_stories),
        )
        .route(
            "/api/sessions/:session_id/stories/:story_id/status",
            get(get_story_status).put(update_story_status),
        )
        .route(
            "/api/sessions/:session_id/stories/:story_id",
            delete(delete_story),
        )
        .with_state(handlers)
}
