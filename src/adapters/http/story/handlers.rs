//! HTTP handlers for story endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    CreateStoryCommand, CreateStoryHandler, DeleteStoryCommand, DeleteStoryHandler,
    GetStoryStatusHandler, GetStoryStatusQuery, ListStoriesHandler, ListStoriesQuery,
    UpdateStoryStatusCommand, UpdateStoryStatusHandler,
};
use crate::domain::foundation::{SessionId, StoryId};
use crate::domain::story::StoryError;

use super::dto::{
    CreateStoryRequest, ErrorResponse, StoryResponse, StoryStatusResponse,
    UpdateStoryStatusRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct StoryHandlers {
    create_handler: Arc<CreateStoryHandler>,
    list_handler: Arc<ListStoriesHandler>,
    get_status_handler: Arc<GetStoryStatusHandler>,
    update_status_handler: Arc<UpdateStoryStatusHandler>,
    delete_handler: Arc<DeleteStoryHandler>,
}

impl StoryHandlers {
    pub fn new(
        create_handler: Arc<CreateStoryHandler>,
        list_handler: Arc<ListStoriesHandler>,
        get_status_handler: Arc<GetStoryStatusHandler>,
        update_status_handler: Arc<UpdateStoryStatusHandler>,
        delete_handler: Arc<DeleteStoryHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_status_handler,
            update_status_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/:session_id/stories - Add a story to a session
pub async fn create_story(
    State(handlers): State<StoryHandlers>,
    Path(session_id): Path<String>,
    body: Result<Json<CreateStoryRequest>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };

    let cmd = CreateStoryCommand {
        session_id,
        description: req.description,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(story) => (StatusCode::CREATED, Json(StoryResponse::from(story))).into_response(),
        Err(e) => handle_story_error(e),
    }
}

/// GET /api/sessions/:session_id/stories - List the session's stories
pub async fn list_stories(
    State(handlers): State<StoryHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.list_handler.handle(ListStoriesQuery { session_id }).await {
        Ok(stories) => {
            let response: Vec<StoryResponse> = stories.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_story_error(e),
    }
}

/// GET /api/sessions/:session_id/stories/:story_id/status - Status with votes
pub async fn get_story_status(
    State(handlers): State<StoryHandlers>,
    Path((session_id, story_id)): Path<(String, String)>,
) -> Response {
    let (session_id, story_id) = match parse_ids(&session_id, &story_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let query = GetStoryStatusQuery {
        session_id,
        story_id,
    };

    match handlers.get_status_handler.handle(query).await {
        Ok(report) => (StatusCode::OK, Json(StoryStatusResponse::from(report))).into_response(),
        Err(e) => handle_story_error(e),
    }
}

/// PUT /api/sessions/:session_id/stories/:story_id/status - Overwrite status
pub async fn update_story_status(
    State(handlers): State<StoryHandlers>,
    Path((session_id, story_id)): Path<(String, String)>,
    body: Result<Json<UpdateStoryStatusRequest>, JsonRejection>,
) -> Response {
    let (session_id, story_id) = match parse_ids(&session_id, &story_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };

    let cmd = UpdateStoryStatusCommand {
        session_id,
        story_id,
        status: req.status,
    };

    match handlers.update_status_handler.handle(cmd).await {
        Ok(report) => (StatusCode::OK, Json(StoryStatusResponse::from(report))).into_response(),
        Err(e) => handle_story_error(e),
    }
}

/// DELETE /api/sessions/:session_id/stories/:story_id - Delete a pending story
pub async fn delete_story(
    State(handlers): State<StoryHandlers>,
    Path((session_id, story_id)): Path<(String, String)>,
) -> Response {
    let (session_id, story_id) = match parse_ids(&session_id, &story_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = DeleteStoryCommand {
        session_id,
        story_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_story_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Path parsing
// ════════════════════════════════════════════════════════════════════════════

// An id that is not a UUID can never resolve, so it is reported as missing.
fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", raw)),
        )
            .into_response()
    })
}

fn parse_story_id(raw: &str) -> Result<StoryId, Response> {
    raw.parse::<StoryId>().map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Story", raw)),
        )
            .into_response()
    })
}

fn parse_ids(session_id: &str, story_id: &str) -> Result<(SessionId, StoryId), Response> {
    Ok((parse_session_id(session_id)?, parse_story_id(story_id)?))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

// Malformed JSON, a wrong content type and unknown enum values all land here.
fn handle_body_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!(status = %rejection.status(), "Rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn handle_story_error(error: StoryError) -> Response {
    tracing::debug!(code = %error.code(), error = %error, "Story request rejected");

    match error {
        StoryError::SessionNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        StoryError::StoryNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Story", &id.to_string())),
        )
            .into_response(),
        StoryError::Forbidden { status } => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden(format!(
                "Story in status {} cannot be deleted",
                status
            ))),
        )
            .into_response(),
        StoryError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::bad_request(format!("Validation failed for {}: {}", field, message))
                    .with_details(serde_json::json!({ "field": field })),
            ),
        )
            .into_response(),
        StoryError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Story request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
