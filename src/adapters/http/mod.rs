//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`app_router`] assembles them with the cross-cutting layers.

pub mod story;

pub use story::{story_routes, StoryHandlers};

use axum::{routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the full application router.
pub fn app_router(stories: StoryHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(story_routes(stories))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS configured to allow ANY origin");
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<_> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    tracing::info!(?origins, "CORS configured");

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemorySessionRegistry, InMemoryStoryRepository, InMemoryVoteStore,
    };
    use crate::application::{
        CreateStoryHandler, DeleteStoryHandler, GetStoryStatusHandler, ListStoriesHandler,
        UpdateStoryStatusHandler,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let sessions = Arc::new(InMemorySessionRegistry::new());
        let stories = Arc::new(InMemoryStoryRepository::new());
        let votes = Arc::new(InMemoryVoteStore::new());
        let handlers = StoryHandlers::new(
            Arc::new(CreateStoryHandler::new(sessions.clone(), stories.clone())),
            Arc::new(ListStoriesHandler::new(sessions.clone(), stories.clone())),
            Arc::new(GetStoryStatusHandler::new(
                sessions.clone(),
                stories.clone(),
                votes,
            )),
            Arc::new(UpdateStoryStatusHandler::new(sessions.clone(), stories.clone())),
            Arc::new(DeleteStoryHandler::new(sessions, stories)),
        );
        app_router(handlers, &ServerConfig::default())
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let response = app()
            .oneshot(Request::builder().uri("/api/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn cors_accepts_wildcard_and_lists() {
        let _ = cors_layer(&["*".to_string()]);
        let _ = cors_layer(&["http://localhost:5173".to_string()]);
        let _ = cors_layer(&[]);
    }
}
