//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/pause", post(pause_handler))
        .route("/resume", post(resume_handler))
        .route("/add/:units", post(add_handler))
        .route("/extend/:units", post(extend_handler))
        .route("/radius/:radius", post(radius_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::CountdownConfig,
        host::{AnnounceChannel, TerminalRenderer},
        tasks::spawn_countdown_driver,
    };

    fn app(config: CountdownConfig) -> Router {
        let (sink, announcements) = AnnounceChannel::new();
        let driver = spawn_countdown_driver(config, TerminalRenderer::new(io::sink()), sink, |_| {});
        let state = AppState::new(
            20554,
            "127.0.0.1".to_string(),
            driver.controls,
            driver.snapshots,
            announcements,
        );
        create_router(Arc::new(state))
    }

    async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn pause_and_resume_over_http() {
        let app = app(CountdownConfig::default().with_seconds(10));

        let (status, body) = call(&app, "POST", "/pause").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "applied");
        assert_eq!(body["timer"]["status"], "paused");

        let (_, body) = call(&app, "POST", "/pause").await;
        assert_eq!(body["status"], "ignored");

        let (_, body) = call(&app, "POST", "/resume").await;
        assert_eq!(body["timer"]["status"], "started");
    }

    #[tokio::test(start_paused = true)]
    async fn add_coerces_path_value() {
        let app = app(CountdownConfig::default().with_seconds(10));

        let (_, body) = call(&app, "POST", "/add/5abc").await;
        assert_eq!(body["status"], "applied");
        assert_eq!(body["timer"]["remaining"], 15);

        let (_, body) = call(&app, "POST", "/add/nothing").await;
        assert_eq!(body["status"], "ignored");
    }

    #[tokio::test(start_paused = true)]
    async fn extend_is_clamped() {
        let app = app(CountdownConfig::default().with_seconds(10));
        let (_, body) = call(&app, "POST", "/extend/3").await;
        assert_eq!(body["status"], "ignored");
        assert_eq!(body["timer"]["remaining"], 10);
    }

    #[tokio::test(start_paused = true)]
    async fn status_reports_unbounded_countdown() {
        let app = app(CountdownConfig::default().with_duration(crate::countdown::TimerDuration::Unbounded));

        let (status, body) = call(&app, "GET", "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timer"]["status"], "started");
        assert_eq!(body["timer"]["label"], "∞");
        assert_eq!(body["timer"]["remaining"], "∞");
        assert_eq!(body["announcement"], "∞");
        assert_eq!(body["last_action"], Value::Null);

        call(&app, "POST", "/stop").await;
        let (_, body) = call(&app, "GET", "/status").await;
        assert_eq!(body["timer"]["status"], "stopped");
        assert_eq!(body["last_action"], "stop");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app(CountdownConfig::default());
        let (status, body) = call(&app, "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
