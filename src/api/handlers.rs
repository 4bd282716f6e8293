//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{
    countdown::coerce_units,
    state::{AppState, Command},
};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Forward a command to the driver and describe the outcome
async fn dispatch(state: &AppState, command: Command) -> Result<Json<ApiResponse>, StatusCode> {
    let action = command.action();
    match state.send(command).await {
        Ok(outcome) if outcome.applied => {
            info!("{} endpoint called - countdown {}", action, outcome.snapshot.status);
            Ok(Json(ApiResponse::applied(
                format!("Countdown {} applied", action),
                outcome.snapshot,
            )))
        }
        Ok(outcome) => {
            info!("{} endpoint called - ignored while {}", action, outcome.snapshot.status);
            Ok(Json(ApiResponse::ignored(
                format!("Countdown {} ignored while {}", action, outcome.snapshot.status),
                outcome.snapshot,
            )))
        }
        Err(e) => {
            error!("Failed to {} countdown: {}", action, e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Handle POST /start - Start or restart the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    dispatch(&state, Command::Start).await
}

/// Handle POST /stop - Stop the countdown without completing it
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    dispatch(&state, Command::Stop).await
}

/// Handle POST /pause - Pause a running countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    dispatch(&state, Command::Pause).await
}

/// Handle POST /resume - Resume a paused countdown
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    dispatch(&state, Command::Resume).await
}

/// Handle POST /add/:units - Lengthen the countdown
pub async fn add_handler(
    State(state): State<Arc<AppState>>,
    Path(units): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    dispatch(&state, Command::AddSeconds(coerce_units(&units))).await
}

/// Handle POST /extend/:units - Give back remaining time
pub async fn extend_handler(
    State(state): State<Arc<AppState>>,
    Path(units): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    dispatch(&state, Command::ExtendTimer(coerce_units(&units))).await
}

/// Handle POST /radius/:radius - Resize and redraw
pub async fn radius_handler(
    State(state): State<Arc<AppState>>,
    Path(radius): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let radius = radius.trim().parse::<f64>().unwrap_or(f64::NAN);
    dispatch(&state, Command::SetRadius(radius)).await
}

/// Handle GET /status - Return current countdown status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.get_snapshot(),
        announcement: state.get_announcement(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
