//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{
    error::TimerError,
    pomodoro::StartOutcome,
    state::AppState,
};
use super::responses::{ActionResponse, HealthResponse, StatusResponse};

fn unavailable(action: &str, e: TimerError) -> StatusCode {
    error!("Failed to {}: {}", action, e);
    StatusCode::SERVICE_UNAVAILABLE
}

/// Handle POST /start - Start button
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    let (outcome, timer) = state
        .press_start()
        .await
        .map_err(|e| unavailable("start timer", e))?;

    match outcome {
        StartOutcome::Started(plan) => {
            info!("Start endpoint called - cycle {} started", plan.cycle);
            Ok(Json(ActionResponse::started(plan, timer)))
        }
        StartOutcome::Ignored => {
            info!("Start endpoint called - timer already running");
            Ok(Json(ActionResponse::ignored(timer)))
        }
    }
}

/// Handle POST /reset - Reset button
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    let timer = state
        .press_reset()
        .await
        .map_err(|e| unavailable("reset timer", e))?;

    info!("Reset endpoint called - timer reset");
    Ok(Json(ActionResponse::reset(timer)))
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = state
        .snapshot()
        .await
        .map_err(|e| unavailable("get timer status", e))?;

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
