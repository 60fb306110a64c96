//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, error};

use crate::{
    engine::Command,
    state::{AppState, Mode},
};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

async fn run_command(
    state: &AppState,
    command: Command,
    message: String,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.execute(command).await {
        Ok(timer) => Ok(Json(ApiResponse::applied(message, timer))),
        Err(e) => {
            error!("Failed to apply {:?}: {}", command, e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Handle POST /start - Start or restart the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, Command::Start, "Countdown started".to_string()).await
}

/// Handle POST /stop - Pause the countdown
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, Command::Stop, "Countdown stopped".to_string()).await
}

/// Handle POST /toggle - Start when idle, stop when running
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, Command::Toggle, "Countdown toggled".to_string()).await
}

/// Handle POST /reset - Restore the full duration of the current mode
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, Command::Reset, "Countdown reset".to_string()).await
}

/// Handle POST /mode/:mode - Switch to another mode; unknown modes are ignored
pub async fn mode_handler(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match Mode::parse(&mode) {
        Some(parsed) => {
            run_command(
                &state,
                Command::SwitchMode(parsed),
                format!("Switched to {}", parsed.label()),
            )
            .await
        }
        None => {
            debug!("Ignoring unknown mode: {}", mode);
            Ok(Json(ApiResponse::ignored(
                format!("Unknown mode '{}'", mode),
                state.timer_status(),
            )))
        }
    }
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.timer_status(),
        config: state.timer_config,
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
