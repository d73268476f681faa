//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tracing::{debug, error, warn};

use crate::state::{AppState, GameSnapshot, StateError};
use super::responses::{ApiResponse, ConfigResponse, HealthResponse, StatusResponse};

/// Turn the outcome of a game action into a response
fn respond(
    action: &str,
    result: Result<GameSnapshot, StateError>,
    message: impl FnOnce(&GameSnapshot) -> String,
) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok(game) => Ok(Json(ApiResponse::new(message(&game), game))),
        Err(e) => {
            error!("Failed to {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /score/:points - Add points for the active side
pub async fn score_handler(
    State(state): State<Arc<AppState>>,
    Path(points): Path<u32>,
) -> Result<Json<ApiResponse>, StatusCode> {
    if !state.config.has_button(points) {
        warn!("Rejected score of {} points: no such button", points);
        return Err(StatusCode::BAD_REQUEST);
    }

    respond("apply score", state.apply_score(points), |game| {
        format!("{} points to {}", points, game.active_side)
    })
}

/// Handle POST /side/toggle - Switch the side receiving points
pub async fn toggle_side_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    respond("toggle side", state.toggle_side(), |game| {
        format!("Active side is {}", game.active_side)
    })
}

/// Handle POST /clock/start - Start the game clock
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    respond("start clock", state.start_clock(), |game| {
        format!("Clock started at {}", game.time)
    })
}

/// Handle POST /clock/stop - Stop the game clock
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    respond("stop clock", state.stop_clock(), |game| {
        format!("Clock stopped at {}", game.time)
    })
}

/// Handle POST /period/next - Advance to the next period
pub async fn next_period_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    respond("advance period", state.advance_period(), |game| {
        format!("Period {} of {}", game.current_period, game.period_count)
    })
}

/// Handle POST /reset - Start over with a fresh board
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    respond("reset board", state.reset(), |_| "Board reset".to_string())
}

/// Handle GET /status - Return current game and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let game = match state.get_snapshot() {
        Ok(game) => game,
        Err(e) => {
            error!("Failed to get game snapshot: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        game,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /config - Return the game setup
pub async fn config_handler(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse::from(&state.config))
}

/// Handle GET /events - Stream a snapshot on every change, starting with the current one
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("Display subscribed to game events");
    let rx = state.subscribe();

    let events = stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let snapshot = rx.borrow_and_update().clone();
        let event = match Event::default().event("snapshot").json_data(&snapshot) {
            Ok(event) => event,
            Err(e) => {
                warn!("Failed to encode snapshot event: {}", e);
                Event::default().event("error").data(e.to_string())
            }
        };
        Some((Ok(event), (rx, false)))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
