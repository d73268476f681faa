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
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Game actions
        .route("/score/:points", post(score_handler))
        .route("/side/toggle", post(toggle_side_handler))
        .route("/clock/start", post(start_handler))
        .route("/clock/stop", post(stop_handler))
        .route("/period/next", post(next_period_handler))
        .route("/reset", post(reset_handler))
        // Display and monitoring
        .route("/status", get(status_handler))
        .route("/config", get(config_handler))
        .route("/events", get(events_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
