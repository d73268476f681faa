//! Scoreboard - A state-managed HTTP server driving a live sports scoreboard
//!
//! This is the main entry point for the scoreboard application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use scoreboard::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::game_timer_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("scoreboard={},tower_http=info", config.log_level()))
        .init();

    info!("Starting scoreboard server v{}", env!("CARGO_PKG_VERSION"));

    let game_config = config.game_config().context("invalid game setup")?;
    info!("Game: sport={}, buttons={:?}, periods={}, period length={}",
          game_config.sport.map_or_else(|| "custom".to_string(), |s| s.to_string()),
          game_config.button_values(),
          game_config.period_count(),
          scoreboard::game::format_time(game_config.period_seconds()));
    if game_config.button_values().is_empty() {
        warn!("No score buttons configured; pass --sport or --buttons to enable scoring");
    }

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), game_config));

    // Start the game clock tick task
    let timer_state = Arc::clone(&state);
    let timer = tokio::spawn(async move {
        game_timer_task(timer_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /score/:points - Add points for the active side");
    info!("  POST /side/toggle   - Switch between home and away");
    info!("  POST /clock/start   - Start the game clock");
    info!("  POST /clock/stop    - Stop the game clock");
    info!("  POST /period/next   - Advance to the next period");
    info!("  POST /reset         - Reset the board");
    info!("  GET  /status        - Current game and server status");
    info!("  GET  /config        - Game setup");
    info!("  GET  /events        - Live snapshot stream (SSE)");
    info!("  GET  /health        - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        signal = shutdown_signal() => {
            match signal {
                Ok(Some(_)) => info!("Shutdown signal received"),
                Ok(None) => warn!("Signal listener stopped, shutting down"),
                Err(e) => tracing::error!("Failed to listen for shutdown signals: {}", e),
            }
        }
    }

    // The tick schedule must not outlive the server
    timer.abort();

    info!("Server shutdown complete");
    Ok(())
}
