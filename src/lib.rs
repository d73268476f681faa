//! Scoreboard - A state-managed HTTP server driving a live sports scoreboard
//! 
//! This library provides the game clock state machine (scores, active side,
//! periods and countdown) together with the HTTP API and background tick task
//! that let a browser display drive it.

pub mod config;
pub mod game;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use game::{GameClock, GameConfig};
pub use state::{AppState, GameSnapshot};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
