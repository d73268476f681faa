//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod game_timer;

// Re-export main functions
pub use game_timer::{game_timer_task, TICK_PERIOD};
