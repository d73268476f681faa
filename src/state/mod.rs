//! State management module
//! 
//! This module contains the shared application state wrapped around the game clock.

pub mod app_state;
pub mod error;
pub mod snapshot;

// Re-export main types
pub use app_state::AppState;
pub use error::StateError;
pub use snapshot::GameSnapshot;
