//! Game core module
//! 
//! This module contains the scoreboard state machine and the setup types it is built from.

pub mod clock;
pub mod config;
pub mod format;
pub mod side;
pub mod sports;

// Re-export main types
pub use clock::{ClockPhase, GameClock};
pub use config::{ConfigError, GameConfig};
pub use format::format_time;
pub use side::Side;
pub use sports::Sport;
