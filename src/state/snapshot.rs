//! Game snapshot structure published to displays

use serde::{Deserialize, Serialize};

use crate::game::{GameClock, Side};

/// Point-in-time copy of the game, sent to the view layer after every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub active_side: Side,
    pub home_score: u32,
    pub away_score: u32,
    pub current_period: u32,
    pub period_count: u32,
    pub remaining_seconds: u32,
    /// Remaining time formatted as `M:SS`
    pub time: String,
    pub is_running: bool,
    /// One of `idle`, `running` or `expired`
    pub phase: String,
}

impl GameSnapshot {
    /// Capture the current state of a clock
    pub fn capture(clock: &GameClock) -> Self {
        Self {
            active_side: clock.active_side(),
            home_score: clock.home_score(),
            away_score: clock.away_score(),
            current_period: clock.current_period(),
            period_count: clock.config().period_count(),
            remaining_seconds: clock.remaining_seconds(),
            time: clock.format_time(),
            is_running: clock.is_running(),
            phase: clock.phase().name().to_string(),
        }
    }

    /// Check whether the clock wants a tick every second
    pub fn is_ticking(&self) -> bool {
        self.is_running && self.remaining_seconds > 0
    }
}
