//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    game::{GameConfig, Sport},
    state::GameSnapshot,
};

/// API response structure for game action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub game: GameSnapshot,
}

impl ApiResponse {
    /// Create a new API response, labelled with the clock phase
    pub fn new(message: String, game: GameSnapshot) -> Self {
        Self {
            status: game.phase.clone(),
            message,
            timestamp: Utc::now(),
            game,
        }
    }
}

/// Status response with game and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub game: GameSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Setup the game was started with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub sport: Option<Sport>,
    pub buttons: Vec<u32>,
    pub period_count: u32,
    pub period_seconds: u32,
}

impl From<&GameConfig> for ConfigResponse {
    fn from(config: &GameConfig) -> Self {
        Self {
            sport: config.sport,
            buttons: config.button_values().to_vec(),
            period_count: config.period_count(),
            period_seconds: config.period_seconds(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
