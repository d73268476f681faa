//! Game setup parameters

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Sport;

/// Errors raised when setup parameters cannot describe a playable game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one period")]
    NoPeriods,
    #[error("score button {index} has a value of zero")]
    ZeroButton { index: usize },
}

/// Setup parameters handed to the game clock once, before play starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Sport the buttons were taken from, if a preset was used
    pub sport: Option<Sport>,
    button_values: Vec<u32>,
    period_count: u32,
    period_seconds: u32,
}

impl GameConfig {
    /// Validate and build a configuration
    pub fn new(
        button_values: Vec<u32>,
        period_count: u32,
        period_seconds: u32,
    ) -> Result<Self, ConfigError> {
        if period_count == 0 {
            return Err(ConfigError::NoPeriods);
        }
        if let Some(index) = button_values.iter().position(|&points| points == 0) {
            return Err(ConfigError::ZeroButton { index });
        }

        Ok(Self {
            sport: None,
            button_values,
            period_count,
            period_seconds,
        })
    }

    /// Build a configuration from a sport preset
    pub fn for_sport(
        sport: Sport,
        period_count: u32,
        period_seconds: u32,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::new(sport.button_values().to_vec(), period_count, period_seconds)?;
        config.sport = Some(sport);
        Ok(config)
    }

    pub fn button_values(&self) -> &[u32] {
        &self.button_values
    }

    pub fn period_count(&self) -> u32 {
        self.period_count
    }

    pub fn period_seconds(&self) -> u32 {
        self.period_seconds
    }

    /// Check whether a score button with this value exists
    pub fn has_button(&self, points: u32) -> bool {
        self.button_values.contains(&points)
    }
}
