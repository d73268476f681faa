//! Configuration and CLI argument handling

use clap::Parser;

use crate::game::{ConfigError, GameConfig, Sport};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "scoreboard")]
#[command(about = "A state-managed HTTP server driving a live sports scoreboard")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Sport preset providing the score buttons
    #[arg(short, long, value_enum)]
    pub sport: Option<Sport>,

    /// Score button values, overriding the sport preset (e.g. 1,2,3)
    #[arg(short, long, value_delimiter = ',')]
    pub buttons: Option<Vec<u32>>,

    /// Number of periods in the game
    #[arg(long, default_value = "1")]
    pub periods: u32,

    /// Period length in minutes
    #[arg(short, long, default_value = "0")]
    pub minutes: u32,

    /// Extra seconds added to the period length
    #[arg(long, default_value = "0")]
    pub seconds: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Total length of one period in seconds
    pub fn period_seconds(&self) -> u32 {
        self.minutes.saturating_mul(60).saturating_add(self.seconds)
    }

    /// Build the game setup from the parsed arguments
    ///
    /// Explicit buttons win over the sport preset; with neither, the game has
    /// no score buttons.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        match (&self.buttons, self.sport) {
            (Some(buttons), sport) => {
                let mut config = GameConfig::new(buttons.clone(), self.periods, self.period_seconds())?;
                config.sport = sport;
                Ok(config)
            }
            (None, Some(sport)) => GameConfig::for_sport(sport, self.periods, self.period_seconds()),
            (None, None) => GameConfig::new(Vec::new(), self.periods, self.period_seconds()),
        }
    }
}
