//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::game::{GameClock, GameConfig};
use super::{GameSnapshot, StateError};

/// Main application state that owns the game clock and publishes its snapshots
#[derive(Debug)]
pub struct AppState {
    /// Setup parameters the clock was built from, reused on reset
    pub config: GameConfig,
    /// The game itself
    pub clock: Arc<Mutex<GameClock>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel carrying the latest snapshot to displays and the tick task
    pub snapshot_tx: watch::Sender<GameSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<GameSnapshot>,
}

impl AppState {
    /// Create a new AppState with a fresh game
    pub fn new(port: u16, host: String, config: GameConfig) -> Self {
        let clock = GameClock::new(config.clone());
        let (snapshot_tx, snapshot_rx) = watch::channel(GameSnapshot::capture(&clock));

        Self {
            config,
            clock: Arc::new(Mutex::new(clock)),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Apply a user action to the clock and publish the new snapshot
    pub fn update_clock<F>(&self, action: &str, updater: F) -> Result<GameSnapshot, StateError>
    where
        F: FnOnce(&mut GameClock),
    {
        let snapshot = self.mutate(updater)?;

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(snapshot)
    }

    /// Lock the clock, run the updater and publish the result
    fn mutate<F>(&self, updater: F) -> Result<GameSnapshot, StateError>
    where
        F: FnOnce(&mut GameClock),
    {
        let mut clock = self.clock.lock()
            .map_err(|e| StateError::poisoned("game clock", e))?;

        updater(&mut clock);
        let snapshot = GameSnapshot::capture(&clock);
        drop(clock); // Release the lock early

        self.publish(snapshot.clone());
        Ok(snapshot)
    }

    fn publish(&self, snapshot: GameSnapshot) {
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to send snapshot update: {}", e);
        }
    }

    /// Add points for the active side
    pub fn apply_score(&self, points: u32) -> Result<GameSnapshot, StateError> {
        info!("Scoring {} points", points);
        self.update_clock(&format!("score-{}", points), |clock| clock.apply_score(points))
    }

    /// Switch the side receiving points
    pub fn toggle_side(&self) -> Result<GameSnapshot, StateError> {
        let snapshot = self.update_clock("toggle-side", GameClock::toggle_side)?;
        info!("Active side is now {}", snapshot.active_side);
        Ok(snapshot)
    }

    /// Start the game clock
    pub fn start_clock(&self) -> Result<GameSnapshot, StateError> {
        let snapshot = self.update_clock("start", GameClock::start)?;
        info!("Clock started at {}", snapshot.time);
        Ok(snapshot)
    }

    /// Stop the game clock
    pub fn stop_clock(&self) -> Result<GameSnapshot, StateError> {
        let snapshot = self.update_clock("stop", GameClock::stop)?;
        info!("Clock stopped at {}", snapshot.time);
        Ok(snapshot)
    }

    /// Move on to the next period if there is one
    pub fn advance_period(&self) -> Result<GameSnapshot, StateError> {
        let mut advanced = false;
        let snapshot = self.update_clock("next-period", |clock| {
            advanced = clock.advance_period();
        })?;

        if advanced {
            info!("Advanced to period {} of {}", snapshot.current_period, snapshot.period_count);
        } else {
            info!("Already in the last period ({}), not advancing", snapshot.current_period);
        }
        Ok(snapshot)
    }

    /// Deliver one clock tick (internal use only)
    pub fn tick(&self) -> Result<GameSnapshot, StateError> {
        let (ticked, snapshot) = {
            let mut clock = self.clock.lock()
                .map_err(|e| StateError::poisoned("game clock", e))?;
            let ticked = clock.tick();
            (ticked, GameSnapshot::capture(&clock))
        };

        if ticked {
            debug!("Tick: {} remaining", snapshot.time);
            if snapshot.remaining_seconds == 0 {
                info!("Period {} clock expired", snapshot.current_period);
            }
            self.publish(snapshot.clone());
        }
        Ok(snapshot)
    }

    /// Throw the current game away and start a fresh one with the same setup
    pub fn reset(&self) -> Result<GameSnapshot, StateError> {
        let config = self.config.clone();
        let snapshot = self.update_clock("reset", move |clock| *clock = GameClock::new(config))?;
        info!("Board reset");
        Ok(snapshot)
    }

    /// Get the current game snapshot
    pub fn get_snapshot(&self) -> Result<GameSnapshot, StateError> {
        self.clock.lock()
            .map(|clock| GameSnapshot::capture(&clock))
            .map_err(|e| StateError::poisoned("game clock", e))
    }

    /// Subscribe to snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let config = GameConfig::new(vec![1, 2, 3], 2, 60).unwrap();
        AppState::new(8080, "127.0.0.1".to_string(), config)
    }

    #[test]
    fn actions_are_published_and_tracked() {
        let state = state();
        let rx = state.subscribe();

        state.apply_score(2).unwrap();
        assert_eq!(rx.borrow().away_score, 2);

        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("score-2"));
        assert!(time.is_some());
    }

    #[test]
    fn idle_tick_publishes_nothing() {
        let state = state();
        let mut rx = state.subscribe();
        rx.borrow_and_update();

        state.tick().unwrap();
        assert!(!rx.has_changed().unwrap());

        state.start_clock().unwrap();
        rx.borrow_and_update();
        state.tick().unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow().remaining_seconds, 59);
    }

    #[test]
    fn ticks_do_not_count_as_actions() {
        let state = state();
        state.start_clock().unwrap();
        state.tick().unwrap();
        assert_eq!(state.get_last_action().0.as_deref(), Some("start"));
    }

    #[test]
    fn reset_starts_a_fresh_game() {
        let state = state();
        state.apply_score(3).unwrap();
        state.advance_period().unwrap();
        state.start_clock().unwrap();

        let snapshot = state.reset().unwrap();
        assert_eq!(snapshot, GameSnapshot::capture(&GameClock::new(state.config.clone())));
        assert_eq!(snapshot.current_period, 1);
        assert!(!snapshot.is_running);
    }

    #[test]
    fn uptime_formats_seconds() {
        assert!(state().get_uptime().ends_with('s'));
    }
}
