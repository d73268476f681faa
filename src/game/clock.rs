//! Game clock state machine
//!
//! [`GameClock`] owns every piece of mutable game state: both scores, the
//! active side, the current period and the countdown. All changes go through
//! its event methods, which keep the period within the configured bounds and
//! the countdown from dropping below zero.

use tracing::debug;

use super::{format_time, GameConfig, Side};

/// Where the countdown stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    /// Stopped with time left on the clock
    Idle { remaining: u32 },
    /// Counting down; `remaining` is never zero here
    Running { remaining: u32 },
    /// No time left. `running` stays set when the clock ran out on its own
    /// and is only cleared by an explicit stop.
    Expired { running: bool },
}

impl ClockPhase {
    /// Phase for a freshly loaded period, keeping the running flag
    fn loaded(seconds: u32, running: bool) -> Self {
        match (seconds, running) {
            (0, running) => ClockPhase::Expired { running },
            (remaining, true) => ClockPhase::Running { remaining },
            (remaining, false) => ClockPhase::Idle { remaining },
        }
    }

    pub fn remaining_seconds(self) -> u32 {
        match self {
            ClockPhase::Idle { remaining } | ClockPhase::Running { remaining } => remaining,
            ClockPhase::Expired { .. } => 0,
        }
    }

    pub fn is_running(self) -> bool {
        match self {
            ClockPhase::Idle { .. } => false,
            ClockPhase::Running { .. } => true,
            ClockPhase::Expired { running } => running,
        }
    }

    /// Whether ticks currently decrement the clock
    pub fn is_ticking(self) -> bool {
        matches!(self, ClockPhase::Running { .. })
    }

    pub fn is_expired(self) -> bool {
        matches!(self, ClockPhase::Expired { .. })
    }

    /// Short lowercase name used in snapshots and logs
    pub fn name(self) -> &'static str {
        match self {
            ClockPhase::Idle { .. } => "idle",
            ClockPhase::Running { .. } => "running",
            ClockPhase::Expired { .. } => "expired",
        }
    }
}

/// Scores, active side, period and countdown for one game
#[derive(Debug, Clone)]
pub struct GameClock {
    config: GameConfig,
    active_side: Side,
    home_score: u32,
    away_score: u32,
    current_period: u32,
    phase: ClockPhase,
}

impl GameClock {
    /// Start a new game: first period, full time, clock stopped, away side selected
    pub fn new(config: GameConfig) -> Self {
        let phase = ClockPhase::loaded(config.period_seconds(), false);
        Self {
            config,
            active_side: Side::default(),
            home_score: 0,
            away_score: 0,
            current_period: 1,
            phase,
        }
    }

    /// Add points to whichever side is active
    pub fn apply_score(&mut self, points: u32) {
        let side = self.active_side;
        let score = match side {
            Side::Home => &mut self.home_score,
            Side::Away => &mut self.away_score,
        };
        *score = score.saturating_add(points);
        debug!("{} scored {} (now {})", side, points, score);
    }

    /// Switch which side receives score clicks
    pub fn toggle_side(&mut self) {
        self.active_side = self.active_side.other();
    }

    /// Run the clock, reloading a full period first if time has run out
    pub fn start(&mut self) {
        self.phase = match self.phase {
            ClockPhase::Idle { remaining } | ClockPhase::Running { remaining } => {
                ClockPhase::Running { remaining }
            }
            ClockPhase::Expired { .. } => ClockPhase::loaded(self.config.period_seconds(), true),
        };
    }

    /// Stop the clock without touching the remaining time
    pub fn stop(&mut self) {
        self.phase = match self.phase {
            ClockPhase::Idle { remaining } | ClockPhase::Running { remaining } => {
                ClockPhase::Idle { remaining }
            }
            ClockPhase::Expired { .. } => ClockPhase::Expired { running: false },
        };
    }

    /// Take one second off a running clock
    ///
    /// Returns `false` when the clock is stopped or already at zero, in which
    /// case nothing changes. The final second leaves the clock expired with
    /// its running flag still set.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            ClockPhase::Running { remaining } => {
                self.phase = ClockPhase::loaded(remaining - 1, true);
                true
            }
            ClockPhase::Idle { .. } | ClockPhase::Expired { .. } => false,
        }
    }

    /// Move to the next period with a full clock, unless already in the last one
    ///
    /// The running flag is carried over, so a running clock keeps running with
    /// the refreshed time. Returns `false` at the last period.
    pub fn advance_period(&mut self) -> bool {
        if self.current_period >= self.config.period_count() {
            return false;
        }
        self.current_period += 1;
        self.phase = ClockPhase::loaded(self.config.period_seconds(), self.phase.is_running());
        true
    }

    /// Remaining time as `M:SS`
    pub fn format_time(&self) -> String {
        format_time(self.remaining_seconds())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    /// Score for either side
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    pub fn current_period(&self) -> u32 {
        self.current_period
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.phase.remaining_seconds()
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(periods: u32, seconds: u32) -> GameClock {
        GameClock::new(GameConfig::new(vec![1, 2, 3], periods, seconds).unwrap())
    }

    #[test]
    fn new_game_starts_idle_in_first_period() {
        let clock = clock(4, 600);
        assert_eq!(clock.active_side(), Side::Away);
        assert_eq!(clock.home_score(), 0);
        assert_eq!(clock.away_score(), 0);
        assert_eq!(clock.current_period(), 1);
        assert_eq!(clock.phase(), ClockPhase::Idle { remaining: 600 });
        assert_eq!(clock.format_time(), "10:00");
        assert!(!clock.is_running());
    }

    #[test]
    fn zero_length_period_starts_expired() {
        let clock = clock(1, 0);
        assert_eq!(clock.phase(), ClockPhase::Expired { running: false });
        assert_eq!(clock.format_time(), "0:00");
    }

    #[test]
    fn score_goes_to_active_side() {
        let mut clock = clock(2, 60);
        clock.apply_score(1);
        assert_eq!((clock.home_score(), clock.away_score()), (0, 1));

        clock.toggle_side();
        clock.apply_score(1);
        assert_eq!((clock.home_score(), clock.away_score()), (1, 1));

        clock.toggle_side();
        clock.apply_score(1);
        assert_eq!((clock.home_score(), clock.away_score()), (1, 2));
    }

    #[test]
    fn score_saturates() {
        let mut clock = clock(1, 60);
        clock.apply_score(u32::MAX);
        clock.apply_score(3);
        assert_eq!(clock.score(Side::Away), u32::MAX);
    }

    #[test]
    fn toggle_side_leaves_clock_alone() {
        let mut clock = clock(2, 60);
        clock.start();
        clock.tick();
        clock.toggle_side();
        assert_eq!(clock.active_side(), Side::Home);
        assert_eq!(clock.phase(), ClockPhase::Running { remaining: 59 });
    }

    #[test]
    fn tick_only_counts_down_while_running() {
        let mut clock = clock(1, 60);
        assert!(!clock.tick());
        assert_eq!(clock.remaining_seconds(), 60);

        clock.start();
        assert!(clock.tick());
        assert_eq!(clock.format_time(), "0:59");

        clock.stop();
        assert!(!clock.tick());
        assert_eq!(clock.phase(), ClockPhase::Idle { remaining: 59 });
    }

    #[test]
    fn start_is_idempotent() {
        let mut clock = clock(1, 60);
        clock.start();
        clock.tick();
        clock.start();
        assert_eq!(clock.phase(), ClockPhase::Running { remaining: 59 });
    }

    #[test]
    fn final_tick_expires_but_stays_running() {
        let mut clock = clock(1, 2);
        clock.start();
        assert!(clock.tick());
        assert!(clock.tick());
        assert_eq!(clock.phase(), ClockPhase::Expired { running: true });
        assert!(clock.is_running());
        assert!(!clock.tick());
        assert_eq!(clock.remaining_seconds(), 0);
    }

    #[test]
    fn stop_after_expiry_clears_running_flag() {
        let mut clock = clock(1, 1);
        clock.start();
        clock.tick();
        clock.stop();
        assert_eq!(clock.phase(), ClockPhase::Expired { running: false });
    }

    #[test]
    fn start_after_expiry_reloads_before_running() {
        let mut clock = clock(1, 3);
        clock.start();
        for _ in 0..3 {
            clock.tick();
        }
        clock.stop();

        clock.start();
        assert_eq!(clock.phase(), ClockPhase::Running { remaining: 3 });
        clock.tick();
        assert_eq!(clock.remaining_seconds(), 2);
    }

    #[test]
    fn start_with_zero_length_periods_stays_expired() {
        let mut clock = clock(1, 0);
        clock.start();
        assert_eq!(clock.phase(), ClockPhase::Expired { running: true });
        assert!(!clock.tick());
    }

    #[test]
    fn advance_period_reloads_and_keeps_running_flag() {
        let mut clock = clock(3, 60);
        clock.start();
        clock.tick();
        assert!(clock.advance_period());
        assert_eq!(clock.current_period(), 2);
        assert_eq!(clock.phase(), ClockPhase::Running { remaining: 60 });

        clock.stop();
        assert!(clock.advance_period());
        assert_eq!(clock.current_period(), 3);
        assert_eq!(clock.phase(), ClockPhase::Idle { remaining: 60 });
    }

    #[test]
    fn advance_period_after_expiry_resumes_running() {
        let mut clock = clock(2, 1);
        clock.start();
        clock.tick();
        assert!(clock.advance_period());
        assert_eq!(clock.phase(), ClockPhase::Running { remaining: 1 });
    }

    #[test]
    fn advance_period_caps_at_last_period() {
        let mut clock = clock(2, 60);
        assert!(clock.advance_period());
        clock.start();
        clock.tick();
        assert!(!clock.advance_period());
        assert_eq!(clock.current_period(), 2);
        assert_eq!(clock.remaining_seconds(), 59);
    }

    #[test]
    fn phase_names() {
        assert_eq!(ClockPhase::Idle { remaining: 5 }.name(), "idle");
        assert_eq!(ClockPhase::Running { remaining: 5 }.name(), "running");
        assert_eq!(ClockPhase::Expired { running: true }.name(), "expired");
    }
}
