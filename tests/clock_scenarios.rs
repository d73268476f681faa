//! Game clock scenarios: a full period run-out, period capping and restarts

use scoreboard::game::{format_time, ClockPhase, GameClock, GameConfig, Side};

fn basketball(periods: u32, seconds: u32) -> GameClock {
    GameClock::new(GameConfig::new(vec![1, 2, 3], periods, seconds).unwrap())
}

#[test]
fn test_format_time_examples() {
    assert_eq!(format_time(899), "14:59");
    assert_eq!(format_time(0), "0:00");
    assert_eq!(format_time(570), "9:30");
    assert_eq!(format_time(564), "9:24");
    assert_eq!(format_time(1), "0:01");
}

#[test]
fn test_run_out_then_advance_to_capped_period() {
    let mut clock = basketball(2, 60);

    clock.start();
    for _ in 0..60 {
        assert!(clock.tick());
    }
    assert_eq!(clock.format_time(), "0:00");
    assert!(clock.is_running(), "running flag survives expiry");
    assert!(!clock.tick());

    assert!(clock.advance_period());
    assert_eq!(clock.current_period(), 2);
    assert_eq!(clock.remaining_seconds(), 60);
    assert_eq!(clock.format_time(), "1:00");

    assert!(!clock.advance_period());
    assert_eq!(clock.current_period(), 2);
    assert_eq!(clock.format_time(), "1:00");
}

#[test]
fn test_stopped_clock_ignores_ticks() {
    let mut clock = basketball(1, 60);

    clock.start();
    for _ in 0..30 {
        clock.tick();
    }
    clock.stop();

    // Ten seconds pass without a running clock
    for _ in 0..10 {
        assert!(!clock.tick());
    }
    assert_eq!(clock.format_time(), "0:30");

    clock.start();
    for _ in 0..10 {
        clock.tick();
    }
    assert_eq!(clock.format_time(), "0:20");
}

#[test]
fn test_start_at_zero_reloads_before_first_tick() {
    let mut clock = basketball(1, 60);
    clock.start();
    for _ in 0..60 {
        clock.tick();
    }
    assert_eq!(clock.phase(), ClockPhase::Expired { running: true });

    clock.start();
    assert_eq!(clock.remaining_seconds(), 60);
    assert!(clock.tick());
    assert_eq!(clock.format_time(), "0:59");
}

#[test]
fn test_ten_minute_period_display() {
    let mut clock = basketball(2, 600);
    clock.start();
    assert_eq!(clock.format_time(), "10:00");

    for _ in 0..30 {
        clock.tick();
    }
    assert_eq!(clock.format_time(), "9:30");

    for _ in 0..6 {
        clock.tick();
    }
    assert_eq!(clock.format_time(), "9:24");

    for _ in 0..563 {
        clock.tick();
    }
    assert_eq!(clock.format_time(), "0:01");
}

#[test]
fn test_advance_mid_period_resets_time() {
    let mut clock = basketball(2, 600);
    clock.start();
    for _ in 0..30 {
        clock.tick();
    }
    assert_eq!(clock.format_time(), "9:30");

    clock.advance_period();
    assert_eq!(clock.format_time(), "10:00");
    assert!(clock.is_running());
}

#[test]
fn test_home_scores_only_when_toggled() {
    let mut clock = basketball(2, 600);

    clock.apply_score(1);
    assert_eq!((clock.score(Side::Home), clock.score(Side::Away)), (0, 1));

    clock.toggle_side();
    clock.apply_score(1);
    assert_eq!((clock.score(Side::Home), clock.score(Side::Away)), (1, 1));

    clock.toggle_side();
    clock.apply_score(1);
    assert_eq!((clock.score(Side::Home), clock.score(Side::Away)), (1, 2));
}
