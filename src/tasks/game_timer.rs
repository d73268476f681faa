//! Game clock tick background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Time between two clock ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that ticks the game clock once per second while it is running
///
/// The tick interval only exists while the latest snapshot says the clock is
/// ticking. Stopping the clock, running out of time or closing the snapshot
/// channel drops it, so no tick is ever delivered to a stopped clock.
pub async fn game_timer_task(state: Arc<AppState>) {
    info!("Starting game timer task");

    let mut snapshot_rx = state.subscribe();

    loop {
        // Wait until the clock has something to count down
        let (ticking, mut last_remaining) = {
            let snapshot = snapshot_rx.borrow_and_update();
            (snapshot.is_ticking(), snapshot.remaining_seconds)
        };
        if !ticking {
            if snapshot_rx.changed().await.is_err() {
                info!("Snapshot channel closed, stopping game timer task");
                return;
            }
            continue;
        }

        debug!("Clock running, scheduling ticks");

        // First tick lands one full period after the clock started
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match state.tick() {
                        Ok(snapshot) if !snapshot.is_ticking() => {
                            debug!("Clock no longer ticking at {}, cancelling ticks", snapshot.time);
                            break;
                        }
                        Ok(snapshot) => last_remaining = snapshot.remaining_seconds,
                        Err(e) => {
                            error!("Failed to tick game clock: {}", e);
                            break;
                        }
                    }
                }

                // State change - check if we should cancel the ticks
                changed = snapshot_rx.changed() => {
                    if changed.is_err() {
                        info!("Snapshot channel closed, stopping game timer task");
                        return;
                    }
                    let (ticking, remaining) = {
                        let snapshot = snapshot_rx.borrow_and_update();
                        (snapshot.is_ticking(), snapshot.remaining_seconds)
                    };
                    if !ticking {
                        debug!("Clock stopped, cancelling ticks");
                        break;
                    }
                    // A reloaded period gets a full second before its first tick
                    if remaining > last_remaining {
                        debug!("Clock reloaded to {}s, re-arming ticks", remaining);
                        interval.reset();
                    }
                    last_remaining = remaining;
                }
            }
        }
    }
}
