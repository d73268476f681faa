//! Signal handling for graceful shutdown

use std::io;

use futures::stream::{Stream, StreamExt};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{info, warn};

/// Wait for the first shutdown signal (SIGTERM, SIGINT) and return its number
///
/// Resolves to `None` if the signal stream ends before any signal arrives.
/// Fails only if the signal handlers cannot be registered.
pub async fn shutdown_signal() -> io::Result<Option<i32>> {
    let mut signals = Signals::new([SIGTERM, SIGINT])?;
    let handle = signals.handle();

    let signal = first_signal(&mut signals).await;

    handle.close();
    Ok(signal)
}

async fn first_signal<S>(signals: &mut S) -> Option<i32>
where
    S: Stream<Item = i32> + Unpin,
{
    match signals.next().await {
        Some(signal) => {
            info!("Received signal: {}", signal_name(signal));
            Some(signal)
        }
        None => {
            warn!("Signal stream ended before any shutdown signal arrived");
            None
        }
    }
}

fn signal_name(signal: i32) -> &'static str {
    match signal {
        SIGINT => "SIGINT",
        SIGTERM => "SIGTERM",
        _ => "unknown",
    }
}
