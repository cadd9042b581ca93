//! Cancellable periodic refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! The lead table re-fetches on a fixed interval while mounted. The loop is
//! written against injected `sleep`/`tick` futures so its cadence and
//! cancellation can be tested natively; in the browser `spawn` drives it
//! with `gloo_timers` and the owning component cancels it in `on_cleanup`.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared liveness flag for a running refresh loop.
#[derive(Clone, Debug)]
pub struct RefreshTimer {
    alive: Arc<AtomicBool>,
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshTimer {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Stop the loop; the pending sleep finishes but no further tick runs.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Sleep `interval`, then tick, until `timer` is cancelled. Returns the number
/// of ticks that ran.
pub async fn run<S, SF, T, TF>(timer: RefreshTimer, interval: Duration, mut sleep: S, mut tick: T) -> u32
where
    S: FnMut(Duration) -> SF,
    SF: Future<Output = ()>,
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
{
    let mut ticks = 0;
    loop {
        sleep(interval).await;
        if !timer.is_alive() {
            break;
        }
        tick().await;
        ticks += 1;
    }
    ticks
}

/// Start a browser refresh loop calling `tick` every `interval`.
#[cfg(feature = "hydrate")]
pub fn spawn<T>(interval: Duration, tick: T) -> RefreshTimer
where
    T: Fn() + 'static,
{
    let timer = RefreshTimer::new();
    let task_timer = timer.clone();
    leptos::task::spawn_local(async move {
        let ticks = run(task_timer, interval, gloo_timers::future::sleep, || {
            tick();
            std::future::ready(())
        })
        .await;
        log::debug!("refresh loop stopped after {ticks} ticks");
    });
    timer
}
