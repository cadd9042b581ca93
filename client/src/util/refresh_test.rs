use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

// =============================================================
// RefreshTimer
// =============================================================

#[test]
fn timer_starts_alive_and_cancel_is_shared() {
    let timer = RefreshTimer::new();
    let clone = timer.clone();
    assert!(timer.is_alive());
    clone.cancel();
    assert!(!timer.is_alive());
}

// =============================================================
// run
// =============================================================

#[test]
fn ticks_after_each_interval_until_cancelled() {
    let timer = RefreshTimer::new();
    let slept = Rc::new(RefCell::new(Vec::new()));
    let ticks = Rc::new(Cell::new(0));

    let slept_log = slept.clone();
    let tick_count = ticks.clone();
    let stopper = timer.clone();
    let ran = block_on(run(
        timer,
        Duration::from_secs(600),
        move |d| {
            slept_log.borrow_mut().push(d);
            std::future::ready(())
        },
        move || {
            tick_count.set(tick_count.get() + 1);
            if tick_count.get() == 3 {
                stopper.cancel();
            }
            std::future::ready(())
        },
    ));

    assert_eq!(ran, 3);
    assert_eq!(ticks.get(), 3);
    // One sleep per tick plus the sleep that observed cancellation.
    assert_eq!(slept.borrow().len(), 4);
    assert!(slept.borrow().iter().all(|d| *d == Duration::from_secs(600)));
}

#[test]
fn cancelled_before_first_interval_never_ticks() {
    let timer = RefreshTimer::new();
    timer.cancel();
    let ticks = Rc::new(Cell::new(0));
    let tick_count = ticks.clone();
    let ran = block_on(run(
        timer,
        Duration::from_secs(1),
        |_| std::future::ready(()),
        move || {
            tick_count.set(tick_count.get() + 1);
            std::future::ready(())
        },
    ));
    assert_eq!(ran, 0);
    assert_eq!(ticks.get(), 0);
}

#[test]
fn cancel_during_sleep_skips_pending_tick() {
    let timer = RefreshTimer::new();
    let canceller = timer.clone();
    let ran = block_on(run(
        timer,
        Duration::from_secs(1),
        move |_| {
            canceller.cancel();
            std::future::ready(())
        },
        || std::future::ready(()),
    ));
    assert_eq!(ran, 0);
}
