use super::{StdClock, StdRuntime};
use floatchat_core::Clock;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn frame_callback_requests_frame_and_pump_runs_it() {
    let runtime = StdRuntime::new();
    let hits = Rc::new(Cell::new(0u32));

    let hits_cb = hits.clone();
    let _registration = runtime
        .frame_clock()
        .with_frame_nanos(move |_| hits_cb.set(hits_cb.get() + 1));

    assert!(runtime.scheduler().take_frame_request() || runtime.runtime().needs_frame());
    let more = runtime.pump();

    assert_eq!(hits.get(), 1);
    assert!(!more);
}

#[test]
fn frame_waker_is_invoked_on_schedule() {
    let runtime = StdRuntime::new();
    let wakes = Arc::new(AtomicUsize::new(0));

    let wakes_cb = wakes.clone();
    runtime.set_frame_waker(move || {
        wakes_cb.fetch_add(1, Ordering::SeqCst);
    });
    let _registration = runtime.frame_clock().with_frame_nanos(|_| {});
    assert_eq!(wakes.load(Ordering::SeqCst), 1);

    runtime.clear_frame_waker();
    let _second = runtime.frame_clock().with_frame_nanos(|_| {});
    assert_eq!(wakes.load(Ordering::SeqCst), 1);
}

#[test]
fn zero_delay_timer_fires_on_pump() {
    let runtime = StdRuntime::new();
    let fired = Rc::new(Cell::new(false));

    let fired_cb = fired.clone();
    let _timer = runtime.timers().post_delayed(0, move || fired_cb.set(true));
    assert_eq!(
        runtime.time_until_next_timer(),
        Some(std::time::Duration::ZERO)
    );

    runtime.pump();
    assert!(fired.get());
    assert!(runtime.time_until_next_timer().is_none());
}

#[test]
fn uptime_is_monotonic() {
    let runtime = StdRuntime::new();
    let first = runtime.uptime_millis();
    let second = runtime.uptime_millis();
    assert!(second >= first);
}

#[test]
fn clock_measures_elapsed_millis_from_its_own_instant() {
    let clock = StdClock;
    let start = clock.now();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert!(clock.elapsed_millis(start) >= 5);
}
