//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides concrete implementations of the platform
//! abstraction traits defined in `floatchat-core`. Hosts construct a
//! [`StdRuntime`] and call [`StdRuntime::pump`] from their event loop to
//! fire due timers and run frame callbacks.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use floatchat_core::{Clock, FrameClock, Runtime, RuntimeHandle, RuntimeScheduler, Timers};
use web_time::Instant;

/// Scheduler that records frame requests and optionally wakes the host.
pub struct StdScheduler {
    frame_requested: AtomicBool,
    frame_waker: RwLock<Option<Arc<dyn Fn() + Send + Sync + 'static>>>,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self {
            frame_requested: AtomicBool::new(false),
            frame_waker: RwLock::new(None),
        }
    }

    /// Returns whether a frame has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::SeqCst)
    }

    /// Registers a waker that will be invoked whenever a new frame is scheduled.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        match self.frame_waker.write() {
            Ok(mut slot) => *slot = Some(Arc::new(waker)),
            Err(poisoned) => *poisoned.into_inner() = Some(Arc::new(waker)),
        }
    }

    /// Clears any registered frame waker.
    pub fn clear_frame_waker(&self) {
        match self.frame_waker.write() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    fn wake(&self) {
        let waker = match self.frame_waker.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        if let Some(waker) = waker {
            waker();
        }
    }
}

impl Default for StdScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field(
                "frame_requested",
                &self.frame_requested.load(Ordering::SeqCst),
            )
            .finish()
    }
}

impl RuntimeScheduler for StdScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.store(true, Ordering::SeqCst);
        self.wake();
    }
}

/// Clock implementation backed by [`web_time::Instant`].
#[derive(Debug, Default, Clone)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }
}

/// Convenience container bundling the standard scheduler and clock.
#[derive(Clone)]
pub struct StdRuntime {
    scheduler: Arc<StdScheduler>,
    clock: Arc<StdClock>,
    started_at: Instant,
    runtime: Runtime,
}

impl StdRuntime {
    /// Creates a new standard runtime instance.
    pub fn new() -> Self {
        let scheduler = Arc::new(StdScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        let clock = Arc::new(StdClock);
        Self {
            scheduler,
            started_at: clock.now(),
            clock,
            runtime,
        }
    }

    /// Returns the underlying [`floatchat_core::Runtime`].
    pub fn runtime(&self) -> Runtime {
        self.runtime.clone()
    }

    /// Returns a handle to the runtime.
    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Returns the runtime's frame clock.
    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    /// Returns the runtime's timers.
    pub fn timers(&self) -> Timers {
        self.runtime.timers()
    }

    /// Returns the scheduler implementation.
    pub fn scheduler(&self) -> Arc<StdScheduler> {
        Arc::clone(&self.scheduler)
    }

    /// Returns the clock implementation.
    pub fn clock(&self) -> Arc<StdClock> {
        Arc::clone(&self.clock)
    }

    /// Milliseconds since this runtime was created. Pointer events fed to the
    /// widget should be stamped with this value.
    pub fn uptime_millis(&self) -> u64 {
        self.clock.elapsed_millis(self.started_at)
    }

    /// Returns whether a frame was requested since the last poll.
    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    /// Registers a waker to be called when the runtime schedules a new frame.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        self.scheduler.set_frame_waker(waker);
    }

    /// Clears any previously registered frame waker.
    pub fn clear_frame_waker(&self) {
        self.scheduler.clear_frame_waker();
    }

    /// Fires due timers and, if a frame was requested, runs the frame callbacks.
    ///
    /// Returns true while more frames are pending.
    pub fn pump(&self) -> bool {
        let now = self.uptime_millis();
        self.runtime.advance_time(now);
        if self.take_frame_request() || self.runtime.has_frame_callbacks() {
            let frame_time_nanos = now.saturating_mul(1_000_000);
            log::trace!("std runtime frame at {now}ms");
            self.runtime.drain_frame_callbacks(frame_time_nanos);
        }
        self.runtime.needs_frame()
    }

    /// Duration until the next timer is due, if any timer is pending.
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        let now = self.uptime_millis();
        self.runtime
            .next_timer_deadline()
            .map(|deadline| Duration::from_millis(deadline.saturating_sub(now)))
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
