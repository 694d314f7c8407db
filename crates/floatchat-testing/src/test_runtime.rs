use floatchat_core::{FrameClock, Runtime, RuntimeHandle, RuntimeScheduler, Timers};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Simulated display refresh interval.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Scheduler that only counts frame requests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    requests: AtomicUsize,
}

impl ManualScheduler {
    pub fn frame_requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl RuntimeScheduler for ManualScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// Runtime whose clock and frames are advanced explicitly.
pub struct TestRuntime {
    scheduler: Arc<ManualScheduler>,
    runtime: Runtime,
}

impl TestRuntime {
    pub fn new() -> Self {
        let scheduler = Arc::new(ManualScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        Self { scheduler, runtime }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    pub fn timers(&self) -> Timers {
        self.runtime.timers()
    }

    pub fn now_millis(&self) -> u64 {
        self.runtime.now_millis()
    }

    pub fn frame_requests(&self) -> usize {
        self.scheduler.frame_requests()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.runtime.has_frame_callbacks()
    }

    /// Moves time forward, firing due timers. No frame is produced.
    pub fn advance_millis(&self, millis: u64) {
        self.runtime
            .advance_time(self.runtime.now_millis().saturating_add(millis));
    }

    /// Advances one frame interval and runs the pending frame callbacks.
    ///
    /// Returns true when callbacks are queued for the following frame.
    pub fn advance_frame(&self) -> bool {
        self.advance_millis(FRAME_INTERVAL_MS);
        let frame_time_nanos = self.runtime.now_millis().saturating_mul(1_000_000);
        self.runtime.drain_frame_callbacks(frame_time_nanos);
        self.runtime.has_frame_callbacks()
    }

    /// Runs frames until none are pending or `max_frames` ran. Returns the
    /// number of frames produced.
    pub fn run_frames_until_idle(&self, max_frames: u32) -> u32 {
        let mut frames = 0;
        while frames < max_frames && self.runtime.has_frame_callbacks() {
            self.advance_frame();
            frames += 1;
        }
        frames
    }
}

impl Default for TestRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn frames_advance_clock_by_interval() {
        let runtime = TestRuntime::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_cb = seen.clone();
        let _registration = runtime
            .frame_clock()
            .with_frame_millis(move |millis| seen_cb.borrow_mut().push(millis));
        assert_eq!(runtime.frame_requests(), 1);

        assert!(!runtime.advance_frame());
        assert_eq!(seen.borrow().as_slice(), &[16]);
        assert_eq!(runtime.now_millis(), 16);
    }

    #[test]
    fn advance_millis_fires_timers_without_frames() {
        let runtime = TestRuntime::new();
        let fired = Rc::new(Cell::new(false));

        let fired_cb = fired.clone();
        let _timer = runtime.timers().post_delayed(30, move || fired_cb.set(true));
        runtime.advance_millis(29);
        assert!(!fired.get());
        runtime.advance_millis(1);
        assert!(fired.get());
        assert_eq!(runtime.frame_requests(), 0);
    }

    #[test]
    fn idle_runtime_runs_no_frames() {
        let runtime = TestRuntime::new();
        assert_eq!(runtime.run_frames_until_idle(10), 0);
    }
}
