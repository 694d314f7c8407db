//! Delayed one-shot callbacks driven by the runtime clock.

use crate::runtime::RuntimeHandle;
use crate::TimerId;

#[derive(Clone)]
pub struct Timers {
    runtime: RuntimeHandle,
}

impl Timers {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Current runtime time in milliseconds.
    pub fn now_millis(&self) -> u64 {
        self.runtime.now_millis()
    }

    /// Runs `callback` once the runtime clock has advanced by `delay_millis`.
    pub fn post_delayed(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> TimerRegistration {
        TimerRegistration {
            runtime: self.runtime.clone(),
            id: self.runtime.post_delayed(delay_millis, callback),
        }
    }
}

/// Handle to a pending timer. Dropping it cancels the timer.
pub struct TimerRegistration {
    runtime: RuntimeHandle,
    id: Option<TimerId>,
}

impl TimerRegistration {
    pub fn is_active(&self) -> bool {
        self.id.is_some_and(|id| self.runtime.is_timer_pending(id))
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl std::fmt::Debug for TimerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerRegistration")
            .field("id", &self.id)
            .finish()
    }
}
