//! Timed flag that swallows the synthetic click following a drag or throw.

use crate::gesture_constants::SUPPRESS_CLICK_MS;
use floatchat_core::{TimerRegistration, Timers};
use std::cell::Cell;
use std::rc::Rc;

pub struct SuppressionWindow {
    timers: Timers,
    duration_ms: u64,
    armed: Rc<Cell<bool>>,
    reset: Option<TimerRegistration>,
}

impl SuppressionWindow {
    pub fn new(timers: Timers) -> Self {
        Self::with_duration(timers, SUPPRESS_CLICK_MS)
    }

    pub fn with_duration(timers: Timers, duration_ms: u64) -> Self {
        Self {
            timers,
            duration_ms,
            armed: Rc::new(Cell::new(false)),
            reset: None,
        }
    }

    /// Arms the window for a fresh `duration_ms`, replacing any pending reset.
    pub fn arm(&mut self) {
        self.armed.set(true);
        let armed = Rc::clone(&self.armed);
        // Assigning drops, and so cancels, the previous reset timer.
        self.reset = Some(self.timers.post_delayed(self.duration_ms, move || {
            armed.set(false);
        }));
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }

    pub fn disarm(&mut self) {
        self.reset = None;
        self.armed.set(false);
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

impl std::fmt::Debug for SuppressionWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuppressionWindow")
            .field("armed", &self.armed.get())
            .field("duration_ms", &self.duration_ms)
            .finish()
    }
}
