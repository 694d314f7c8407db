use std::cell::Cell;
use web_time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time source used for token expiry.
pub trait WallClock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualWallClock {
    now: Cell<u64>,
}

impl ManualWallClock {
    pub fn new(now_millis: u64) -> Self {
        Self {
            now: Cell::new(now_millis),
        }
    }

    pub fn set(&self, now_millis: u64) {
        self.now.set(now_millis);
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl WallClock for ManualWallClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}
