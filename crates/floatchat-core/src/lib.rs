//! Core runtime for the floatchat widget.
//!
//! Provides a single-threaded runtime with a frame-callback queue and
//! delayed timers, the cancelable registrations handed out for both, the
//! host scheduling traits and the geometry primitives shared by the other
//! crates.

pub mod frame_clock;
pub mod geometry;
pub mod platform;
pub mod runtime;
pub mod timer;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use geometry::{Bounds, Point, Size, Velocity};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{Runtime, RuntimeHandle};
pub use timer::{TimerRegistration, Timers};

pub type FrameCallbackId = u64;
pub type TimerId = u64;

/// Scheduler that ignores frame requests. Useful for hosts that poll
/// [`Runtime::needs_frame`] instead of being woken.
#[derive(Debug, Default)]
pub struct NoopScheduler;

impl RuntimeScheduler for NoopScheduler {
    fn schedule_frame(&self) {}
}
