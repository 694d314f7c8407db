//! Frame-synchronized inertia driver.
//!
//! Runs a per-frame step closure once per display frame until it reports
//! that the motion settled. At most one run is alive per driver: starting
//! a new run or cancelling drops the pending frame registration, so no
//! stale step fires afterwards.

use floatchat_core::{FrameCallbackRegistration, FrameClock};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// What a step closure reports after advancing one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InertiaStatus {
    Running,
    Settled,
}

/// State for an active run.
struct InertiaRunState {
    is_running: Cell<bool>,
    frames: Cell<u32>,
    /// Registration of the next frame; replaced every frame.
    registration: RefCell<Option<FrameCallbackRegistration>>,
}

/// Schedules the next step of a run. Called again from inside the frame
/// callback for as long as the step keeps running.
fn schedule_next_frame<F>(run: &Rc<InertiaRunState>, frame_clock: &FrameClock, mut step: F)
where
    F: FnMut(u64) -> InertiaStatus + 'static,
{
    let run_for_closure = Rc::clone(run);
    let clock_for_closure = frame_clock.clone();

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        if !run_for_closure.is_running.get() {
            return;
        }
        run_for_closure.frames.set(run_for_closure.frames.get() + 1);

        match step(frame_time_nanos) {
            InertiaStatus::Running => {
                schedule_next_frame(&run_for_closure, &clock_for_closure, step);
            }
            InertiaStatus::Settled => {
                run_for_closure.is_running.set(false);
                run_for_closure.registration.borrow_mut().take();
                log::debug!(
                    "inertia settled after {} frames",
                    run_for_closure.frames.get()
                );
            }
        }
    });

    run.registration.borrow_mut().replace(registration);
}

/// Drives an inertia run on the frame clock.
pub struct InertiaAnimation {
    frame_clock: FrameClock,
    run: RefCell<Option<Rc<InertiaRunState>>>,
}

impl InertiaAnimation {
    pub fn new(frame_clock: FrameClock) -> Self {
        Self {
            frame_clock,
            run: RefCell::new(None),
        }
    }

    /// Starts a run, cancelling any previous one first.
    ///
    /// `step` is invoked once per frame with the frame time in nanoseconds.
    /// The first step happens on the next frame, not synchronously.
    pub fn start<F>(&self, step: F)
    where
        F: FnMut(u64) -> InertiaStatus + 'static,
    {
        self.cancel();

        let run = Rc::new(InertiaRunState {
            is_running: Cell::new(true),
            frames: Cell::new(0),
            registration: RefCell::new(None),
        });
        schedule_next_frame(&run, &self.frame_clock, step);
        self.run.borrow_mut().replace(run);
    }

    /// Stops the current run, if any. Safe to call when nothing is running.
    pub fn cancel(&self) {
        let Some(run) = self.run.borrow_mut().take() else {
            return;
        };
        if run.is_running.replace(false) {
            log::debug!("inertia cancelled after {} frames", run.frames.get());
        }
        run.registration.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.run
            .borrow()
            .as_ref()
            .is_some_and(|run| run.is_running.get())
    }

    /// Frames stepped by the current or most recent run.
    pub fn frame_count(&self) -> u32 {
        self.run
            .borrow()
            .as_ref()
            .map(|run| run.frames.get())
            .unwrap_or(0)
    }
}

impl Drop for InertiaAnimation {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "tests/inertia_tests.rs"]
mod tests;
