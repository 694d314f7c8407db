//! Owner of the widget position: direct placement while dragging and the
//! bounce-decay inertia run after a throw.
//!
//! Position, velocity and viewport bounds live in shared state that every
//! inertia step reads afresh, so a viewport change made between two frames
//! is picked up by the next step without restarting the run.

use crate::viewport::ViewportBounds;
use floatchat_animation::{BounceDecaySpec, InertiaAnimation, InertiaStatus};
use floatchat_core::{Bounds, FrameClock, Point, Size, Velocity};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct MotionState {
    position: Point,
    velocity: Velocity,
    viewport: ViewportBounds,
}

pub struct MotionController {
    state: Rc<RefCell<MotionState>>,
    spec: BounceDecaySpec,
    inertia: InertiaAnimation,
}

impl MotionController {
    pub fn new(
        frame_clock: FrameClock,
        viewport: ViewportBounds,
        position: Point,
        spec: BounceDecaySpec,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(MotionState {
                position: viewport.clamp(position),
                velocity: Velocity::ZERO,
                viewport,
            })),
            spec,
            inertia: InertiaAnimation::new(frame_clock),
        }
    }

    pub fn position(&self) -> Point {
        self.state.borrow().position
    }

    pub fn velocity(&self) -> Velocity {
        self.state.borrow().velocity
    }

    pub fn bounds(&self) -> Bounds {
        self.state.borrow().viewport.bounds()
    }

    pub fn viewport(&self) -> Size {
        self.state.borrow().viewport.viewport()
    }

    pub fn spec(&self) -> BounceDecaySpec {
        self.spec
    }

    pub fn is_animating(&self) -> bool {
        self.inertia.is_running()
    }

    /// Frames stepped by the current or most recent inertia run.
    pub fn inertia_frames(&self) -> u32 {
        self.inertia.frame_count()
    }

    /// Moves the widget to `position` as is. Callers pass positions that are
    /// already clamped.
    pub fn place_direct(&self, position: Point) {
        self.state.borrow_mut().position = position;
    }

    /// Starts a new inertia run with `velocity`, replacing any current one.
    pub fn start_inertia(&self, velocity: Velocity) {
        self.cancel_inertia();
        if !velocity.is_finite() {
            log::warn!("ignoring non-finite release velocity {velocity:?}");
            return;
        }

        self.state.borrow_mut().velocity = velocity;
        log::debug!(
            "inertia started at {:.3} px/ms ({:.3}, {:.3})",
            velocity.speed(),
            velocity.vx,
            velocity.vy
        );

        let state = Rc::clone(&self.state);
        let spec = self.spec;
        self.inertia.start(move |_frame_time_nanos| {
            let mut state = state.borrow_mut();
            let bounds = state.viewport.bounds();
            let frame = spec.step(state.position, state.velocity, &bounds);
            state.position = frame.position;
            state.velocity = frame.velocity;
            log::trace!(
                "inertia step to ({:.1}, {:.1}) v=({:.4}, {:.4}) hit=({}, {})",
                frame.position.x,
                frame.position.y,
                frame.velocity.vx,
                frame.velocity.vy,
                frame.collided_x,
                frame.collided_y
            );
            if frame.settled {
                state.velocity = Velocity::ZERO;
                InertiaStatus::Settled
            } else {
                InertiaStatus::Running
            }
        });
    }

    /// Stops the inertia run immediately. No-op when nothing is running.
    pub fn cancel_inertia(&self) {
        self.inertia.cancel();
        self.state.borrow_mut().velocity = Velocity::ZERO;
    }

    /// Recomputes the bounds for a new viewport size and re-clamps the
    /// position in place. A running inertia run continues.
    pub fn reconcile_viewport(&self, width: f32, height: f32) {
        let mut state = self.state.borrow_mut();
        state.viewport.resize(Size::new(width, height));
        let clamped = state.viewport.clamp(state.position);
        if clamped != state.position {
            log::debug!(
                "viewport {width}x{height} moved widget from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                state.position.x,
                state.position.y,
                clamped.x,
                clamped.y
            );
            state.position = clamped;
        }
    }
}

impl std::fmt::Debug for MotionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MotionController")
            .field("position", &state.position)
            .field("velocity", &state.velocity)
            .field("bounds", &state.viewport.bounds())
            .field("animating", &self.inertia.is_running())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/motion_tests.rs"]
mod tests;
