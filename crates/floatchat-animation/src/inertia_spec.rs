//! Discrete-time inertia with axis-aligned edge bouncing.
//!
//! Each step advances the position by one nominal frame of velocity,
//! reflects any axis that reached a bound, then applies friction to both
//! components. The run settles once the speed drops below the stop
//! threshold.

use floatchat_core::{Bounds, Point, Velocity};

/// Nominal frame interval used to advance positions, in milliseconds.
pub const FRAME_INTERVAL_MS: f32 = 16.0;
/// Fraction of an axis' speed kept after hitting a bound.
pub const BOUNCE: f32 = 0.6;
/// Per-step velocity multiplier modelling drag.
pub const FRICTION: f32 = 0.985;
/// Speed (px/ms) below which the run settles.
pub const STOP_THRESHOLD: f32 = 0.02;

/// Result of a single inertia step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaFrame {
    pub position: Point,
    pub velocity: Velocity,
    pub collided_x: bool,
    pub collided_y: bool,
    /// The speed after this step fell below the stop threshold.
    pub settled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceDecaySpec {
    pub frame_interval_ms: f32,
    pub bounce: f32,
    pub friction: f32,
    pub stop_threshold: f32,
}

impl Default for BounceDecaySpec {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            bounce: BOUNCE,
            friction: FRICTION,
            stop_threshold: STOP_THRESHOLD,
        }
    }
}

impl BounceDecaySpec {
    /// Velocity component after hitting a bound.
    pub fn reflect(&self, component: f32) -> f32 {
        -component * self.bounce
    }

    pub fn is_settled(&self, velocity: Velocity) -> bool {
        velocity.speed() < self.stop_threshold
    }

    /// Advances one frame.
    ///
    /// Bounds are inclusive: landing exactly on a bound counts as a hit.
    /// Axes are reflected independently, so a corner hit reflects both.
    pub fn step(&self, position: Point, velocity: Velocity, bounds: &Bounds) -> InertiaFrame {
        let (x, vx, collided_x) = self.step_axis(
            position.x,
            velocity.vx,
            bounds.min_x,
            bounds.max_x,
        );
        let (y, vy, collided_y) = self.step_axis(
            position.y,
            velocity.vy,
            bounds.min_y,
            bounds.max_y,
        );
        let velocity = Velocity::new(vx, vy).scale(self.friction);
        InertiaFrame {
            position: Point::new(x, y),
            velocity,
            collided_x,
            collided_y,
            settled: self.is_settled(velocity),
        }
    }

    fn step_axis(&self, value: f32, speed: f32, min: f32, max: f32) -> (f32, f32, bool) {
        let mut value = value + speed * self.frame_interval_ms;
        let mut speed = speed;
        let mut collided = false;
        if value <= min {
            value = min;
            speed = self.reflect(speed);
            collided = true;
        }
        if value >= max {
            value = max;
            speed = self.reflect(speed);
            collided = true;
        }
        (value, speed, collided)
    }

    /// Upper bound on the number of steps a run started at `initial_speed`
    /// takes to settle.
    ///
    /// Bounces only remove speed, so friction alone bounds the decay:
    /// after `n` steps the speed is at most `initial_speed * friction^n`.
    /// Returns 0 for non-finite or non-positive speeds.
    pub fn max_steps(&self, initial_speed: f32) -> u32 {
        if !initial_speed.is_finite() || initial_speed <= 0.0 {
            return 0;
        }
        let steps = (self.stop_threshold / initial_speed).ln() / self.friction.ln();
        steps.max(0.0).ceil() as u32 + 1
    }
}

#[cfg(test)]
#[path = "tests/inertia_spec_tests.rs"]
mod tests;
