//! Gesture robot for the chat widget
//!
//! The robot owns a [`TestRuntime`] and a mounted widget. Every pointer
//! event it sends is stamped with the runtime clock, which is advanced
//! before dispatch, so sample times, the suppression window and bot
//! replies all run on one timeline.
//!
//! # Example
//!
//! ```
//! use floatchat_testing::WidgetRobot;
//!
//! let mut robot = WidgetRobot::mount(800.0, 600.0);
//! robot.tap();
//! assert!(robot.widget().is_panel_open());
//! ```

use crate::test_runtime::TestRuntime;
use floatchat_auth::User;
use floatchat_core::{Point, Size};
use floatchat_foundation::{PointerEvent, PointerId};
use floatchat_ui::{ChatWidget, WidgetConfig};

/// Pointer id used by the robot's single finger.
pub const ROBOT_POINTER: PointerId = 1;

pub const ROBOT_EMAIL: &str = "robot@acme.com";

pub struct WidgetRobot {
    runtime: TestRuntime,
    widget: ChatWidget,
    pointer: Point,
}

impl WidgetRobot {
    /// Mounts a widget with the default configuration for a signed-in user.
    pub fn mount(width: f32, height: f32) -> Self {
        Self::mount_with_config(width, height, WidgetConfig::default())
    }

    pub fn mount_with_config(width: f32, height: f32, config: WidgetConfig) -> Self {
        let runtime = TestRuntime::new();
        let identity = Some(User {
            email: ROBOT_EMAIL.to_owned(),
        });
        let widget = ChatWidget::mount(
            &runtime.handle(),
            &identity,
            Size::new(width, height),
            config,
        )
        .expect("robot identity is always signed in");
        Self {
            runtime,
            widget,
            pointer: Point::ZERO,
        }
    }

    pub fn runtime(&self) -> &TestRuntime {
        &self.runtime
    }

    pub fn widget(&self) -> &ChatWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut ChatWidget {
        &mut self.widget
    }

    pub fn position(&self) -> Point {
        self.widget.position()
    }

    /// Center of the widget's current bounding box.
    pub fn center(&self) -> Point {
        let half = self.widget.size() / 2.0;
        self.widget.position() + Point::new(half, half)
    }

    pub fn wait(&mut self, millis: u64) {
        self.runtime.advance_millis(millis);
    }

    pub fn frame(&mut self) -> bool {
        self.runtime.advance_frame()
    }

    pub fn press(&mut self, at: Point) {
        self.pointer = at;
        self.send(PointerEvent::down(ROBOT_POINTER, at, self.runtime.now_millis()));
    }

    /// Moves the pointer after `after_ms` milliseconds.
    pub fn move_to(&mut self, to: Point, after_ms: u64) {
        self.runtime.advance_millis(after_ms);
        self.pointer = to;
        self.send(PointerEvent::moved(ROBOT_POINTER, to, self.runtime.now_millis()));
    }

    pub fn release(&mut self) {
        self.send(PointerEvent::up(
            ROBOT_POINTER,
            self.pointer,
            self.runtime.now_millis(),
        ));
    }

    pub fn cancel(&mut self) {
        self.send(PointerEvent::cancel(
            ROBOT_POINTER,
            self.pointer,
            self.runtime.now_millis(),
        ));
    }

    pub fn send(&mut self, event: PointerEvent) {
        self.widget.on_pointer_event(event);
    }

    /// Delivers the click a host fires after a release.
    pub fn click(&mut self) -> bool {
        self.widget.on_click()
    }

    /// Press and release on the widget center without moving, then click.
    pub fn tap(&mut self) -> bool {
        let center = self.center();
        self.press(center);
        self.runtime.advance_millis(40);
        self.release();
        self.click()
    }

    /// Drags the widget center by `delta` in `steps` moves spaced
    /// `step_ms` apart, then releases.
    pub fn drag_by(&mut self, delta: Point, steps: u32, step_ms: u64) {
        let from = self.center();
        self.press(from);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_to(
                Point::new(from.x + delta.x * t, from.y + delta.y * t),
                step_ms,
            );
        }
        self.release();
    }

    /// Slow drag: 25 moves over 500 ms, well under the throw threshold for
    /// deltas of a few hundred pixels.
    pub fn drag(&mut self, delta: Point) {
        self.drag_by(delta, 25, 20);
    }

    /// Fast flick covering `delta` in 80 ms.
    pub fn throw(&mut self, delta: Point) {
        self.drag_by(delta, 4, 20);
    }

    /// Runs frames until the widget stops animating. Returns the number of
    /// frames, or panics once `max_frames` is exceeded.
    pub fn run_until_settled(&mut self, max_frames: u32) -> u32 {
        let mut frames = 0;
        while self.widget.is_animating() {
            assert!(
                frames < max_frames,
                "widget still animating after {max_frames} frames"
            );
            self.runtime.advance_frame();
            frames += 1;
        }
        frames
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.widget.on_resize(width, height);
    }
}
