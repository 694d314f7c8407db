//! Scripted interaction driven in real time by the std runtime.

use floatchat_core::Point;
use floatchat_foundation::{PointerEvent, PointerId};
use floatchat_runtime_std::StdRuntime;
use floatchat_ui::{ChatWidget, Sender};
use std::thread;
use std::time::Duration;

const POINTER: PointerId = 1;
const FRAME: Duration = Duration::from_millis(16);
const MAX_SETTLE_FRAMES: u32 = 2_000;

pub struct Scenario {
    runtime: StdRuntime,
    widget: ChatWidget,
}

impl Scenario {
    pub fn new(runtime: StdRuntime, widget: ChatWidget) -> Self {
        Self { runtime, widget }
    }

    pub fn run(&mut self) {
        self.report("mounted");

        self.tap();
        self.widget.submit_message("Hello there!");
        self.idle(Duration::from_millis(450));
        self.print_transcript();

        self.widget.close_panel();
        self.report("panel closed");

        self.drag(Point::new(-300.0, -150.0), 25, 20);
        let toggled = self.widget.on_click();
        println!("click right after slow drag toggled panel: {toggled}");
        self.report("after slow drag");

        self.drag(Point::new(-400.0, -250.0), 4, 20);
        let toggled = self.widget.on_click();
        println!("click right after throw toggled panel: {toggled}");
        let frames = self.settle();
        println!("throw settled after {frames} frames");
        self.report("after throw");

        self.widget.on_resize(480.0, 320.0);
        self.report("after resize to 480x320");
    }

    fn event(&mut self, make: fn(PointerId, Point, u64) -> PointerEvent, at: Point) {
        // Timers due before the event must fire first.
        self.runtime.pump();
        let event = make(POINTER, at, self.runtime.uptime_millis());
        self.widget.on_pointer_event(event);
    }

    fn center(&self) -> Point {
        let half = self.widget.size() / 2.0;
        self.widget.position() + Point::new(half, half)
    }

    fn tap(&mut self) {
        let center = self.center();
        self.event(PointerEvent::down, center);
        self.event(PointerEvent::up, center);
        if self.widget.on_click() {
            println!("tap toggled panel, open={}", self.widget.is_panel_open());
        }
    }

    fn drag(&mut self, delta: Point, steps: u32, step_ms: u64) {
        let from = self.center();
        self.event(PointerEvent::down, from);
        for step in 1..=steps {
            thread::sleep(Duration::from_millis(step_ms));
            let t = step as f32 / steps as f32;
            self.event(
                PointerEvent::moved,
                Point::new(from.x + delta.x * t, from.y + delta.y * t),
            );
        }
        self.event(PointerEvent::up, from + delta);
    }

    fn settle(&mut self) -> u32 {
        let mut frames = 0;
        while self.widget.is_animating() && frames < MAX_SETTLE_FRAMES {
            thread::sleep(FRAME);
            self.runtime.pump();
            frames += 1;
            if frames % 30 == 0 {
                let position = self.widget.position();
                log::info!("frame {frames}: ({:.1}, {:.1})", position.x, position.y);
            }
        }
        frames
    }

    fn idle(&mut self, duration: Duration) {
        let mut waited = Duration::ZERO;
        while waited < duration {
            thread::sleep(FRAME);
            self.runtime.pump();
            waited += FRAME;
        }
    }

    fn print_transcript(&self) {
        println!("  {}", self.widget.panel().title());
        for message in self.widget.transcript().messages() {
            let who = match message.sender {
                Sender::User => "you",
                Sender::Bot => "bot",
            };
            println!("  [{who}] {}", message.text);
        }
    }

    fn report(&self, label: &str) {
        let position = self.widget.position();
        println!(
            "{label}: widget at ({:.1}, {:.1}), button \"{}\"",
            position.x,
            position.y,
            self.widget.fab_label()
        );
    }
}
