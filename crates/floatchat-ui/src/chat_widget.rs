//! The floating chat button: pointer handling, click suppression, motion
//! and the panel it toggles.

use crate::config::WidgetConfig;
use crate::motion::MotionController;
use crate::panel::{ChatPanel, Transcript};
use crate::viewport::ViewportBounds;
use floatchat_auth::{SessionIdentity, User};
use floatchat_core::{Bounds, Point, RuntimeHandle, Size};
use floatchat_foundation::{
    InputDisambiguator, PointerEvent, PointerEventKind, PointerId, SuppressionWindow,
};

pub const OPEN_LABEL: &str = "Open chat";
pub const CLOSE_LABEL: &str = "Close chat";

pub struct ChatWidget {
    config: WidgetConfig,
    user: User,
    input: InputDisambiguator,
    suppression: SuppressionWindow,
    motion: MotionController,
    panel: ChatPanel,
}

impl ChatWidget {
    /// Mounts the widget for the signed-in user of `identity`.
    ///
    /// Returns `None` when nobody is signed in; the widget renders nothing
    /// in that case.
    pub fn mount(
        runtime: &RuntimeHandle,
        identity: &dyn SessionIdentity,
        viewport: Size,
        config: WidgetConfig,
    ) -> Option<Self> {
        let Some(user) = identity.current_user() else {
            log::debug!("chat widget not mounted: no authenticated user");
            return None;
        };

        let viewport = ViewportBounds::new(viewport, config.widget_size, config.margin);
        let position = viewport.initial_position(config.initial_inset);
        let motion = MotionController::new(
            runtime.frame_clock(),
            viewport,
            position,
            config.inertia,
        );
        let suppression = SuppressionWindow::with_duration(runtime.timers(), config.suppression_ms);
        let panel = ChatPanel::new(runtime.timers(), user.email.clone(), config.reply_delay_ms);

        log::info!(
            "chat widget mounted for {} at ({:.1}, {:.1})",
            user.email,
            position.x,
            position.y
        );
        Some(Self {
            config,
            user,
            input: InputDisambiguator::new(config.gestures),
            suppression,
            motion,
            panel,
        })
    }

    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event),
            PointerEventKind::Move => self.on_pointer_move(event),
            PointerEventKind::Up => self.on_pointer_up(event.id),
            PointerEventKind::Cancel => self.on_pointer_cancel(event.id),
        }
    }

    fn on_pointer_down(&mut self, event: PointerEvent) {
        let started = self.input.on_session_start(
            event.id,
            event.position,
            self.motion.position(),
            event.uptime_ms,
        );
        if started {
            // A grab always wins over residual motion.
            self.motion.cancel_inertia();
        }
    }

    fn on_pointer_move(&mut self, event: PointerEvent) {
        let bounds = self.motion.bounds();
        if let Some(update) =
            self.input
                .on_session_move(event.id, event.position, event.uptime_ms, &bounds)
        {
            self.motion.place_direct(update.position);
        }
    }

    fn on_pointer_up(&mut self, pointer_id: PointerId) {
        let Some(outcome) = self.input.on_session_end(pointer_id) else {
            return;
        };
        if outcome.exceeded_tolerance {
            self.suppression.arm();
        }
        if let Some(velocity) = outcome.throw {
            self.suppression.arm();
            self.motion.start_inertia(velocity);
        }
    }

    fn on_pointer_cancel(&mut self, pointer_id: PointerId) {
        self.input.on_session_cancel(pointer_id);
    }

    /// Handles the click that follows a press/release on the button.
    ///
    /// Returns whether the panel was toggled. Clicks arriving mid-session or
    /// inside the suppression window are swallowed.
    pub fn on_click(&mut self) -> bool {
        if self.input.is_active() {
            log::trace!("click ignored: pointer session active");
            return false;
        }
        if self.suppression.is_armed() {
            log::debug!("click suppressed after drag or throw");
            return false;
        }
        let open = self.panel.toggle();
        log::debug!("chat panel toggled, open={open}");
        true
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.motion.reconcile_viewport(width, height);
    }

    /// Header close button.
    pub fn close_panel(&mut self) {
        self.panel.close();
    }

    pub fn submit_message(&mut self, text: &str) -> bool {
        self.panel.submit(text)
    }

    pub fn position(&self) -> Point {
        self.motion.position()
    }

    pub fn bounds(&self) -> Bounds {
        self.motion.bounds()
    }

    pub fn size(&self) -> f32 {
        self.config.widget_size
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn panel(&self) -> &ChatPanel {
        &self.panel
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn transcript(&self) -> &Transcript {
        self.panel.transcript()
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_active()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    pub fn is_click_suppressed(&self) -> bool {
        self.suppression.is_armed()
    }

    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    /// Accessible label of the floating button.
    pub fn fab_label(&self) -> &'static str {
        if self.panel.is_open() {
            CLOSE_LABEL
        } else {
            OPEN_LABEL
        }
    }
}

impl std::fmt::Debug for ChatWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatWidget")
            .field("user", &self.user.email)
            .field("motion", &self.motion)
            .field("dragging", &self.input.is_active())
            .field("suppression", &self.suppression)
            .field("panel", &self.panel)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/chat_widget_tests.rs"]
mod tests;
