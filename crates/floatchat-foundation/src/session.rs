//! Pointer sessions and click/drag disambiguation.
//!
//! A session spans one press and its release (or cancel) for a single
//! pointer. While it is open the disambiguator maps pointer positions to
//! clamped widget positions, records them in a trailing sample buffer and
//! tracks whether the press has strayed past the click tolerance. On
//! release it classifies the gesture and estimates the release velocity.
//!
//! The disambiguator only computes outcomes; placing the widget, starting
//! inertia and arming click suppression are left to the caller.

use crate::gesture_constants::{CLICK_TOLERANCE, SAMPLE_WINDOW_MS, THROW_THRESHOLD};
use crate::pointer::PointerId;
use crate::sample_buffer::SampleBuffer;
use floatchat_core::{Bounds, Point, Velocity};

/// Thresholds used to classify a pointer session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Maximum press displacement (px) still treated as a click.
    pub click_tolerance: f32,
    /// Trailing window (ms) of samples used for the release velocity.
    pub sample_window_ms: u64,
    /// Release speed (px/ms) that must be exceeded to throw the widget.
    pub throw_threshold: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            click_tolerance: CLICK_TOLERANCE,
            sample_window_ms: SAMPLE_WINDOW_MS,
            throw_threshold: THROW_THRESHOLD,
        }
    }
}

/// State of one press-to-release interaction.
#[derive(Clone, Debug)]
pub struct PointerSession {
    pointer_id: PointerId,
    start: Point,
    grab_offset: Point,
    exceeded_tolerance: bool,
    samples: SampleBuffer,
}

impl PointerSession {
    fn new(
        pointer_id: PointerId,
        pointer: Point,
        widget_top_left: Point,
        time_ms: u64,
        window_ms: u64,
    ) -> Self {
        let mut samples = SampleBuffer::new(window_ms);
        samples.push(time_ms, widget_top_left);
        Self {
            pointer_id,
            start: pointer,
            grab_offset: pointer - widget_top_left,
            exceeded_tolerance: false,
            samples,
        }
    }

    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn grab_offset(&self) -> Point {
        self.grab_offset
    }

    pub fn exceeded_tolerance(&self) -> bool {
        self.exceeded_tolerance
    }

    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }
}

/// Result of feeding a move into an open session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    /// Clamped widget position to place directly.
    pub position: Point,
    /// True only on the move that first crossed the click tolerance.
    pub crossed_tolerance: bool,
}

/// Classification of a finished session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseOutcome {
    /// The press strayed past the click tolerance at some point.
    pub exceeded_tolerance: bool,
    /// Velocity estimate, absent when fewer than two samples were buffered.
    pub velocity: Option<Velocity>,
    /// Set when the release speed strictly exceeded the throw threshold.
    pub throw: Option<Velocity>,
}

impl ReleaseOutcome {
    /// Whether the synthetic click that follows this release must be ignored.
    pub fn suppresses_click(&self) -> bool {
        self.exceeded_tolerance || self.throw.is_some()
    }
}

/// Tracks the single active pointer session and classifies it on release.
#[derive(Clone, Debug, Default)]
pub struct InputDisambiguator {
    thresholds: GestureThresholds,
    session: Option<PointerSession>,
}

impl InputDisambiguator {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            session: None,
        }
    }

    pub fn thresholds(&self) -> GestureThresholds {
        self.thresholds
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.session.as_ref().map(PointerSession::pointer_id)
    }

    pub fn session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    /// Opens a session for `pointer_id`.
    ///
    /// Returns false, leaving the current session untouched, when another
    /// pointer already owns the widget.
    pub fn on_session_start(
        &mut self,
        pointer_id: PointerId,
        pointer: Point,
        widget_top_left: Point,
        time_ms: u64,
    ) -> bool {
        if let Some(active) = self.active_pointer() {
            if active != pointer_id {
                log::trace!("pointer {pointer_id} ignored, pointer {active} holds the session");
                return false;
            }
        }
        self.session = Some(PointerSession::new(
            pointer_id,
            pointer,
            widget_top_left,
            time_ms,
            self.thresholds.sample_window_ms,
        ));
        log::debug!(
            "pointer session {pointer_id} started at ({:.1}, {:.1})",
            pointer.x,
            pointer.y
        );
        true
    }

    /// Maps a move of the session's pointer to a clamped widget position.
    ///
    /// Moves from any other pointer, or with no session open, yield `None`.
    pub fn on_session_move(
        &mut self,
        pointer_id: PointerId,
        pointer: Point,
        time_ms: u64,
        bounds: &Bounds,
    ) -> Option<DragUpdate> {
        let tolerance = self.thresholds.click_tolerance;
        let session = self
            .session
            .as_mut()
            .filter(|session| session.pointer_id == pointer_id)?;

        let position = bounds.clamp(pointer - session.grab_offset);
        session.samples.push(time_ms, position);

        let crossed_tolerance =
            !session.exceeded_tolerance && pointer.distance_to(session.start) > tolerance;
        if crossed_tolerance {
            session.exceeded_tolerance = true;
            log::debug!("pointer session {pointer_id} became a drag");
        }

        Some(DragUpdate {
            position,
            crossed_tolerance,
        })
    }

    /// Closes the session and classifies it. The session is discarded
    /// whatever the outcome.
    pub fn on_session_end(&mut self, pointer_id: PointerId) -> Option<ReleaseOutcome> {
        if self.active_pointer() != Some(pointer_id) {
            return None;
        }
        let session = self.session.take()?;
        let velocity = session.samples.release_velocity();
        let throw = velocity.filter(|velocity| velocity.speed() > self.thresholds.throw_threshold);
        let outcome = ReleaseOutcome {
            exceeded_tolerance: session.exceeded_tolerance,
            velocity,
            throw,
        };
        log::debug!("pointer session {pointer_id} ended: {outcome:?}");
        Some(outcome)
    }

    /// Discards the session without classifying it.
    pub fn on_session_cancel(&mut self, pointer_id: PointerId) -> bool {
        if self.active_pointer() != Some(pointer_id) {
            return false;
        }
        self.session = None;
        log::debug!("pointer session {pointer_id} cancelled");
        true
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
