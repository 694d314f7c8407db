//! Shared gesture constants for the floating widget.
//!
//! Values are in logical pixels and milliseconds. They are the defaults
//! used by `WidgetConfig`; hosts with unusual input devices can override
//! them there.

/// Click tolerance in logical pixels.
///
/// If the pointer moves more than this distance from the press position
/// the session is a drag, and the synthetic click that follows the release
/// is suppressed.
pub const CLICK_TOLERANCE: f32 = 5.0;

/// Trailing window of pointer samples kept for the release velocity estimate.
pub const SAMPLE_WINDOW_MS: u64 = 120;

/// Release speed (px/ms) above which the widget is thrown.
///
/// The comparison is strict: a release at exactly this speed rests in place.
pub const THROW_THRESHOLD: f32 = 1.0;

/// How long a drag or throw keeps the next click from toggling the panel.
pub const SUPPRESS_CLICK_MS: u64 = 200;
