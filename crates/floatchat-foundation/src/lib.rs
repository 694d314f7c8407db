//! Input handling for the floatchat widget: pointer events, the trailing
//! sample buffer, pointer sessions with click/drag disambiguation, and the
//! click suppression window.

pub mod gesture_constants;
pub mod pointer;
pub mod sample_buffer;
pub mod session;
pub mod suppression;

pub use gesture_constants::*;
pub use pointer::{PointerEvent, PointerEventKind, PointerId};
pub use sample_buffer::{PointerSample, SampleBuffer};
pub use session::{DragUpdate, GestureThresholds, InputDisambiguator, PointerSession, ReleaseOutcome};
pub use suppression::SuppressionWindow;
