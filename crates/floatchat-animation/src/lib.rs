//! Inertia animation for the floatchat widget.

pub mod inertia;
pub mod inertia_spec;

pub use inertia::{InertiaAnimation, InertiaStatus};
pub use inertia_spec::{
    BounceDecaySpec, InertiaFrame, BOUNCE, FRAME_INTERVAL_MS, FRICTION, STOP_THRESHOLD,
};
