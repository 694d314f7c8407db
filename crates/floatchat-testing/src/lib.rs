//! Testing utilities for floatchat
//!
//! [`TestRuntime`] drives the runtime by hand: time only moves when a test
//! advances it and frames only run when a test asks for one. [`WidgetRobot`]
//! builds on it to script presses, drags, throws and clicks against a
//! mounted [`floatchat_ui::ChatWidget`].

pub mod robot;
pub mod test_runtime;

pub use robot::{WidgetRobot, ROBOT_POINTER};
pub use test_runtime::{ManualScheduler, TestRuntime, FRAME_INTERVAL_MS};

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::test_runtime::*;
}
