//! Testing utilities and harness for Lightbox

pub mod engine;
pub mod robot;
pub mod robot_assertions;
pub mod surface;

pub use engine::{EngineCommand, ManualEngine};
pub use robot::*;
pub use robot_assertions::{assert_approx_eq, assert_rect_approx_eq};
pub use surface::RecordingSurface;

/// Routes `log` output to the test harness. Needs the `logging` feature;
/// a no-op otherwise. Safe to call from every test.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}

pub mod prelude {
    pub use crate::engine::{EngineCommand, ManualEngine};
    pub use crate::init_logging;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::surface::RecordingSurface;
}
