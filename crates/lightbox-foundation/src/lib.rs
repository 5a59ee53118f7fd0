//! Input foundation for Lightbox
//!
//! Raw pointer events go in, pan phase events come out. The pan recognizer
//! stands in for a platform pan gesture primitive: it applies a touch slop,
//! reports translation from the press position, and tracks release velocity.

pub mod gesture_constants;
mod pan;
mod types;
mod velocity_tracker;

pub use lightbox_geometry::{Point, Vector};
pub use pan::{PanEvent, PanGestureRecognizer, PanPhase};
pub use types::{PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::{VelocityTracker, VelocityTracker1D, ASSUME_STOPPED_MS};
