//! Animation system for Lightbox
//!
//! Provides a frame clock, closed-form spring physics and an interruptible
//! [`PropertyAnimator`] whose progress can be scrubbed by a gesture and then
//! resumed with the gesture's release velocity.

mod animation;
mod animator;
mod frame_clock;
mod spring;

pub use animation::{AnimatingPosition, AnimatorState, Lerp};
pub use animator::PropertyAnimator;
pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use spring::{SpringSolver, SpringSpec, SpringTimingParameters, SETTLE_FACTOR};
