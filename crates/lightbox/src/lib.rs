//! Lightbox transition
//!
//! Moves a piece of content between a thumbnail pinned to the bottom-right
//! corner of its container and the container's full bounds, with a blur
//! that tracks the expansion. A vertical pan scrubs the transition and its
//! release either commits or reverts on a velocity-seeded spring; a tap
//! animates it outright.
//!
//! [`Lightbox`] is the batteries-included host. Embedders with their own
//! animation driver can use [`TransitionController`] with a custom
//! [`TransitionEngine`].

pub mod config;
mod controller;
mod engine;
pub mod gesture;
mod host;
mod layout;
mod surface;
mod transition;

pub use config::{ConfigError, TransitionConfig};
pub use controller::{Intent, TransitionController};
pub use engine::{AnimatorEngine, TransitionEngine, TransitionRequest};
pub use gesture::GestureInterpreter;
pub use host::Lightbox;
pub use layout::{thumbnail_rect, Keyframe, RenderState, TransitionLayout};
pub use surface::PresentationSurface;
pub use transition::{Transition, TransitionPhase, TransitionSlot};

pub use lightbox_animation::{AnimatingPosition, FrameClock, Lerp, SpringTimingParameters};
pub use lightbox_foundation::{PanEvent, PanPhase, PointerEvent, PointerEventKind};
pub use lightbox_geometry::{Point, Rect, Size, Vector};

pub mod prelude {
    pub use crate::config::TransitionConfig;
    pub use crate::host::Lightbox;
    pub use crate::layout::RenderState;
    pub use crate::surface::PresentationSurface;
    pub use lightbox_geometry::prelude::*;
}
