//! Pan phases to controller intents.

pub use lightbox_foundation::{PanEvent, PanPhase};

use crate::controller::{Intent, TransitionController};
use crate::engine::TransitionEngine;

/// Stateless adapter from pan events to transition intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureInterpreter;

impl GestureInterpreter {
    pub fn new() -> Self {
        Self
    }

    pub fn intent(&self, event: &PanEvent) -> Intent {
        match event.phase {
            PanPhase::Began => Intent::Start,
            PanPhase::Changed => Intent::Scrub {
                translation_y: event.translation.y,
            },
            PanPhase::Ended => Intent::End {
                final_point: event.translation,
                velocity: event.velocity,
            },
            PanPhase::Cancelled | PanPhase::Failed => Intent::Cancel,
        }
    }

    pub fn handle<E: TransitionEngine>(&self, event: &PanEvent, controller: &mut TransitionController<E>) {
        let intent = self.intent(event);
        log::trace!("{:?} -> {intent:?}", event.phase);
        controller.apply(intent);
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
