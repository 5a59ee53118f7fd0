//! Wires input, the frame clock and a presentation surface to a
//! [`TransitionController`].
//!
//! The embedder forwards pointer (or pan) events and frame ticks; the host
//! keeps the surface in sync with whatever the engine is presenting and
//! hands finished animations back to the controller.

use lightbox_animation::FrameClock;
use lightbox_foundation::{PanEvent, PanGestureRecognizer, PointerEvent};
use lightbox_geometry::Rect;

use crate::config::{ConfigError, TransitionConfig};
use crate::controller::TransitionController;
use crate::engine::{AnimatorEngine, TransitionEngine};
use crate::gesture::GestureInterpreter;
use crate::layout::RenderState;
use crate::surface::PresentationSurface;

pub struct Lightbox<S: PresentationSurface> {
    surface: S,
    clock: FrameClock,
    controller: TransitionController<AnimatorEngine>,
    recognizer: PanGestureRecognizer,
    interpreter: GestureInterpreter,
}

impl<S: PresentationSurface> Lightbox<S> {
    pub fn new(container: Rect, surface: S) -> Result<Self, ConfigError> {
        Self::with_config(container, TransitionConfig::default(), surface)
    }

    /// Builds a collapsed lightbox and presents the thumbnail immediately.
    pub fn with_config(container: Rect, config: TransitionConfig, surface: S) -> Result<Self, ConfigError> {
        let clock = FrameClock::new();
        let controller = TransitionController::new(container, config, AnimatorEngine::new(clock.clone()))?;
        let mut lightbox = Self {
            surface,
            clock,
            controller,
            recognizer: PanGestureRecognizer::new(),
            interpreter: GestureInterpreter::new(),
        };
        let initial = lightbox.controller.layout().keyframe(lightbox.controller.render_state());
        lightbox.surface.apply(initial);
        Ok(lightbox)
    }

    /// Replaces the pan recognizer, e.g. to change its slop.
    pub fn with_recognizer(mut self, recognizer: PanGestureRecognizer) -> Self {
        self.recognizer = recognizer;
        self.sync_recognizer();
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn controller(&self) -> &TransitionController<AnimatorEngine> {
        &self.controller
    }

    pub fn render_state(&self) -> RenderState {
        self.controller.render_state()
    }

    /// Nothing in flight and no frames requested.
    pub fn is_idle(&self) -> bool {
        !self.controller.is_transitioning() && !self.clock.has_frame_callbacks()
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        if let Some(pan) = self.recognizer.on_pointer_event(event) {
            self.handle_pan(&pan);
        }
    }

    pub fn handle_pan(&mut self, event: &PanEvent) {
        self.interpreter.handle(event, &mut self.controller);
        self.present();
        self.sync_recognizer();
    }

    /// Tap path: animates to whichever state the content is not in.
    pub fn toggle(&mut self) {
        let target = self.controller.render_state().opposite();
        self.animate(target);
    }

    pub fn animate(&mut self, target: RenderState) {
        self.controller.animate(target);
        self.present();
    }

    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        self.clock.drain_frame_callbacks(frame_time_nanos);
        self.present();
        while let Some(position) = self.controller.engine_mut().take_finished() {
            self.controller.on_animation_finished(position);
        }
        self.sync_recognizer();
    }

    fn present(&mut self) {
        if let Some(keyframe) = self.controller.engine().current_keyframe() {
            self.surface.apply(keyframe);
        }
    }

    fn sync_recognizer(&mut self) {
        let accepts = self.controller.accepts_gestures();
        if self.recognizer.is_enabled() == accepts {
            return;
        }
        log::trace!("pan recognition {}", if accepts { "enabled" } else { "disabled" });
        if let Some(cancelled) = self.recognizer.set_enabled(accepts) {
            self.interpreter.handle(&cancelled, &mut self.controller);
        }
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
