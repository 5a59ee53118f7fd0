//! Interactive Collapsed/Expanded transition state machine.
//!
//! A pan starts a transition, scrubs it and releases it; a toggle animates
//! it programmatically. The controller decides whether a release commits,
//! converts the release velocity into spring timing and records the new
//! render state once the engine reports completion. It never touches the
//! presentation itself.

use lightbox_animation::{AnimatingPosition, SpringTimingParameters};
use lightbox_geometry::{Point, Rect, Vector};

use crate::config::{ConfigError, TransitionConfig};
use crate::engine::{TransitionEngine, TransitionRequest};
use crate::layout::{RenderState, TransitionLayout};
use crate::transition::{Transition, TransitionSlot};

/// What an input source asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Start,
    /// Vertical pan translation since the gesture began.
    Scrub { translation_y: f32 },
    End { final_point: Point, velocity: Vector },
    Cancel,
}

pub struct TransitionController<E: TransitionEngine> {
    config: TransitionConfig,
    layout: TransitionLayout,
    render_state: RenderState,
    slot: TransitionSlot,
    gestures_enabled: bool,
    engine: E,
}

impl<E: TransitionEngine> TransitionController<E> {
    pub fn new(container: Rect, config: TransitionConfig, engine: E) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = TransitionLayout::new(container, &config)?;
        Ok(Self {
            config,
            layout,
            render_state: RenderState::Collapsed,
            slot: TransitionSlot::Empty,
            gestures_enabled: true,
            engine,
        })
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn layout(&self) -> &TransitionLayout {
        &self.layout
    }

    pub fn render_state(&self) -> RenderState {
        self.render_state
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.slot.transition()
    }

    pub fn is_transitioning(&self) -> bool {
        self.slot.is_active()
    }

    /// False from a release until its completion.
    pub fn accepts_gestures(&self) -> bool {
        self.gestures_enabled
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Start => self.start(),
            Intent::Scrub { translation_y } => self.scrub(translation_y),
            Intent::End {
                final_point,
                velocity,
            } => self.end(final_point, velocity),
            Intent::Cancel => self.cancel(),
        }
    }

    /// Begins an interactive transition toward the opposite state.
    pub fn start(&mut self) {
        if !self.gestures_enabled {
            log::debug!("gesture start ignored while completing");
            return;
        }
        if self.slot.is_active() {
            log::debug!("gesture start ignored, transition already active");
            return;
        }

        let origin = self.render_state;
        let request = self.request(origin, origin.opposite());
        log::debug!("interactive transition from {origin:?}");
        self.engine.create(request);
        self.slot = TransitionSlot::Active(Transition::interactive(origin));
    }

    /// Maps a vertical translation to progress and forwards it.
    pub fn scrub(&mut self, translation_y: f32) {
        let progress = self.scrub_progress(translation_y);
        let Some(transition) = self.slot.transition_mut() else {
            log::trace!("scrub without a transition");
            return;
        };
        if !transition.is_interactive() {
            return;
        }
        transition.set_progress(progress);
        self.engine.set_fraction_complete(progress);
    }

    /// Releases the pan: commits or reverts, then resumes on a spring.
    pub fn end(&mut self, final_point: Point, velocity: Vector) {
        let commit = self.release_commits(final_point, velocity);
        let timing = self.release_timing(velocity);
        self.release(!commit, timing);
    }

    /// Abandons an interactive transition, returning to the origin.
    pub fn cancel(&mut self) {
        let timing = SpringTimingParameters::at_rest(self.config.damping_ratio);
        self.release(true, timing);
    }

    /// Animates to `target` without a gesture. Targeting the current state
    /// still runs and completes.
    pub fn animate(&mut self, target: RenderState) {
        if self.slot.is_active() {
            log::debug!("animate({target:?}) ignored, transition already active");
            return;
        }

        let origin = self.render_state;
        let request = self.request(origin, target);
        log::debug!("animating {origin:?} -> {target:?}");
        self.engine.create(request);
        self.engine.start_animation();
        self.slot = TransitionSlot::Active(Transition::programmatic(origin, target));
    }

    /// Records the settled state and re-enables gestures.
    pub fn on_complete(&mut self, resolved: RenderState) {
        match self.slot.take() {
            Some(transition) => {
                let expected = [transition.origin(), transition.target()];
                if !expected.contains(&resolved) {
                    log::warn!("transition {transition:?} completed in unexpected state {resolved:?}");
                }
                log::debug!("transition settled in {resolved:?}");
                self.render_state = resolved;
            }
            None => log::debug!("completion without a transition"),
        }
        self.gestures_enabled = true;
    }

    /// Resolves an engine completion against the active transition.
    pub fn on_animation_finished(&mut self, position: AnimatingPosition) {
        let Some(transition) = self.slot.transition() else {
            log::debug!("animation finished without a transition");
            return;
        };
        let resolved = transition.resolve(position);
        self.on_complete(resolved);
    }

    /// Progress for a vertical translation, relative to the container
    /// center and clamped away from both ends.
    pub fn scrub_progress(&self, translation_y: f32) -> f32 {
        let center = self.layout.full_rect().center().y;
        let raw = match self.render_state {
            RenderState::Collapsed => 1.0 - (center + translation_y) / center,
            RenderState::Expanded => (center + translation_y) / center - 1.0,
        };
        // max/min rather than clamp: NaN lands on the lower bound.
        raw.max(self.config.min_progress).min(self.config.max_progress)
    }

    /// Whether releasing at `final_point` with `velocity` commits to the
    /// opposite state.
    pub fn release_commits(&self, final_point: Point, velocity: Vector) -> bool {
        let distance = self.layout.full_rect().height / self.config.distance_threshold_divisor;
        let speed = self.config.velocity_threshold;
        match self.render_state {
            RenderState::Collapsed => final_point.y <= -distance || velocity.dy <= -speed,
            RenderState::Expanded => final_point.y >= distance || velocity.dy >= speed,
        }
    }

    /// Spring timing for a release, in remaining-segment units per second.
    pub fn release_timing(&self, velocity: Vector) -> SpringTimingParameters {
        let scale = self.config.velocity_scale;
        SpringTimingParameters::new(
            self.config.damping_ratio,
            Vector::new(velocity.dx / scale, velocity.dy / scale),
        )
    }

    fn release(&mut self, reversed: bool, timing: SpringTimingParameters) {
        let Some(transition) = self.slot.transition_mut() else {
            log::debug!("release without a transition");
            return;
        };
        if !transition.is_interactive() {
            log::debug!("release ignored, transition already completing");
            return;
        }

        transition.release(reversed);
        log::debug!(
            "released at {:.4}, {}",
            transition.progress(),
            if reversed { "reverting" } else { "committing" }
        );
        self.gestures_enabled = false;
        self.engine
            .continue_animation(reversed, timing, self.config.release_duration_factor);
    }

    fn request(&self, origin: RenderState, target: RenderState) -> TransitionRequest {
        TransitionRequest {
            from: self.layout.keyframe(origin),
            to: self.layout.keyframe(target),
            duration_secs: self.config.nominal_duration_secs,
            damping_ratio: self.config.damping_ratio,
            velocity_axis: progress_axis(origin),
        }
    }
}

/// Pan direction that advances progress: up from Collapsed, down from
/// Expanded.
fn progress_axis(origin: RenderState) -> Vector {
    match origin {
        RenderState::Collapsed => Vector::new(0.0, -1.0),
        RenderState::Expanded => Vector::new(0.0, 1.0),
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
