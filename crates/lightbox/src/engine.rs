//! The seam between the transition controller and whatever drives the
//! animation.
//!
//! The controller only issues commands. Completion comes back through
//! [`TransitionEngine::take_finished`], which the host polls after each
//! frame, so nothing the engine owns ever holds a reference to the
//! controller.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use lightbox_animation::{AnimatingPosition, FrameClock, Lerp, PropertyAnimator, SpringTimingParameters};
use lightbox_geometry::Vector;

use crate::layout::Keyframe;

/// Everything an engine needs to set up one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    pub from: Keyframe,
    pub to: Keyframe,
    pub duration_secs: f32,
    pub damping_ratio: f32,
    /// Direction in velocity space along which progress grows.
    pub velocity_axis: Vector,
}

pub trait TransitionEngine {
    /// Replaces any previous animation with a paused one at progress 0.
    fn create(&mut self, request: TransitionRequest);

    fn set_fraction_complete(&mut self, fraction: f32);

    /// Resumes toward the target, or back to the origin when `reversed`,
    /// seeded with `timing` over `duration * duration_factor`.
    fn continue_animation(&mut self, reversed: bool, timing: SpringTimingParameters, duration_factor: f32);

    /// Runs from the current progress to the target over the nominal duration.
    fn start_animation(&mut self);

    /// Values to present right now, if an animation exists.
    fn current_keyframe(&self) -> Option<Keyframe>;

    /// Pops the next finished animation.
    fn take_finished(&mut self) -> Option<AnimatingPosition>;
}

struct ActiveAnimation {
    generation: u64,
    animator: PropertyAnimator,
    from: Keyframe,
    to: Keyframe,
}

/// [`TransitionEngine`] backed by a [`PropertyAnimator`] on a [`FrameClock`].
pub struct AnimatorEngine {
    clock: FrameClock,
    active: Option<ActiveAnimation>,
    next_generation: u64,
    finished: Rc<RefCell<VecDeque<(u64, AnimatingPosition)>>>,
}

impl AnimatorEngine {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            active: None,
            next_generation: 0,
            finished: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.animator.is_running())
    }

    pub fn fraction_complete(&self) -> Option<f32> {
        self.active
            .as_ref()
            .map(|active| active.animator.fraction_complete())
    }

    fn animator(&self) -> Option<&PropertyAnimator> {
        self.active.as_ref().map(|active| &active.animator)
    }
}

impl TransitionEngine for AnimatorEngine {
    fn create(&mut self, request: TransitionRequest) {
        if let Some(previous) = self.active.take() {
            log::debug!("replacing unfinished animation");
            previous.animator.stop_animation();
        }
        self.finished.borrow_mut().clear();

        let animator = PropertyAnimator::new(self.clock.clone(), request.duration_secs, request.damping_ratio)
            .with_velocity_axis(request.velocity_axis);
        let generation = self.next_generation;
        self.next_generation += 1;
        let mailbox = Rc::clone(&self.finished);
        animator.add_completion(move |position| mailbox.borrow_mut().push_back((generation, position)));

        self.active = Some(ActiveAnimation {
            generation,
            animator,
            from: request.from,
            to: request.to,
        });
    }

    fn set_fraction_complete(&mut self, fraction: f32) {
        match self.animator() {
            Some(animator) => animator.set_fraction_complete(fraction),
            None => log::debug!("scrub without an animation"),
        }
    }

    fn continue_animation(&mut self, reversed: bool, timing: SpringTimingParameters, duration_factor: f32) {
        let Some(animator) = self.animator() else {
            log::debug!("continue without an animation");
            return;
        };
        animator.set_reversed(reversed);
        animator.continue_animation(Some(timing), duration_factor);
    }

    fn start_animation(&mut self) {
        match self.animator() {
            Some(animator) => animator.start_animation(),
            None => log::debug!("start without an animation"),
        }
    }

    fn current_keyframe(&self) -> Option<Keyframe> {
        self.active.as_ref().map(|active| {
            active
                .from
                .lerp(&active.to, active.animator.fraction_complete())
        })
    }

    fn take_finished(&mut self) -> Option<AnimatingPosition> {
        let (generation, position) = self.finished.borrow_mut().pop_front()?;
        if self
            .active
            .as_ref()
            .is_some_and(|active| active.generation == generation)
        {
            self.active = None;
        }
        Some(position)
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
