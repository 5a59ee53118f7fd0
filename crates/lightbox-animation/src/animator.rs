//! Interruptible, scrubbable, reversible animator.
//!
//! A [`PropertyAnimator`] tracks a single normalized progress value in
//! `[0, 1]`; callers interpolate whatever properties they animate from it.
//! Progress can be set directly while paused (scrubbing), then handed to a
//! spring that finishes the remaining segment, optionally in reverse.

use std::cell::RefCell;
use std::rc::Rc;

use lightbox_geometry::Vector;
use smallvec::SmallVec;

use crate::animation::{AnimatingPosition, AnimatorState};
use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
use crate::spring::{SpringSolver, SpringSpec, SpringTimingParameters};

/// Remaining distances below this are treated as already travelled.
const MIN_SEGMENT: f32 = 1e-4;

type Completion = Box<dyn FnOnce(AnimatingPosition) + 'static>;

/// One spring-driven run from `from` to `to` in fraction space.
struct SpringRun {
    from: f32,
    to: f32,
    solver: SpringSolver,
    duration_secs: f32,
    start_time_nanos: Option<u64>,
}

impl SpringRun {
    fn position(&self) -> AnimatingPosition {
        if self.to >= 1.0 {
            AnimatingPosition::End
        } else {
            AnimatingPosition::Start
        }
    }
}

struct AnimatorInner {
    clock: FrameClock,
    duration_secs: f32,
    damping_ratio: f32,
    velocity_axis: Vector,
    state: AnimatorState,
    fraction: f32,
    reversed: bool,
    run: Option<SpringRun>,
    registration: Option<FrameCallbackRegistration>,
    completions: SmallVec<[Completion; 2]>,
}

/// Spring animator over a normalized progress value.
///
/// Clones share the same animation.
pub struct PropertyAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

impl PropertyAnimator {
    /// Creates an inactive animator with a nominal duration and damping ratio.
    pub fn new(clock: FrameClock, duration_secs: f32, damping_ratio: f32) -> Self {
        let inner = AnimatorInner {
            clock,
            duration_secs,
            damping_ratio,
            velocity_axis: Vector::new(1.0, 0.0),
            state: AnimatorState::Inactive,
            fraction: 0.0,
            reversed: false,
            run: None,
            registration: None,
            completions: SmallVec::new(),
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Axis 2D velocities are projected on when resuming. Defaults to +x.
    pub fn with_velocity_axis(self, axis: Vector) -> Self {
        self.inner.borrow_mut().velocity_axis = axis;
        self
    }

    pub fn state(&self) -> AnimatorState {
        self.inner.borrow().state
    }

    pub fn is_running(&self) -> bool {
        self.state() == AnimatorState::Running
    }

    pub fn duration_secs(&self) -> f32 {
        self.inner.borrow().duration_secs
    }

    pub fn fraction_complete(&self) -> f32 {
        self.inner.borrow().fraction
    }

    /// Scrubs the animation. Pauses it in place; ignored while running.
    pub fn set_fraction_complete(&self, fraction: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.state == AnimatorState::Running {
            log::trace!("ignoring scrub of a running animator");
            return;
        }
        inner.fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        inner.state = AnimatorState::Active;
    }

    pub fn is_reversed(&self) -> bool {
        self.inner.borrow().reversed
    }

    /// Reversed animators finish at their start values. Takes effect on the
    /// next start or continue.
    pub fn set_reversed(&self, reversed: bool) {
        self.inner.borrow_mut().reversed = reversed;
    }

    /// Registers a callback for when the animator finishes. Callbacks run in
    /// registration order, once.
    pub fn add_completion(&self, completion: impl FnOnce(AnimatingPosition) + 'static) {
        self.inner.borrow_mut().completions.push(Box::new(completion));
    }

    /// Runs from the current fraction with no initial velocity over the
    /// nominal duration.
    pub fn start_animation(&self) {
        let (duration, damping) = {
            let inner = self.inner.borrow();
            (inner.duration_secs, inner.damping_ratio)
        };
        self.run_spring(SpringTimingParameters::at_rest(damping), duration);
    }

    /// Resumes a paused animation over `duration * duration_factor`, seeding
    /// the spring with `timing`'s velocity when given.
    pub fn continue_animation(
        &self,
        timing: Option<SpringTimingParameters>,
        duration_factor: f32,
    ) {
        let (duration, damping) = {
            let inner = self.inner.borrow();
            (inner.duration_secs, inner.damping_ratio)
        };
        let timing = timing.unwrap_or_else(|| SpringTimingParameters::at_rest(damping));
        let factor = if duration_factor.is_finite() && duration_factor > 0.0 {
            duration_factor
        } else {
            1.0
        };
        self.run_spring(timing, duration * factor);
    }

    /// Halts without finishing. Pending completions are dropped.
    pub fn stop_animation(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.run = None;
        inner.completions.clear();
        inner.state = AnimatorState::Inactive;
    }

    fn run_spring(&self, timing: SpringTimingParameters, duration_secs: f32) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.state == AnimatorState::Running {
                log::debug!("animator already running");
                return;
            }

            let from = inner.fraction;
            let to = if inner.reversed { 0.0 } else { 1.0 };
            let segment = to - from;
            // Velocity is in remaining-segment units: a magnitude of 1 covers
            // the rest of the run in one second.
            let projected = timing.initial_velocity.dot(inner.velocity_axis);
            let normalized = if segment.abs() > MIN_SEGMENT {
                projected * segment.signum()
            } else {
                0.0
            };
            let spec = SpringSpec::from_duration(duration_secs, timing.damping_ratio);

            log::debug!(
                "animator running {from:.4} -> {to} over {duration_secs:.3}s, v0 {normalized:.3}"
            );

            inner.run = Some(SpringRun {
                from,
                to,
                solver: SpringSolver::new(spec, normalized),
                duration_secs: duration_secs.max(0.0),
                start_time_nanos: None,
            });
            inner.state = AnimatorState::Running;
        }
        Self::schedule_frame(&self.inner);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatorInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatorInner>>, frame_time_nanos: u64) {
        let mut finished = None;
        {
            let mut guard = this.borrow_mut();
            let inner = &mut *guard;
            inner.registration = None;

            let Some(run) = inner.run.as_mut() else {
                return;
            };

            let start_time = *run.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(start_time) as f32 / 1_000_000_000.0;
            let done = elapsed >= run.duration_secs || (elapsed > 0.0 && run.solver.is_at_rest(elapsed));

            let fraction = if done {
                run.to
            } else {
                run.from + (run.to - run.from) * run.solver.position(elapsed)
            };
            let position = run.position();
            inner.fraction = fraction;

            if done {
                inner.run = None;
                inner.state = AnimatorState::Inactive;
                finished = Some((position, std::mem::take(&mut inner.completions)));
            }
        }

        match finished {
            Some((position, completions)) => {
                log::debug!("animator finished at {position:?}");
                for completion in completions {
                    completion(position);
                }
            }
            None => Self::schedule_frame(this),
        }
    }
}

impl Clone for PropertyAnimator {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Drop for AnimatorInner {
    fn drop(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
