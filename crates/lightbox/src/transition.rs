//! The in-flight transition record.

use lightbox_animation::AnimatingPosition;

use crate::layout::RenderState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    /// Following a pan; progress is set directly.
    Interactive,
    /// Released or programmatic; waiting for the engine to finish.
    Completing,
}

/// A single transition between the two render states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    origin: RenderState,
    target: RenderState,
    progress: f32,
    reversed: bool,
    phase: TransitionPhase,
}

impl Transition {
    pub(crate) fn interactive(origin: RenderState) -> Self {
        Self {
            origin,
            target: origin.opposite(),
            progress: 0.0,
            reversed: false,
            phase: TransitionPhase::Interactive,
        }
    }

    pub(crate) fn programmatic(origin: RenderState, target: RenderState) -> Self {
        Self {
            origin,
            target,
            progress: 0.0,
            reversed: false,
            phase: TransitionPhase::Completing,
        }
    }

    pub fn origin(&self) -> RenderState {
        self.origin
    }

    pub fn target(&self) -> RenderState {
        self.target
    }

    /// Last scrubbed progress in `[0, 1]`, where 1 is the target.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// True once a release decided to return to the origin.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == TransitionPhase::Interactive
    }

    /// State the content lands in when the engine finishes at `position`.
    pub fn resolve(&self, position: AnimatingPosition) -> RenderState {
        match position {
            AnimatingPosition::End => self.target,
            AnimatingPosition::Start => self.origin,
        }
    }

    pub(crate) fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    pub(crate) fn release(&mut self, reversed: bool) {
        self.reversed = reversed;
        self.phase = TransitionPhase::Completing;
    }
}

/// Holds at most one transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionSlot {
    #[default]
    Empty,
    Active(Transition),
}

impl TransitionSlot {
    pub fn is_active(&self) -> bool {
        matches!(self, TransitionSlot::Active(_))
    }

    pub fn transition(&self) -> Option<&Transition> {
        match self {
            TransitionSlot::Active(transition) => Some(transition),
            TransitionSlot::Empty => None,
        }
    }

    pub(crate) fn transition_mut(&mut self) -> Option<&mut Transition> {
        match self {
            TransitionSlot::Active(transition) => Some(transition),
            TransitionSlot::Empty => None,
        }
    }

    pub(crate) fn take(&mut self) -> Option<Transition> {
        match std::mem::take(self) {
            TransitionSlot::Active(transition) => Some(transition),
            TransitionSlot::Empty => None,
        }
    }
}
