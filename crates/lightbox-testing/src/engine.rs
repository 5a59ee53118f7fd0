//! A hand-driven [`TransitionEngine`] for controller tests.
//!
//! Nothing animates on its own: tests inspect the recorded commands and
//! decide when (and where) the animation finishes.

use std::collections::VecDeque;

use lightbox::{AnimatingPosition, Keyframe, Lerp, SpringTimingParameters, TransitionEngine, TransitionRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Create(TransitionRequest),
    SetFraction(f32),
    Continue {
        reversed: bool,
        timing: SpringTimingParameters,
        duration_factor: f32,
    },
    Start,
}

#[derive(Debug, Default)]
pub struct ManualEngine {
    commands: Vec<EngineCommand>,
    request: Option<TransitionRequest>,
    fraction: f32,
    finished: VecDeque<AnimatingPosition>,
}

impl ManualEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[EngineCommand] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<&EngineCommand> {
        self.commands.last()
    }

    pub fn request(&self) -> Option<&TransitionRequest> {
        self.request.as_ref()
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Finishes the current animation at `position`, as a real engine would
    /// after its last frame.
    pub fn finish(&mut self, position: AnimatingPosition) {
        self.fraction = match position {
            AnimatingPosition::End => 1.0,
            AnimatingPosition::Start => 0.0,
        };
        self.finished.push_back(position);
    }
}

impl TransitionEngine for ManualEngine {
    fn create(&mut self, request: TransitionRequest) {
        self.request = Some(request);
        self.fraction = 0.0;
        self.commands.push(EngineCommand::Create(request));
    }

    fn set_fraction_complete(&mut self, fraction: f32) {
        self.fraction = fraction;
        self.commands.push(EngineCommand::SetFraction(fraction));
    }

    fn continue_animation(&mut self, reversed: bool, timing: SpringTimingParameters, duration_factor: f32) {
        self.commands.push(EngineCommand::Continue {
            reversed,
            timing,
            duration_factor,
        });
    }

    fn start_animation(&mut self) {
        self.commands.push(EngineCommand::Start);
    }

    fn current_keyframe(&self) -> Option<Keyframe> {
        self.request
            .map(|request| request.from.lerp(&request.to, self.fraction))
    }

    fn take_finished(&mut self) -> Option<AnimatingPosition> {
        let position = self.finished.pop_front()?;
        self.request = None;
        Some(position)
    }
}
