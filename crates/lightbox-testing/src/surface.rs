//! A presentation surface that remembers everything it was shown.

use lightbox::{Keyframe, PresentationSurface};
use lightbox_geometry::Rect;

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frame: Rect,
    blur: f32,
    history: Vec<Keyframe>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn blur(&self) -> f32 {
        self.blur
    }

    /// Every keyframe applied, oldest first.
    pub fn history(&self) -> &[Keyframe] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn set_blur_intensity(&mut self, intensity: f32) {
        self.blur = intensity;
    }

    fn apply(&mut self, keyframe: Keyframe) {
        self.set_frame(keyframe.frame);
        self.set_blur_intensity(keyframe.blur);
        self.history.push(keyframe);
    }
}
