//! Shared animation vocabulary: interpolation and animator lifecycle.

use lightbox_geometry::{Point, Rect};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

impl Lerp for Rect {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Rect::lerp(self, target, fraction)
    }
}

/// Where an animator came to rest when it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatingPosition {
    /// The animation ran backwards to its starting values.
    Start,
    /// The animation reached its end values.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    /// No animation has been configured or the last one finished.
    Inactive,
    /// Configured and paused; progress can be scrubbed.
    Active,
    /// Driven by the frame clock toward its end or start.
    Running,
}
