//! Render states and the two keyframes the content moves between.

use lightbox_animation::Lerp;
use lightbox_geometry::Rect;

use crate::config::{ConfigError, TransitionConfig};

/// Which end state the content is settled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// Small thumbnail pinned to the bottom-right corner, no blur.
    #[default]
    Collapsed,
    /// Content fills the container, blur fully on.
    Expanded,
}

impl RenderState {
    pub fn opposite(self) -> Self {
        match self {
            RenderState::Collapsed => RenderState::Expanded,
            RenderState::Expanded => RenderState::Collapsed,
        }
    }
}

/// Presentation values for one moment of the transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Keyframe {
    pub frame: Rect,
    pub blur: f32,
}

impl Keyframe {
    pub fn new(frame: Rect, blur: f32) -> Self {
        Self { frame, blur }
    }
}

impl Lerp for Keyframe {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            frame: self.frame.lerp(&target.frame, fraction),
            // The spring overshoots; blur has no meaning outside 0..=1.
            blur: self.blur.lerp(&target.blur, fraction).clamp(0.0, 1.0),
        }
    }
}

/// Frames derived from the container bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionLayout {
    thumbnail: Rect,
    full: Rect,
    blur_intensity: f32,
}

impl TransitionLayout {
    pub fn new(container: Rect, config: &TransitionConfig) -> Result<Self, ConfigError> {
        if container.is_empty() || !container.width.is_finite() || !container.height.is_finite() {
            return Err(ConfigError::EmptyContainer {
                width: container.width,
                height: container.height,
            });
        }
        // Scrub progress divides by the center y.
        let center_y = container.center().y;
        if !center_y.is_finite() || center_y <= 0.0 {
            return Err(ConfigError::CenterNotPositive { center_y });
        }
        Ok(Self {
            thumbnail: thumbnail_rect(container, config.thumbnail_width, config.thumbnail_aspect_ratio),
            full: container,
            blur_intensity: config.blur_intensity,
        })
    }

    pub fn thumbnail_rect(&self) -> Rect {
        self.thumbnail
    }

    pub fn full_rect(&self) -> Rect {
        self.full
    }

    pub fn frame(&self, state: RenderState) -> Rect {
        match state {
            RenderState::Collapsed => self.thumbnail,
            RenderState::Expanded => self.full,
        }
    }

    pub fn keyframe(&self, state: RenderState) -> Keyframe {
        let blur = match state {
            RenderState::Collapsed => 0.0,
            RenderState::Expanded => self.blur_intensity,
        };
        Keyframe::new(self.frame(state), blur)
    }
}

/// Thumbnail of `width` and `width * aspect_ratio` pinned to the container's
/// bottom-right corner.
pub fn thumbnail_rect(container: Rect, width: f32, aspect_ratio: f32) -> Rect {
    let height = width * aspect_ratio;
    Rect::new(
        container.max_x() - width,
        container.max_y() - height,
        width,
        height,
    )
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
