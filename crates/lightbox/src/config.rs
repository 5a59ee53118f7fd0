//! Calibration constants and the configuration built from them.
//!
//! The defaults reproduce the feel the transition was tuned for: a one
//! second, lightly under-damped spring that a release resumes at twice the
//! speed.

use std::fmt;

/// Duration of a full, unassisted transition in seconds.
pub const NOMINAL_DURATION_SECS: f32 = 1.0;

/// Damping ratio for both the scrubbed animation and the release spring.
pub const DAMPING_RATIO: f32 = 0.8;

/// Multiplier applied to the nominal duration when a release resumes the
/// animation.
pub const RELEASE_DURATION_FACTOR: f32 = 0.5;

/// Converts pan velocity (points per second) into animation progress per
/// second. Tied to [`NOMINAL_DURATION_SECS`].
pub const VELOCITY_SCALE: f32 = 100.0;

/// Release speed (points per second) that commits a transition regardless
/// of how far the pan travelled.
pub const VELOCITY_THRESHOLD: f32 = 100.0;

/// A pan commits once it travels `container height / DISTANCE_THRESHOLD_DIVISOR`.
pub const DISTANCE_THRESHOLD_DIVISOR: f32 = 4.0;

/// Scrub progress never reaches 0 or 1 exactly; an animator pinned at either
/// end finishes on its own instead of staying interactive.
pub const MIN_PROGRESS: f32 = 0.0001;
pub const MAX_PROGRESS: f32 = 0.9999;

pub const THUMBNAIL_WIDTH: f32 = 300.0;

/// Height over width of the thumbnail (16:9).
pub const THUMBNAIL_ASPECT_RATIO: f32 = 9.0 / 16.0;

/// Blur intensity while expanded. Collapsed is always 0.
pub const BLUR_INTENSITY: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotPositive { field: &'static str, value: f32 },
    InvalidProgressRange { min: f32, max: f32 },
    BlurOutOfRange { value: f32 },
    EmptyContainer { width: f32, height: f32 },
    CenterNotPositive { center_y: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "{field} must be positive and finite, got {value}")
            }
            ConfigError::InvalidProgressRange { min, max } => {
                write!(f, "progress range must satisfy 0 <= min < max <= 1, got {min}..{max}")
            }
            ConfigError::BlurOutOfRange { value } => {
                write!(f, "blur intensity must be within 0..=1, got {value}")
            }
            ConfigError::EmptyContainer { width, height } => {
                write!(f, "container bounds {width}x{height} are empty")
            }
            ConfigError::CenterNotPositive { center_y } => {
                write!(f, "container center y must be positive, got {center_y}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunables for the transition controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub nominal_duration_secs: f32,
    pub damping_ratio: f32,
    pub release_duration_factor: f32,
    pub velocity_scale: f32,
    pub velocity_threshold: f32,
    pub distance_threshold_divisor: f32,
    pub min_progress: f32,
    pub max_progress: f32,
    pub thumbnail_width: f32,
    pub thumbnail_aspect_ratio: f32,
    pub blur_intensity: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            nominal_duration_secs: NOMINAL_DURATION_SECS,
            damping_ratio: DAMPING_RATIO,
            release_duration_factor: RELEASE_DURATION_FACTOR,
            velocity_scale: VELOCITY_SCALE,
            velocity_threshold: VELOCITY_THRESHOLD,
            distance_threshold_divisor: DISTANCE_THRESHOLD_DIVISOR,
            min_progress: MIN_PROGRESS,
            max_progress: MAX_PROGRESS,
            thumbnail_width: THUMBNAIL_WIDTH,
            thumbnail_aspect_ratio: THUMBNAIL_ASPECT_RATIO,
            blur_intensity: BLUR_INTENSITY,
        }
    }
}

impl TransitionConfig {
    pub fn with_nominal_duration(mut self, secs: f32) -> Self {
        self.nominal_duration_secs = secs;
        self
    }

    pub fn with_damping_ratio(mut self, damping_ratio: f32) -> Self {
        self.damping_ratio = damping_ratio;
        self
    }

    pub fn with_release_duration_factor(mut self, factor: f32) -> Self {
        self.release_duration_factor = factor;
        self
    }

    pub fn with_velocity_scale(mut self, scale: f32) -> Self {
        self.velocity_scale = scale;
        self
    }

    pub fn with_velocity_threshold(mut self, threshold: f32) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    pub fn with_distance_threshold_divisor(mut self, divisor: f32) -> Self {
        self.distance_threshold_divisor = divisor;
        self
    }

    pub fn with_progress_range(mut self, min: f32, max: f32) -> Self {
        self.min_progress = min;
        self.max_progress = max;
        self
    }

    pub fn with_thumbnail(mut self, width: f32, aspect_ratio: f32) -> Self {
        self.thumbnail_width = width;
        self.thumbnail_aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_blur_intensity(mut self, intensity: f32) -> Self {
        self.blur_intensity = intensity;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("nominal_duration_secs", self.nominal_duration_secs),
            ("damping_ratio", self.damping_ratio),
            ("release_duration_factor", self.release_duration_factor),
            ("velocity_scale", self.velocity_scale),
            ("velocity_threshold", self.velocity_threshold),
            ("distance_threshold_divisor", self.distance_threshold_divisor),
            ("thumbnail_width", self.thumbnail_width),
            ("thumbnail_aspect_ratio", self.thumbnail_aspect_ratio),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let (min, max) = (self.min_progress, self.max_progress);
        if !(min >= 0.0 && max <= 1.0 && min < max) {
            return Err(ConfigError::InvalidProgressRange { min, max });
        }

        if !(0.0..=1.0).contains(&self.blur_intensity) {
            return Err(ConfigError::BlurOutOfRange {
                value: self.blur_intensity,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
