//! Shared gesture constants for pointer handling.
//!
//! Values are in logical pixels (points). Platforms with very dense touch
//! screens may want to scale them by their DPI factor.

/// Distance the pointer must travel from the press position before a pan
/// begins. Smaller movements are treated as jitter (or a tap).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum reported release velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
