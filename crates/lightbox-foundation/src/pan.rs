//! Pan gesture recognition.
//!
//! Turns a single pointer's Down/Move/Up/Cancel stream into pan phases with
//! translation (relative to the press position) and velocity. Positions must
//! be reported in a coordinate space that does not move with the dragged
//! view, otherwise the translation feeds back into itself.

use lightbox_geometry::{Point, Vector};

use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
use crate::types::{PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

/// One step of a pan gesture, as a platform pan primitive would report it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    /// Offset from where the pointer went down.
    pub translation: Point,
    /// Points per second; only meaningful for `Ended`.
    pub velocity: Vector,
}

impl PanEvent {
    pub fn new(phase: PanPhase, translation: Point, velocity: Vector) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }

    pub fn began() -> Self {
        Self::new(PanPhase::Began, Point::ZERO, Vector::ZERO)
    }

    pub fn changed(translation: Point) -> Self {
        Self::new(PanPhase::Changed, translation, Vector::ZERO)
    }

    pub fn ended(translation: Point, velocity: Vector) -> Self {
        Self::new(PanPhase::Ended, translation, velocity)
    }

    pub fn cancelled(translation: Point) -> Self {
        Self::new(PanPhase::Cancelled, translation, Vector::ZERO)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tracking {
    Idle,
    /// Down but still inside the slop.
    Pressed { pointer: PointerId, origin: Point },
    Panning { pointer: PointerId, origin: Point, last: Point },
}

/// Single-pointer pan recognizer with a touch slop.
pub struct PanGestureRecognizer {
    enabled: bool,
    tracking: Tracking,
    velocity: VelocityTracker,
    threshold: f32,
    max_velocity: f32,
}

impl Default for PanGestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PanGestureRecognizer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            tracking: Tracking::Idle,
            velocity: VelocityTracker::new(),
            threshold: DRAG_THRESHOLD,
            max_velocity: MAX_FLING_VELOCITY,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.max(0.0);
        self
    }

    pub fn with_max_velocity(mut self, max_velocity: f32) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.tracking, Tracking::Panning { .. })
    }

    /// Enables or disables recognition. Disabling mid-pan cancels the pan and
    /// returns the `Cancelled` event for it.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<PanEvent> {
        self.enabled = enabled;
        if enabled {
            return None;
        }
        let cancelled = match self.tracking {
            Tracking::Panning { origin, last, .. } => Some(PanEvent::cancelled(translation(origin, last))),
            _ => None,
        };
        self.reset();
        cancelled
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<PanEvent> {
        if !self.enabled {
            return None;
        }

        match (event.kind, self.tracking) {
            (PointerEventKind::Down, Tracking::Idle) => {
                self.velocity.reset();
                self.velocity.add_position(event.time_ms, event.position);
                self.tracking = Tracking::Pressed {
                    pointer: event.id,
                    origin: event.position,
                };
                None
            }
            (PointerEventKind::Move, Tracking::Pressed { pointer, origin }) if pointer == event.id => {
                self.velocity.add_position(event.time_ms, event.position);
                if (event.position - origin).length() <= self.threshold {
                    return None;
                }
                log::trace!("pan began at {:?}", event.position);
                self.tracking = Tracking::Panning {
                    pointer,
                    origin,
                    last: event.position,
                };
                Some(PanEvent::new(
                    PanPhase::Began,
                    translation(origin, event.position),
                    Vector::ZERO,
                ))
            }
            (PointerEventKind::Move, Tracking::Panning { pointer, origin, .. }) if pointer == event.id => {
                self.velocity.add_position(event.time_ms, event.position);
                self.tracking = Tracking::Panning {
                    pointer,
                    origin,
                    last: event.position,
                };
                Some(PanEvent::changed(translation(origin, event.position)))
            }
            (PointerEventKind::Up, Tracking::Pressed { pointer, .. }) if pointer == event.id => {
                // Released inside the slop: a tap, not a pan.
                self.reset();
                None
            }
            (PointerEventKind::Up, Tracking::Panning { pointer, origin, .. }) if pointer == event.id => {
                self.velocity.add_position(event.time_ms, event.position);
                let velocity = self.velocity.calculate_velocity_with_max(self.max_velocity);
                let ended = PanEvent::ended(translation(origin, event.position), velocity);
                log::trace!("pan ended {ended:?}");
                self.reset();
                Some(ended)
            }
            (PointerEventKind::Cancel, Tracking::Panning { pointer, origin, .. }) if pointer == event.id => {
                self.reset();
                Some(PanEvent::cancelled(translation(origin, event.position)))
            }
            (PointerEventKind::Cancel, Tracking::Pressed { pointer, .. }) if pointer == event.id => {
                self.reset();
                None
            }
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.tracking = Tracking::Idle;
        self.velocity.reset();
    }
}

fn translation(origin: Point, position: Point) -> Point {
    let delta = position - origin;
    Point::new(delta.dx, delta.dy)
}

#[cfg(test)]
#[path = "tests/pan_tests.rs"]
mod tests;
