//! Spring physics for resumable animations.
//!
//! Springs here always travel a normalized segment from 0 to 1. The solver
//! uses the closed-form solution of the damped harmonic oscillator
//!
//! ```text
//! x''(t) + 2ζω₀x'(t) + ω₀²(x(t) - 1) = 0,   x(0) = 0,   x'(0) = v₀
//! ```
//!
//! so evaluating a frame never depends on the previous frame's timestep.

use lightbox_geometry::Vector;

/// Natural frequency multiplier: a spring with `ω₀ = SETTLE_FACTOR / T`
/// settles to within ~1% of its travel around `T`.
pub const SETTLE_FACTOR: f32 = 6.6;

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant (unit mass). Higher values = faster animation.
    pub stiffness: f32,
    /// Normalized velocity below which the spring may rest.
    pub velocity_threshold: f32,
    /// Normalized distance from the target below which the spring may rest.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Spring whose stiffness is chosen so it settles in roughly `duration_secs`.
    pub fn from_duration(duration_secs: f32, damping_ratio: f32) -> Self {
        let duration = duration_secs.max(0.01);
        let omega = SETTLE_FACTOR / duration;
        Self {
            damping_ratio,
            stiffness: omega * omega,
            ..Self::default()
        }
    }

    pub fn natural_frequency(&self) -> f32 {
        self.stiffness.max(0.0).sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }
}

/// Timing used to resume an animation: damping plus a 2D initial velocity.
///
/// The velocity is expressed in animation progress per second; the animator
/// projects it onto its own axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTimingParameters {
    pub damping_ratio: f32,
    pub initial_velocity: Vector,
}

impl SpringTimingParameters {
    pub fn new(damping_ratio: f32, initial_velocity: Vector) -> Self {
        Self {
            damping_ratio,
            initial_velocity,
        }
    }

    pub fn at_rest(damping_ratio: f32) -> Self {
        Self::new(damping_ratio, Vector::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Damping {
    Under { omega_d: f64, b: f64 },
    Critical { c: f64 },
    Over { r1: f64, r2: f64, c1: f64, c2: f64 },
}

/// Closed-form spring trajectory from 0 to 1 with an initial velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSolver {
    spec: SpringSpec,
    omega: f64,
    zeta: f64,
    initial_velocity: f64,
    damping: Damping,
}

impl SpringSolver {
    /// `initial_velocity` is in normalized units per second (1.0 = the whole
    /// segment per second).
    pub fn new(spec: SpringSpec, initial_velocity: f32) -> Self {
        let omega = spec.natural_frequency() as f64;
        let zeta = spec.damping_ratio.max(0.0) as f64;
        let v0 = if initial_velocity.is_finite() {
            initial_velocity as f64
        } else {
            0.0
        };

        let damping = if (zeta - 1.0).abs() < 1e-3 {
            Damping::Critical { c: omega - v0 }
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            Damping::Under {
                omega_d,
                b: (zeta * omega - v0) / omega_d,
            }
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c1 = (v0 + r2) / (r1 - r2);
            Damping::Over {
                r1,
                r2,
                c1,
                c2: -1.0 - c1,
            }
        };

        Self {
            spec,
            omega,
            zeta,
            initial_velocity: v0,
            damping,
        }
    }

    pub fn initial_velocity(&self) -> f32 {
        self.initial_velocity as f32
    }

    /// Normalized position at `t` seconds. May exceed 1.0 when under-damped.
    pub fn position(&self, t: f32) -> f32 {
        let t = t.max(0.0) as f64;
        let value = match self.damping {
            Damping::Under { omega_d, b } => {
                let decay = (-self.zeta * self.omega * t).exp();
                1.0 - decay * ((omega_d * t).cos() + b * (omega_d * t).sin())
            }
            Damping::Critical { c } => {
                let decay = (-self.omega * t).exp();
                1.0 - decay * (1.0 + c * t)
            }
            Damping::Over { r1, r2, c1, c2 } => 1.0 + c1 * (r1 * t).exp() + c2 * (r2 * t).exp(),
        };
        value as f32
    }

    /// Normalized velocity at `t` seconds.
    pub fn velocity(&self, t: f32) -> f32 {
        let t = t.max(0.0) as f64;
        let value = match self.damping {
            Damping::Under { omega_d, b } => {
                let a = self.zeta * self.omega;
                let decay = (-a * t).exp();
                let (sin, cos) = (omega_d * t).sin_cos();
                decay * (a * (cos + b * sin) - omega_d * (b * cos - sin))
            }
            Damping::Critical { c } => {
                let decay = (-self.omega * t).exp();
                decay * (self.omega * (1.0 + c * t) - c)
            }
            Damping::Over { r1, r2, c1, c2 } => c1 * r1 * (r1 * t).exp() + c2 * r2 * (r2 * t).exp(),
        };
        value as f32
    }

    /// Whether the spring is close enough to the target and slow enough to stop.
    pub fn is_at_rest(&self, t: f32) -> bool {
        (self.position(t) - 1.0).abs() < self.spec.position_threshold
            && self.velocity(t).abs() < self.spec.velocity_threshold
    }
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
