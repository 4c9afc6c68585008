//! Damped spring physics
//!
//! A point mass on a damped spring, integrated with RK4 over frame deltas.
//! Configured either directly (stiffness/damping/mass) or through the
//! tension/friction parameterization mobile animation APIs expose.

use serde::{Deserialize, Serialize};

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Spring constant k.
    pub stiffness: f32,
    /// Damping coefficient c.
    pub damping: f32,
    /// Mass m of the animated point.
    pub mass: f32,
    /// Displacement below which the spring may come to rest.
    pub rest_displacement: f32,
    /// Speed (units per second) below which the spring may come to rest.
    pub rest_speed: f32,
}

impl SpringConfig {
    /// Build a config from the tension/friction pair used by mobile
    /// animation APIs (stiffness = (tension − 30) × 3.62 + 194, damping =
    /// (friction − 8) × 3 + 25, unit mass).
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_tension_friction(40.0, 7.0)
    }
}

/// A spring animating one scalar toward a target.
///
/// Once both rest thresholds are met the value snaps to the target and the
/// spring reports settled; further ticks are no-ops.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    target: f32,
    value: f32,
    velocity: f32,
    settled: bool,
}

impl Spring {
    /// Create a spring at `from`, at rest, pulling toward `target`.
    pub fn new(from: f32, target: f32, config: SpringConfig) -> Self {
        let settled = (target - from).abs() < config.rest_displacement;
        Self {
            config,
            target,
            value: if settled { target } else { from },
            velocity: 0.0,
            settled,
        }
    }

    /// Advance by a frame delta in milliseconds and return the new value.
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        if self.settled || dt_ms <= 0.0 {
            return self.value;
        }

        // Integrate in chunks; RK4 drifts once the step nears the spring's
        // oscillation period, and frame deltas can spike.
        let mut remaining = dt_ms / 1000.0;
        while remaining > 0.0 && !self.settled {
            let h = remaining.min(0.032);
            self.step(h);
            remaining -= h;

            if self.velocity.abs() < self.config.rest_speed
                && (self.target - self.value).abs() < self.config.rest_displacement
            {
                self.value = self.target;
                self.velocity = 0.0;
                self.settled = true;
            }
        }

        self.value
    }

    /// One RK4 step of `h` seconds.
    fn step(&mut self, h: f32) {
        let accel = |x: f32, v: f32| -> f32 {
            let mass = self.config.mass.max(1e-4);
            (-self.config.stiffness * (x - self.target) - self.config.damping * v) / mass
        };

        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = accel(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = accel(x + 0.5 * h * k1x, v + 0.5 * h * k1v);

        let k3x = v + 0.5 * h * k2v;
        let k3v = accel(x + 0.5 * h * k2x, v + 0.5 * h * k2v);

        let k4x = v + h * k3v;
        let k4v = accel(x + h * k3x, v + h * k3v);

        self.value = x + (h / 6.0) * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + (h / 6.0) * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }

    /// Current position.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// The value the spring is pulling toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the spring has come to rest at its target.
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}
