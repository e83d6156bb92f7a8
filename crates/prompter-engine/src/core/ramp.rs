//! Exponentially smoothed run/pause multiplier.
//!
//! The multiplier chases a 0/1 target at `lerp_factor` per second. At the
//! default factor of 8 it covers ~87% of the distance in a quarter second.

/// Default approach rate per second.
pub const DEFAULT_SPEED_LERP_FACTOR: f32 = 8.0;
/// Differences at or below this snap straight to the target.
pub const SNAP_EPSILON: f32 = 0.001;
/// A stopped ramp below this is forced to exactly zero.
pub const STOP_EPSILON: f32 = 0.002;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpeedRamp {
    /// Smoothed multiplier in `[0, 1]`.
    pub current: f32,
    /// Desired multiplier, 0 or 1.
    pub target: f32,
}

impl SpeedRamp {
    /// A ramp already settled at `value`.
    pub fn settled(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Advance the multiplier by one sub-step of `dt` seconds.
    #[inline]
    pub fn step(&mut self, dt: f32, lerp_factor: f32) {
        let diff = self.target - self.current;
        if diff.abs() > SNAP_EPSILON {
            self.current += diff * (lerp_factor * dt).min(1.0);
        } else {
            self.current = self.target;
        }
    }

    /// Kill residual creep once a stopped ramp is close enough to zero.
    pub fn settle_if_stopped(&mut self, is_running: bool) {
        if !is_running && self.current < STOP_EPSILON {
            self.current = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}
