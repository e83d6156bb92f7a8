use serde::{Deserialize, Serialize};

use crate::core::geometry::{
    clamp_fade_fraction, finite_or, DEFAULT_FONT_SIZE, DEFAULT_LOOP_GAP,
};
use crate::core::ramp::DEFAULT_SPEED_LERP_FACTOR;
use crate::core::scroll::{ScrollClock, DEFAULT_LOOP_REDUCTION_CYCLES};
use crate::core::time::{
    clamp_max_frame_dt, clamp_max_step, FixedStep, DEFAULT_MAX_FRAME_DT, DEFAULT_MAX_STEP,
};

/// Engine configuration, usually loaded from the host's settings JSON.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrompterConfig {
    /// Base scroll speed in layout units per second (default: 40).
    pub speed_points_per_second: f32,
    /// Script font size (default: 20).
    pub font_size: f32,
    /// Fraction of the viewport faded at each edge, clamped to [0, 0.49] (default: 0.2).
    pub fade_fraction: f32,
    /// Gap between tiled copies of the script (default: 24).
    pub loop_gap: f32,
    /// Distance rewound by a jump-back (default: 120).
    pub jump_back_distance_points: f32,
    /// Speed multiplier approach rate per second (default: 8).
    pub speed_lerp_factor: f32,
    /// Largest integration sub-step in seconds, clamped to [1/1000, 1/120] (default: 1/120).
    pub max_step: f32,
    /// Largest frame delta integrated in one tick, clamped to [0, 0.25] (default: 0.25).
    pub max_frame_dt: f32,
    /// Fold the phase back into one cycle after this many cycles (default: 8).
    pub loop_reduction_cycles: f32,
}

impl Default for PrompterConfig {
    fn default() -> Self {
        Self {
            speed_points_per_second: 40.0,
            font_size: DEFAULT_FONT_SIZE,
            fade_fraction: 0.2,
            loop_gap: DEFAULT_LOOP_GAP,
            jump_back_distance_points: 120.0,
            speed_lerp_factor: DEFAULT_SPEED_LERP_FACTOR,
            max_step: DEFAULT_MAX_STEP,
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
            loop_reduction_cycles: DEFAULT_LOOP_REDUCTION_CYCLES,
        }
    }
}

impl PrompterConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Clamp every field into range. Non-finite values take the default.
    /// Negative speed is kept (reverse scroll).
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            speed_points_per_second: finite_or(self.speed_points_per_second, 0.0),
            font_size: finite_or(self.font_size, d.font_size).max(0.0),
            fade_fraction: clamp_fade_fraction(self.fade_fraction),
            loop_gap: finite_or(self.loop_gap, d.loop_gap).max(0.0),
            jump_back_distance_points: finite_or(
                self.jump_back_distance_points,
                d.jump_back_distance_points,
            )
            .max(0.0),
            speed_lerp_factor: positive_or(self.speed_lerp_factor, d.speed_lerp_factor),
            max_step: clamp_max_step(self.max_step),
            max_frame_dt: clamp_max_frame_dt(self.max_frame_dt),
            loop_reduction_cycles: finite_or(self.loop_reduction_cycles, d.loop_reduction_cycles)
                .max(1.0),
        }
    }

    /// Integration parameters for the scroll clock.
    pub fn clock(&self) -> ScrollClock {
        ScrollClock {
            step: FixedStep::new(self.max_step, self.max_frame_dt),
            speed_lerp_factor: self.speed_lerp_factor,
            loop_reduction_cycles: self.loop_reduction_cycles,
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
