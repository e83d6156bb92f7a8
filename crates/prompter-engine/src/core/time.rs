/// Nominal integration step: 1/120 s.
pub const DEFAULT_MAX_STEP: f32 = 1.0 / 120.0;
/// Largest frame delta ever integrated. Longer gaps (backgrounding, stalls) are capped.
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.25;
/// Smallest accepted sub-step. Keeps the per-frame step count bounded.
pub const MIN_STEP: f32 = 1.0 / 1000.0;

// Leftover time below this is float noise from repeated subtraction.
const STEP_EPSILON: f32 = 1e-6;

/// Fixed sub-stepping for variable frame times.
/// Keeps the speed filter stable regardless of the host's refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    /// Largest sub-step in seconds.
    max_step: f32,
    /// Cap on the total time integrated per frame.
    max_frame_dt: f32,
}

impl FixedStep {
    /// Out-of-range parameters are clamped with [`clamp_max_step`] and
    /// [`clamp_max_frame_dt`].
    pub fn new(max_step: f32, max_frame_dt: f32) -> Self {
        Self {
            max_step: clamp_max_step(max_step),
            max_frame_dt: clamp_max_frame_dt(max_frame_dt),
        }
    }

    /// Elapsed time to integrate this frame.
    ///
    /// Without a previous tick this is one nominal step. Otherwise the delta is
    /// clamped to `[0, max_frame_dt]`, so a timestamp older than the previous
    /// one integrates nothing.
    pub fn frame_dt(&self, last: Option<f64>, now: f64) -> f32 {
        match last {
            Some(prev) => {
                let dt = (now - prev) as f32;
                if dt.is_finite() {
                    dt.clamp(0.0, self.max_frame_dt)
                } else {
                    0.0
                }
            }
            None => self.max_step,
        }
    }

    /// Split `total` seconds into steps of at most `max_step`; the last may be shorter.
    /// `total` is capped at `max_frame_dt`.
    ///
    /// A leftover of 1 µs or less is float noise from the repeated subtraction
    /// and is not integrated.
    pub fn split(&self, total: f32) -> Substeps {
        Substeps {
            remaining: total.max(0.0).min(self.max_frame_dt),
            max_step: self.max_step,
        }
    }

    /// The maximum sub-step.
    pub fn max_step(&self) -> f32 {
        self.max_step
    }

    pub fn max_frame_dt(&self) -> f32 {
        self.max_frame_dt
    }
}

/// Sub-step clamped to `[MIN_STEP, DEFAULT_MAX_STEP]`. Non-positive or
/// non-finite values take the default.
pub fn clamp_max_step(max_step: f32) -> f32 {
    if max_step.is_finite() && max_step > 0.0 {
        max_step.clamp(MIN_STEP, DEFAULT_MAX_STEP)
    } else {
        DEFAULT_MAX_STEP
    }
}

/// Frame delta cap clamped to `[0, DEFAULT_MAX_FRAME_DT]`. Non-finite values take the default.
pub fn clamp_max_frame_dt(max_frame_dt: f32) -> f32 {
    if max_frame_dt.is_finite() {
        max_frame_dt.clamp(0.0, DEFAULT_MAX_FRAME_DT)
    } else {
        DEFAULT_MAX_FRAME_DT
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STEP, DEFAULT_MAX_FRAME_DT)
    }
}

/// Iterator over sub-step durations produced by [`FixedStep::split`].
#[derive(Debug, Clone)]
pub struct Substeps {
    remaining: f32,
    max_step: f32,
}

impl Iterator for Substeps {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining <= STEP_EPSILON {
            return None;
        }
        let step = self.remaining.min(self.max_step);
        self.remaining -= step;
        Some(step)
    }
}
