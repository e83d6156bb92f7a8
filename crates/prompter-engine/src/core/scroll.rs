//! Scroll clock: owns the scroll phase and integrates it once per frame.
//!
//! Usage:
//!   let clock = ScrollClock::default();
//!   let mut state = ScrollState::new(&geometry, &motion);
//!   clock.tick(&mut state, now, &motion, &geometry);
//!   let y = state.effective_offset_y(motion.has_content, geometry.cycle_length());

use super::geometry::GeometryInputs;
use super::ramp::{SpeedRamp, DEFAULT_SPEED_LERP_FACTOR};
use super::time::FixedStep;

/// Phase is folded back into one cycle once it passes this many cycles.
pub const DEFAULT_LOOP_REDUCTION_CYCLES: f32 = 8.0;

/// Per-frame run inputs read by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    /// Text is non-empty after trimming whitespace.
    pub has_content: bool,
    pub is_running: bool,
    pub is_hovering: bool,
    /// Base scroll speed. Negative values scroll in reverse.
    pub speed_points_per_second: f32,
}

impl Motion {
    pub fn should_run(&self) -> bool {
        self.is_running && !self.is_hovering
    }

    /// 1 while running and not hovered, else 0.
    pub fn desired_speed_multiplier(&self) -> f32 {
        if self.should_run() {
            1.0
        } else {
            0.0
        }
    }
}

/// Mutable scroll state for one display session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Scroll distance since the last reset. Negative before the start anchor.
    pub phase: f32,
    /// Timestamp (seconds) of the previous integration. `None` right after a reset.
    pub last_tick_time: Option<f64>,
    pub speed: SpeedRamp,
}

impl ScrollState {
    /// Fresh state, already reset to the top of the script.
    pub fn new(geometry: &GeometryInputs, motion: &Motion) -> Self {
        let mut state = Self {
            phase: 0.0,
            last_tick_time: None,
            speed: SpeedRamp::settled(1.0),
        };
        state.reset(geometry, motion);
        state
    }

    /// Jump to the top of the script and drop any momentum.
    ///
    /// The multiplier is seeded with the desired value so a running session
    /// does not stutter on its first post-reset frame.
    pub fn reset(&mut self, geometry: &GeometryInputs, motion: &Motion) {
        self.phase = geometry.top_of_script_phase_floor();
        self.last_tick_time = None;
        self.speed = SpeedRamp::settled(motion.desired_speed_multiplier());
    }

    /// Rewind by `distance`, never past the top of the script.
    pub fn jump_back(&mut self, distance: f32, geometry: &GeometryInputs) {
        let distance = if distance.is_finite() { distance.max(0.0) } else { 0.0 };
        self.phase = (self.phase - distance).max(geometry.top_of_script_phase_floor());
    }

    /// Re-snap to the floor after a geometry change, but only when already near the top.
    /// Returns whether the phase moved.
    pub fn normalize_top_anchor(&mut self, geometry: &GeometryInputs) -> bool {
        if self.phase > geometry.top_normalization_threshold() {
            return false;
        }
        let floor = geometry.top_of_script_phase_floor();
        let moved = self.phase != floor;
        self.phase = floor;
        moved
    }

    /// Forget elapsed time without touching phase or speed.
    pub fn mark_time(&mut self, now: f64) {
        self.last_tick_time = Some(now);
    }

    /// Vertical offset applied to the tiled content. Zero without content.
    pub fn effective_offset_y(&self, has_content: bool, cycle_length: f32) -> f32 {
        if !has_content {
            return 0.0;
        }
        -(self.phase % cycle_length)
    }
}

/// Integration parameters for the scroll phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollClock {
    pub step: FixedStep,
    pub speed_lerp_factor: f32,
    pub loop_reduction_cycles: f32,
}

impl Default for ScrollClock {
    fn default() -> Self {
        Self {
            step: FixedStep::default(),
            speed_lerp_factor: DEFAULT_SPEED_LERP_FACTOR,
            loop_reduction_cycles: DEFAULT_LOOP_REDUCTION_CYCLES,
        }
    }
}

impl ScrollClock {
    /// Advance the phase to `now` (seconds). Returns the time integrated.
    pub fn tick(
        &self,
        state: &mut ScrollState,
        now: f64,
        motion: &Motion,
        geometry: &GeometryInputs,
    ) -> f32 {
        if !motion.has_content {
            state.last_tick_time = Some(now);
            return 0.0;
        }

        state.speed.target = motion.desired_speed_multiplier();

        let total_dt = self.step.frame_dt(state.last_tick_time, now);
        state.last_tick_time = Some(now);

        let speed = if motion.speed_points_per_second.is_finite() {
            motion.speed_points_per_second
        } else {
            0.0
        };

        for dt in self.step.split(total_dt) {
            state.speed.step(dt, self.speed_lerp_factor);
            state.phase += speed * state.speed.current * dt;
        }

        state.speed.settle_if_stopped(motion.is_running);

        let cycle = geometry.cycle_length();
        if state.phase >= cycle * self.loop_reduction_cycles {
            let before = state.phase;
            state.phase %= cycle;
            log::trace!("phase folded {} -> {} (cycle {})", before, state.phase, cycle);
        }

        total_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> Motion {
        Motion {
            has_content: true,
            is_running: true,
            is_hovering: false,
            speed_points_per_second: 60.0,
        }
    }

    fn geometry() -> GeometryInputs {
        GeometryInputs::new(900.0, 500.0, 20.0, 0.2)
    }

    #[test]
    fn reset_is_idempotent() {
        let g = geometry();
        let m = running();
        let mut state = ScrollState::new(&g, &m);
        state.phase = 1234.5;
        state.last_tick_time = Some(3.0);
        state.speed = SpeedRamp { current: 0.4, target: 0.0 };

        state.reset(&g, &m);
        let once = state;
        state.reset(&g, &m);
        assert_eq!(state, once);
        assert_eq!(state.phase, g.top_of_script_phase_floor());
        assert_eq!(state.last_tick_time, None);
        assert_eq!(state.speed, SpeedRamp::settled(1.0));
    }

    #[test]
    fn first_tick_uses_nominal_step() {
        let g = geometry();
        let m = running();
        let clock = ScrollClock::default();
        let mut state = ScrollState::new(&g, &m);
        let start = state.phase;

        let dt = clock.tick(&mut state, 100.0, &m, &g);
        assert!((dt - 1.0 / 120.0).abs() < 1e-6);
        assert!((state.phase - (start + 60.0 / 120.0)).abs() < 1e-4);
        assert_eq!(state.last_tick_time, Some(100.0));
    }

    #[test]
    fn no_content_only_records_time() {
        let g = geometry();
        let m = Motion { has_content: false, ..running() };
        let clock = ScrollClock::default();
        let mut state = ScrollState::new(&g, &m);
        let before = state.phase;

        clock.tick(&mut state, 1.0, &m, &g);
        clock.tick(&mut state, 2.0, &m, &g);
        assert_eq!(state.phase, before);
        assert_eq!(state.last_tick_time, Some(2.0));
        assert_eq!(state.effective_offset_y(false, g.cycle_length()), 0.0);
    }

    #[test]
    fn phase_is_monotonic_until_fold() {
        let g = geometry();
        let m = Motion { speed_points_per_second: 2000.0, ..running() };
        let clock = ScrollClock::default();
        let mut state = ScrollState::new(&g, &m);
        let cycle = g.cycle_length();

        let mut prev = state.phase;
        let mut folded = false;
        for i in 0..600 {
            clock.tick(&mut state, i as f64 / 60.0, &m, &g);
            if state.phase < prev {
                // Only a fold may move the phase backwards, and it lands inside the first cycle.
                assert!(prev >= cycle * 7.0, "early drop from {}", prev);
                assert!(state.phase >= 0.0 && state.phase < cycle);
                folded = true;
            }
            prev = state.phase;
        }
        assert!(folded, "expected at least one fold");
    }

    #[test]
    fn fold_preserves_offset() {
        let g = geometry();
        let m = Motion { speed_points_per_second: 0.0, ..running() };
        let clock = ScrollClock::default();
        let mut state = ScrollState::new(&g, &m);
        let cycle = g.cycle_length();
        state.phase = cycle * 8.0 + 10.0;
        let offset = state.effective_offset_y(true, cycle);

        clock.tick(&mut state, 0.0, &m, &g);
        assert!((state.phase - 10.0).abs() < 1e-2);
        assert!((state.effective_offset_y(true, cycle) - offset).abs() < 1e-2);
    }

    #[test]
    fn stale_timestamp_does_not_move() {
        let g = geometry();
        let m = running();
        let clock = ScrollClock::default();
        let mut state = ScrollState::new(&g, &m);
        clock.tick(&mut state, 10.0, &m, &g);
        let phase = state.phase;
        let dt = clock.tick(&mut state, 9.0, &m, &g);
        assert_eq!(dt, 0.0);
        assert_eq!(state.phase, phase);
    }

    #[test]
    fn stopping_ramps_down_to_zero() {
        let g = geometry();
        let m = running();
        let clock = ScrollClock::default();
        let mut state = ScrollState::new(&g, &m);
        clock.tick(&mut state, 0.0, &m, &g);

        let stopped = Motion { is_running: false, ..m };
        clock.tick(&mut state, 0.05, &stopped, &g);
        assert!(state.speed.current > 0.0 && state.speed.current < 1.0);

        let mut t = 0.05;
        for _ in 0..200 {
            t += 1.0 / 60.0;
            clock.tick(&mut state, t, &stopped, &g);
        }
        assert_eq!(state.speed.current, 0.0);
        let phase = state.phase;
        clock.tick(&mut state, t + 0.1, &stopped, &g);
        assert_eq!(state.phase, phase);
    }

    #[test]
    fn hover_holds_multiplier_at_zero() {
        let g = geometry();
        let paused = Motion { is_running: false, is_hovering: true, ..running() };
        let clock = ScrollClock::default();
        let mut state = ScrollState::new(&g, &paused);
        assert_eq!(state.speed.current, 0.0);

        let resumed = Motion { is_running: true, ..paused };
        state.mark_time(1.0);
        for i in 1..20 {
            clock.tick(&mut state, 1.0 + i as f64 / 60.0, &resumed, &g);
        }
        assert_eq!(state.speed.target, 0.0);
        assert_eq!(state.speed.current, 0.0);
        assert_eq!(state.phase, g.top_of_script_phase_floor());
    }

    #[test]
    fn negative_speed_scrolls_backwards() {
        let g = geometry();
        let m = Motion { speed_points_per_second: -60.0, ..running() };
        let clock = ScrollClock::default();
        let mut state = ScrollState::new(&g, &m);
        let start = state.phase;
        clock.tick(&mut state, 0.0, &m, &g);
        clock.tick(&mut state, 0.1, &m, &g);
        assert!(state.phase < start);
        assert!(state.effective_offset_y(true, g.cycle_length()).is_finite());
    }

    #[test]
    fn non_finite_speed_is_ignored() {
        let g = geometry();
        let m = Motion { speed_points_per_second: f32::NAN, ..running() };
        let clock = ScrollClock::default();
        let mut state = ScrollState::new(&g, &m);
        clock.tick(&mut state, 0.0, &m, &g);
        assert!(state.phase.is_finite());
    }

    #[test]
    fn jump_back_stops_at_floor() {
        let g = geometry();
        let m = running();
        let mut state = ScrollState::new(&g, &m);
        let floor = g.top_of_script_phase_floor();

        state.phase = 300.0;
        state.jump_back(100.0, &g);
        assert_eq!(state.phase, 200.0);

        state.jump_back(10_000.0, &g);
        assert_eq!(state.phase, floor);

        state.phase = 50.0;
        state.jump_back(-20.0, &g);
        assert_eq!(state.phase, 50.0);

        // Already below the floor (e.g. floor moved after a resize).
        state.phase = floor - 30.0;
        state.jump_back(5.0, &g);
        assert_eq!(state.phase, floor);
    }

    #[test]
    fn normalize_only_near_top() {
        let g = geometry();
        let m = running();
        let mut state = ScrollState::new(&g, &m);

        state.phase = 10.0;
        assert!(state.normalize_top_anchor(&g));
        assert_eq!(state.phase, g.top_of_script_phase_floor());

        state.phase = 400.0;
        assert!(!state.normalize_top_anchor(&g));
        assert_eq!(state.phase, 400.0);
    }

    #[test]
    fn offset_wraps_within_cycle() {
        let g = geometry();
        let m = running();
        let mut state = ScrollState::new(&g, &m);
        state.phase = 524.0 + 100.0;
        assert!((state.effective_offset_y(true, g.cycle_length()) + 100.0).abs() < 1e-3);
        state.phase = -9.0;
        assert!((state.effective_offset_y(true, g.cycle_length()) - 9.0).abs() < 1e-6);
    }
}
