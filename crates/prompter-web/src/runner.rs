use glam::Vec2;
use prompter_engine::{Prompter, PrompterConfig, RenderFrame, FRAME_FLOATS};

/// Drives a [`Prompter`] from a browser host.
///
/// The host's animation callback hands over `performance.now()` milliseconds;
/// UI handlers write controls between frames. `lib.rs` keeps one runner in a
/// `thread_local!` and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export the engine directly.
pub struct PrompterRunner {
    prompter: Prompter,
    /// Frames run since init.
    frames: u64,
}

impl PrompterRunner {
    pub fn new(config: PrompterConfig) -> Self {
        Self {
            prompter: Prompter::new(config),
            frames: 0,
        }
    }

    /// Replace the config from a JSON string. On a parse error the previous
    /// config stays in effect.
    pub fn load_config(&mut self, json: &str) -> bool {
        match PrompterConfig::from_json(json) {
            Ok(config) => {
                self.prompter.set_config(config);
                true
            }
            Err(e) => {
                log::warn!("prompter config rejected: {}", e);
                false
            }
        }
    }

    pub fn config_json(&self) -> String {
        match self.prompter.config().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("prompter config not serializable: {}", e);
                String::new()
            }
        }
    }

    // ---- Controls ----

    pub fn set_text(&mut self, text: &str) {
        self.prompter.set_text(text);
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.prompter.set_font_size(font_size);
    }

    pub fn set_speed(&mut self, points_per_second: f32) {
        self.prompter.set_speed(points_per_second);
    }

    pub fn set_fade_fraction(&mut self, fraction: f32) {
        self.prompter.set_fade_fraction(fraction);
    }

    pub fn set_running(&mut self, running: bool) {
        self.prompter.set_running(running);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.prompter.set_hovering(hovering);
    }

    pub fn set_session_started(&mut self, started: bool) {
        self.prompter.set_session_started(started);
    }

    pub fn reset(&mut self) {
        self.prompter.request_reset();
    }

    /// Jump back by `distance`, or by the configured distance when it is negative or NaN.
    pub fn jump_back(&mut self, distance: f32) {
        if distance.is_finite() && distance >= 0.0 {
            self.prompter.request_jump_back_by(distance);
        } else {
            let configured = self.prompter.config().jump_back_distance_points;
            self.prompter.request_jump_back_by(configured);
        }
    }

    // ---- Layout ----

    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.prompter.set_viewport_size(Vec2::new(width, height));
    }

    pub fn report_content_height(&mut self, height: f32) {
        self.prompter.report_content_height(height);
    }

    // ---- Frame ----

    /// Run one frame. `now_ms` is the animation callback timestamp in milliseconds.
    pub fn tick(&mut self, now_ms: f64) {
        self.prompter.advance(now_ms / 1000.0);
        self.frames += 1;
    }

    pub fn frame(&self) -> &RenderFrame {
        self.prompter.frame()
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.prompter.frame().as_ptr()
    }

    pub fn frame_floats(&self) -> u32 {
        FRAME_FLOATS as u32
    }

    pub fn offset_y(&self) -> f32 {
        self.prompter.frame().offset_y
    }

    pub fn copy_count(&self) -> u32 {
        self.prompter.frame().copy_count as u32
    }

    pub fn placeholder_message(&self) -> String {
        self.prompter.placeholder_message().unwrap_or_default().to_string()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn prompter(&self) -> &Prompter {
        &self.prompter
    }
}

impl Default for PrompterRunner {
    fn default() -> Self {
        Self::new(PrompterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompter_engine::{DisplayMode, EMPTY_STATE_MESSAGE};

    #[test]
    fn ticks_in_milliseconds() {
        let mut r = PrompterRunner::default();
        r.set_viewport_size(320.0, 480.0);
        r.report_content_height(900.0);
        r.set_text("Good evening.");
        r.set_session_started(true);
        r.set_running(true);
        r.tick(1000.0);
        let start = r.prompter().state().phase;

        // 100 ms at the default 40 units/s
        r.tick(1100.0);
        assert!((r.prompter().state().phase - start - 4.0).abs() < 1e-3);
        assert_eq!(r.copy_count(), 3);
        assert_eq!(r.frames(), 2);
    }

    #[test]
    fn bad_config_keeps_previous() {
        let mut r = PrompterRunner::default();
        assert!(r.load_config(r#"{ "speed_points_per_second": 75 }"#));
        assert!(!r.load_config("not json"));
        assert_eq!(r.prompter().config().speed_points_per_second, 75.0);
        assert!(r.config_json().contains("75"));
    }

    #[test]
    fn negative_jump_uses_configured_distance() {
        let mut r = PrompterRunner::default();
        r.jump_back(-1.0);
        assert_eq!(r.prompter().controls().jump_back_distance_points, 120.0);
        r.jump_back(30.0);
        assert_eq!(r.prompter().controls().jump_back_distance_points, 30.0);
        r.jump_back(f32::NAN);
        assert_eq!(r.prompter().controls().jump_back_distance_points, 120.0);
    }

    #[test]
    fn empty_runner_shows_placeholder() {
        let mut r = PrompterRunner::default();
        r.tick(16.0);
        assert_eq!(r.prompter().display_mode(), DisplayMode::Empty);
        assert_eq!(r.placeholder_message(), EMPTY_STATE_MESSAGE);
        assert_eq!(r.copy_count(), 0);
        assert_eq!(r.frame_floats(), 30);
    }
}
