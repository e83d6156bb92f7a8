//! Host-declared control snapshot and the diff that turns it into events.
//!
//! The host overwrites fields whenever its UI changes. Once per frame the
//! engine compares the new snapshot with the one it applied last frame and
//! emits one [`ControlEvent`] per relevant change.

use serde::{Deserialize, Serialize};

use crate::api::types::ControlToken;
use crate::core::geometry::{clamp_fade_fraction, finite_or, DEFAULT_FONT_SIZE};
use crate::core::scroll::Motion;
use super::queue::ControlEvent;

/// Everything the host controls, as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlInputs {
    pub text: String,
    pub font_size: f32,
    pub speed_points_per_second: f32,
    pub is_running: bool,
    pub has_started_session: bool,
    pub reset_token: ControlToken,
    pub jump_back_token: ControlToken,
    pub jump_back_distance_points: f32,
    pub fade_fraction: f32,
    pub is_hovering: bool,
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            speed_points_per_second: 0.0,
            is_running: false,
            has_started_session: false,
            reset_token: ControlToken::default(),
            jump_back_token: ControlToken::default(),
            jump_back_distance_points: 0.0,
            fade_fraction: 0.0,
            is_hovering: false,
        }
    }
}

impl ControlInputs {
    /// True when the text has something besides whitespace.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn motion(&self) -> Motion {
        Motion {
            has_content: self.has_content(),
            is_running: self.is_running,
            is_hovering: self.is_hovering,
            speed_points_per_second: self.speed_points_per_second,
        }
    }

    /// Clamp numeric fields so change detection and geometry never see NaN.
    /// Negative speed is kept: it scrolls in reverse.
    pub fn sanitized(mut self) -> Self {
        self.font_size = finite_or(self.font_size, DEFAULT_FONT_SIZE).max(0.0);
        self.speed_points_per_second = finite_or(self.speed_points_per_second, 0.0);
        self.jump_back_distance_points = finite_or(self.jump_back_distance_points, 0.0).max(0.0);
        self.fade_fraction = clamp_fade_fraction(self.fade_fraction);
        self
    }
}

/// Control snapshot plus the host-measured viewport height.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameInputs {
    pub controls: ControlInputs,
    pub viewport_height: f32,
}

impl FrameInputs {
    pub fn sanitized(self) -> Self {
        Self {
            controls: self.controls.sanitized(),
            viewport_height: finite_or(self.viewport_height, 0.0).max(0.0),
        }
    }

    /// Events needed to move from `self` (applied last frame) to `next`.
    ///
    /// Output follows [`ControlEvent::order`], so a reset in the same frame
    /// always lands before a jump-back.
    pub fn diff(&self, next: &FrameInputs) -> Vec<ControlEvent> {
        let prev_c = &self.controls;
        let next_c = &next.controls;
        let mut events = Vec::new();

        if prev_c.text != next_c.text {
            events.push(ControlEvent::TextChanged);
        }
        if prev_c.reset_token != next_c.reset_token {
            events.push(ControlEvent::Reset);
        }
        if !prev_c.has_started_session && next_c.has_started_session {
            events.push(ControlEvent::SessionStarted);
        }
        if self.viewport_height != next.viewport_height {
            events.push(ControlEvent::ViewportResized);
        }
        if prev_c.font_size != next_c.font_size {
            events.push(ControlEvent::FontResized);
        }
        if prev_c.jump_back_token != next_c.jump_back_token {
            events.push(ControlEvent::JumpBack {
                distance: next_c.jump_back_distance_points,
            });
        }
        if prev_c.is_running != next_c.is_running {
            events.push(ControlEvent::RunningChanged);
        }
        if prev_c.is_hovering != next_c.is_hovering {
            events.push(ControlEvent::HoveringChanged);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_not_content() {
        let mut c = ControlInputs::default();
        assert!(!c.has_content());
        c.text = "  \n\t ".into();
        assert!(!c.has_content());
        c.text = " hello ".into();
        assert!(c.has_content());
    }

    #[test]
    fn identical_snapshots_produce_nothing() {
        let a = FrameInputs::default();
        assert!(a.diff(&a.clone()).is_empty());
    }

    #[test]
    fn reset_comes_before_jump_back() {
        let prev = FrameInputs::default();
        let mut next = prev.clone();
        next.controls.jump_back_token = next.controls.jump_back_token.next();
        next.controls.jump_back_distance_points = 50.0;
        next.controls.reset_token = next.controls.reset_token.next();
        next.controls.is_running = true;

        let events = prev.diff(&next);
        assert_eq!(
            events,
            vec![
                ControlEvent::Reset,
                ControlEvent::JumpBack { distance: 50.0 },
                ControlEvent::RunningChanged,
            ]
        );
    }

    #[test]
    fn session_start_is_edge_triggered() {
        let prev = FrameInputs::default();
        let mut next = prev.clone();
        next.controls.has_started_session = true;
        assert_eq!(prev.diff(&next), vec![ControlEvent::SessionStarted]);
        // Stopping a session is not a reset.
        assert!(next.diff(&prev).is_empty());
    }

    #[test]
    fn geometry_changes_are_reported() {
        let prev = FrameInputs::default();
        let mut next = prev.clone();
        next.viewport_height = 300.0;
        next.controls.font_size = 28.0;
        assert_eq!(
            prev.diff(&next),
            vec![ControlEvent::ViewportResized, ControlEvent::FontResized]
        );
    }

    #[test]
    fn sanitize_clamps_degenerate_values() {
        let c = ControlInputs {
            font_size: f32::NAN,
            speed_points_per_second: f32::INFINITY,
            jump_back_distance_points: -4.0,
            fade_fraction: 3.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(c.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(c.speed_points_per_second, 0.0);
        assert_eq!(c.jump_back_distance_points, 0.0);
        assert_eq!(c.fade_fraction, 0.49);

        let reverse = ControlInputs {
            speed_points_per_second: -30.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(reverse.speed_points_per_second, -30.0);
    }
}
