//! Placeholder state shown instead of the scrolling script.

use crate::api::types::DisplayMode;

pub const EMPTY_STATE_MESSAGE: &str = "No script yet.\nOpen Settings and paste your script to begin.";
pub const READY_STATE_MESSAGE: &str = "Ready to prompt.\nPress Start to begin countdown.";

/// Smallest font used for placeholder messages.
pub const MIN_PLACEHOLDER_FONT_SIZE: f32 = 13.0;
/// Placeholder text opacity.
pub const PLACEHOLDER_OPACITY: f32 = 0.75;

pub fn display_mode(has_content: bool, has_started_session: bool) -> DisplayMode {
    match (has_content, has_started_session) {
        (false, _) => DisplayMode::Empty,
        (true, false) => DisplayMode::Ready,
        (true, true) => DisplayMode::Scrolling,
    }
}

/// Message to center in the viewport, if any.
pub fn placeholder_message(mode: DisplayMode) -> Option<&'static str> {
    match mode {
        DisplayMode::Empty => Some(EMPTY_STATE_MESSAGE),
        DisplayMode::Ready => Some(READY_STATE_MESSAGE),
        DisplayMode::Scrolling => None,
    }
}

pub fn placeholder_font_size(font_size: f32) -> f32 {
    (font_size * 0.72).max(MIN_PLACEHOLDER_FONT_SIZE)
}

/// Opacity of the placeholder text; 0 when the script is scrolling.
pub fn placeholder_opacity(mode: DisplayMode) -> f32 {
    match mode {
        DisplayMode::Scrolling => 0.0,
        DisplayMode::Empty | DisplayMode::Ready => PLACEHOLDER_OPACITY,
    }
}
