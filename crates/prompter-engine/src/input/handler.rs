//! Applies control events to the scroll state.
//!
//! Runs on the frame thread, before the clock ticks for that frame.

use crate::core::geometry::GeometryInputs;
use crate::core::scroll::{Motion, ScrollState};
use super::queue::ControlEvent;

/// Mutate `state` in response to one control event.
///
/// `geometry` and `motion` are the values in effect after the change.
/// `now` is the current frame's timestamp in seconds.
pub fn apply_event(
    state: &mut ScrollState,
    event: ControlEvent,
    geometry: &GeometryInputs,
    motion: &Motion,
    now: f64,
) {
    match event {
        ControlEvent::TextChanged | ControlEvent::Reset | ControlEvent::SessionStarted => {
            state.reset(geometry, motion);
            log::debug!("scroll reset ({:?}) to phase {}", event, state.phase);
        }
        ControlEvent::JumpBack { distance } => {
            if !motion.has_content {
                return;
            }
            let before = state.phase;
            state.jump_back(distance, geometry);
            log::debug!("jump back {} -> {}", before, state.phase);
        }
        ControlEvent::ViewportResized | ControlEvent::FontResized => {
            if motion.has_content && state.normalize_top_anchor(geometry) {
                log::debug!("top anchor re-snapped to {} after {:?}", state.phase, event);
            }
        }
        ControlEvent::RunningChanged | ControlEvent::HoveringChanged => {
            state.mark_time(now);
        }
    }
}

/// Apply a batch of events in order.
pub fn apply_events(
    state: &mut ScrollState,
    events: impl IntoIterator<Item = ControlEvent>,
    geometry: &GeometryInputs,
    motion: &Motion,
    now: f64,
) {
    for event in events {
        apply_event(state, event, geometry, motion, now);
    }
}
