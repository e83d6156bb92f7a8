//! The prompter engine: one display session's scroll state plus everything it reads.
//!
//! The host writes controls and layout measurements whenever they change, then
//! calls [`Prompter::advance`] once per display refresh. Each advance:
//!   1. commits the content measurement pass,
//!   2. diffs the control snapshot against last frame's and applies the events,
//!   3. ticks the scroll clock,
//!   4. rebuilds the render frame.

use glam::Vec2;

use crate::api::config::PrompterConfig;
use crate::api::types::DisplayMode;
use crate::bridge::protocol::{RenderFrame, PROTOCOL_VERSION};
use crate::core::geometry::GeometryInputs;
use crate::core::scroll::{Motion, ScrollClock, ScrollState};
use crate::input::controls::{ControlInputs, FrameInputs};
use crate::input::handler::apply_events;
use crate::input::queue::{ControlEvent, ControlQueue};
use crate::systems::fade::{EdgeFade, BAND_BLUR_RADIUS, BAND_EDGE_OPACITY};
use crate::systems::measure::ContentMeasure;
use crate::systems::presentation::{
    display_mode, placeholder_font_size, placeholder_message, placeholder_opacity,
};
use crate::systems::tiling::TilePlan;

pub struct Prompter {
    config: PrompterConfig,
    clock: ScrollClock,
    /// Inputs as of the last advance.
    applied: FrameInputs,
    /// Inputs the host has written since.
    pending: FrameInputs,
    viewport_width: f32,
    measure: ContentMeasure,
    queue: ControlQueue,
    state: ScrollState,
    frame_counter: u32,
    frame: RenderFrame,
}

impl Prompter {
    pub fn new(config: PrompterConfig) -> Self {
        let config = config.sanitized();
        let controls = ControlInputs {
            font_size: config.font_size,
            speed_points_per_second: config.speed_points_per_second,
            fade_fraction: config.fade_fraction,
            jump_back_distance_points: config.jump_back_distance_points,
            ..Default::default()
        };
        let inputs = FrameInputs {
            controls,
            viewport_height: 0.0,
        };
        let measure = ContentMeasure::new();
        let geometry = geometry_for(&inputs, measure.height(), config.loop_gap);
        let state = ScrollState::new(&geometry, &inputs.controls.motion());

        let mut prompter = Self {
            clock: config.clock(),
            config,
            applied: inputs.clone(),
            pending: inputs,
            viewport_width: 0.0,
            measure,
            queue: ControlQueue::new(),
            state,
            frame_counter: 0,
            frame: RenderFrame::default(),
        };
        prompter.frame = prompter.build_frame();
        prompter
    }

    // -- Configuration --

    pub fn config(&self) -> &PrompterConfig {
        &self.config
    }

    /// Replace the configuration. Control-level fields (font, speed, fade,
    /// jump distance) are written to the pending controls and take effect on
    /// the next advance like any other control change.
    pub fn set_config(&mut self, config: PrompterConfig) {
        let config = config.sanitized();
        self.clock = config.clock();
        let c = &mut self.pending.controls;
        c.font_size = config.font_size;
        c.speed_points_per_second = config.speed_points_per_second;
        c.fade_fraction = config.fade_fraction;
        c.jump_back_distance_points = config.jump_back_distance_points;
        self.config = config;
    }

    // -- Controls --

    /// Pending controls, as the host last wrote them.
    pub fn controls(&self) -> &ControlInputs {
        &self.pending.controls
    }

    /// Mutable access for hosts that keep their own declarative state.
    pub fn controls_mut(&mut self) -> &mut ControlInputs {
        &mut self.pending.controls
    }

    pub fn set_controls(&mut self, controls: ControlInputs) {
        self.pending.controls = controls;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.pending.controls.text = text.into();
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.pending.controls.font_size = font_size;
    }

    pub fn set_speed(&mut self, points_per_second: f32) {
        self.pending.controls.speed_points_per_second = points_per_second;
    }

    pub fn set_fade_fraction(&mut self, fraction: f32) {
        self.pending.controls.fade_fraction = fraction;
    }

    pub fn set_running(&mut self, running: bool) {
        self.pending.controls.is_running = running;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.pending.controls.is_hovering = hovering;
    }

    pub fn set_session_started(&mut self, started: bool) {
        self.pending.controls.has_started_session = started;
    }

    /// Scroll back to the top of the script on the next advance.
    pub fn request_reset(&mut self) {
        let c = &mut self.pending.controls;
        c.reset_token = c.reset_token.next();
    }

    /// Rewind by the configured jump-back distance on the next advance.
    pub fn request_jump_back(&mut self) {
        let c = &mut self.pending.controls;
        c.jump_back_token = c.jump_back_token.next();
    }

    /// Rewind by `distance` on the next advance.
    pub fn request_jump_back_by(&mut self, distance: f32) {
        self.pending.controls.jump_back_distance_points = distance;
        self.request_jump_back();
    }

    /// Queue an event directly, bypassing the snapshot diff.
    pub fn push_event(&mut self, event: ControlEvent) {
        self.queue.push(event);
    }

    // -- Layout --

    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport_width = if size.x.is_finite() { size.x.max(0.0) } else { 0.0 };
        self.pending.viewport_height = size.y;
    }

    /// Report the measured height of one content copy. Reports are
    /// max-reduced until the next advance.
    pub fn report_content_height(&mut self, height: f32) {
        self.measure.report(height);
    }

    // -- Frame --

    /// Run one frame at `now` (seconds, monotonic). Returns the frame for the render sink.
    pub fn advance(&mut self, now: f64) -> &RenderFrame {
        if !now.is_finite() {
            log::warn!("dropping frame with non-finite timestamp {}", now);
            return &self.frame;
        }

        if let Some(height) = self.measure.commit() {
            log::trace!("content height {}", height);
        }

        let next = self.pending.clone().sanitized();
        let events = self.applied.diff(&next);
        self.queue.extend(events);
        self.applied = next;

        let geometry = self.geometry();
        let motion = self.motion();
        apply_events(&mut self.state, self.queue.drain(), &geometry, &motion, now);
        self.clock.tick(&mut self.state, now, &motion, &geometry);

        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.frame = self.build_frame();
        &self.frame
    }

    /// The most recently built frame.
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    // -- Derived state --

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn geometry(&self) -> GeometryInputs {
        geometry_for(&self.applied, self.measure.height(), self.config.loop_gap)
    }

    pub fn motion(&self) -> Motion {
        self.applied.controls.motion()
    }

    pub fn display_mode(&self) -> DisplayMode {
        let c = &self.applied.controls;
        display_mode(c.has_content(), c.has_started_session)
    }

    pub fn placeholder_message(&self) -> Option<&'static str> {
        placeholder_message(self.display_mode())
    }

    pub fn effective_offset_y(&self) -> f32 {
        self.state
            .effective_offset_y(self.motion().has_content, self.geometry().cycle_length())
    }

    pub fn tile_plan(&self) -> TilePlan {
        if self.display_mode() != DisplayMode::Scrolling {
            return TilePlan::hidden();
        }
        let geometry = self.geometry();
        TilePlan::new(self.effective_offset_y(), geometry.viewport_height, geometry.cycle_length())
    }

    pub fn edge_fade(&self) -> EdgeFade {
        let geometry = self.geometry();
        EdgeFade::new(
            Vec2::new(self.viewport_width, geometry.viewport_height),
            geometry.fade_fraction,
        )
    }

    fn build_frame(&self) -> RenderFrame {
        let geometry = self.geometry();
        let plan = self.tile_plan();
        let fade = self.edge_fade();

        let mut frame = RenderFrame {
            protocol_version: PROTOCOL_VERSION,
            frame_counter: self.frame_counter as f32,
            display_mode: self.display_mode() as u8 as f32,
            copy_count: plan.copies as f32,
            offset_y: plan.offset_y,
            stride: plan.stride,
            phase: self.state.phase,
            speed_multiplier: self.state.speed.current,
            viewport_height: geometry.viewport_height,
            placeholder_font_size: placeholder_font_size(geometry.font_size),
            placeholder_opacity: placeholder_opacity(self.display_mode()),
            band_height: fade.band_height(),
            band_blur_radius: BAND_BLUR_RADIUS,
            band_edge_opacity: BAND_EDGE_OPACITY,
            ..Default::default()
        };
        for (i, stop) in fade.mask.stops.iter().enumerate() {
            frame.mask_locations[i] = stop.location;
            frame.mask_opacities[i] = stop.opacity;
        }
        frame
    }
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new(PrompterConfig::default())
    }
}

fn geometry_for(inputs: &FrameInputs, content_height: f32, loop_gap: f32) -> GeometryInputs {
    GeometryInputs::new(
        inputs.viewport_height,
        content_height,
        inputs.controls.font_size,
        inputs.controls.fade_fraction,
    )
    .with_loop_gap(loop_gap)
}
