/// Per-frame render sink data read by the host.
/// Must stay in sync with the host-side `frame.ts` reader.
///
/// Layout (all values f32 / 4 bytes):
/// ```text
/// [Header: 4 floats]      protocol version, frame counter, display mode, copy count
/// [Scroll: 5 floats]      offset_y, stride, phase, speed multiplier, viewport height
/// [Placeholder: 2 floats] placeholder font size, placeholder opacity
/// [Overlay: 3 floats]     band height, band blur radius, band edge opacity
/// [Mask: 16 floats]       8 stop locations, then 8 stop opacities
/// ```

use bytemuck::{Pod, Zeroable};

use crate::systems::fade::MASK_STOPS;

/// Protocol version written into every frame.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per frame (wire format).
pub const FRAME_FLOATS: usize = 4 + 5 + 2 + 3 + MASK_STOPS * 2;

/// Field indices, for hosts that read the frame as a flat float array.
pub const FIELD_PROTOCOL_VERSION: usize = 0;
pub const FIELD_FRAME_COUNTER: usize = 1;
pub const FIELD_DISPLAY_MODE: usize = 2;
pub const FIELD_COPY_COUNT: usize = 3;
pub const FIELD_OFFSET_Y: usize = 4;
pub const FIELD_STRIDE: usize = 5;
pub const FIELD_PHASE: usize = 6;
pub const FIELD_SPEED_MULTIPLIER: usize = 7;
pub const FIELD_VIEWPORT_HEIGHT: usize = 8;
pub const FIELD_PLACEHOLDER_FONT_SIZE: usize = 9;
pub const FIELD_PLACEHOLDER_OPACITY: usize = 10;
pub const FIELD_BAND_HEIGHT: usize = 11;
pub const FIELD_BAND_BLUR_RADIUS: usize = 12;
pub const FIELD_BAND_EDGE_OPACITY: usize = 13;
pub const FIELD_MASK_LOCATIONS: usize = 14;
pub const FIELD_MASK_OPACITIES: usize = FIELD_MASK_LOCATIONS + MASK_STOPS;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderFrame {
    pub protocol_version: f32,
    /// Frames produced since the engine was created (wraps at f32 precision).
    pub frame_counter: f32,
    /// [`DisplayMode`](crate::api::types::DisplayMode) as a float.
    pub display_mode: f32,
    /// Tiled copies to draw (0 unless scrolling).
    pub copy_count: f32,
    /// Vertical offset of the first copy.
    pub offset_y: f32,
    /// Distance between consecutive copies.
    pub stride: f32,
    pub phase: f32,
    pub speed_multiplier: f32,
    pub viewport_height: f32,
    pub placeholder_font_size: f32,
    /// Opacity of the placeholder text (0 while scrolling).
    pub placeholder_opacity: f32,
    pub band_height: f32,
    pub band_blur_radius: f32,
    pub band_edge_opacity: f32,
    pub mask_locations: [f32; MASK_STOPS],
    pub mask_opacities: [f32; MASK_STOPS],
}

impl RenderFrame {
    pub const FLOATS: usize = FRAME_FLOATS;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// The frame as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// Raw pointer for shared-memory reads from the host.
    pub fn as_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_matches_protocol() {
        assert_eq!(std::mem::size_of::<RenderFrame>(), FRAME_FLOATS * 4);
        assert_eq!(RenderFrame::FLOATS, 30);
        assert_eq!(FIELD_MASK_OPACITIES + MASK_STOPS, FRAME_FLOATS);
    }

    #[test]
    fn field_indices_line_up() {
        let frame = RenderFrame {
            protocol_version: PROTOCOL_VERSION,
            copy_count: 4.0,
            offset_y: -12.5,
            placeholder_opacity: 0.75,
            band_height: 40.0,
            mask_locations: [0.0, 0.1, 0.2, 0.3, 0.7, 0.8, 0.9, 1.0],
            mask_opacities: [0.0, 0.25, 0.75, 1.0, 1.0, 0.75, 0.25, 0.0],
            ..Default::default()
        };
        let floats = frame.as_floats();
        assert_eq!(floats.len(), FRAME_FLOATS);
        assert_eq!(floats[FIELD_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(floats[FIELD_COPY_COUNT], 4.0);
        assert_eq!(floats[FIELD_OFFSET_Y], -12.5);
        assert_eq!(floats[FIELD_PLACEHOLDER_OPACITY], 0.75);
        assert_eq!(floats[FIELD_BAND_HEIGHT], 40.0);
        assert_eq!(floats[FIELD_MASK_LOCATIONS + 1], 0.1);
        assert_eq!(floats[FIELD_MASK_OPACITIES + 2], 0.75);
    }
}
