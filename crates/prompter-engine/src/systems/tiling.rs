//! Tiling layout planner.
//!
//! The script is drawn as a vertical stack of identical copies separated by the
//! loop gap. The stack is shifted by the effective offset each frame; enough
//! copies are stacked that the seam between loop N and N+1 is always covered.

use glam::Vec2;

/// Never stack fewer copies than this.
pub const MIN_COPIES: usize = 3;

/// Number of stacked copies needed to cover `viewport_height` at every offset,
/// plus two spares for the loop hand-off.
pub fn repetition_count(viewport_height: f32, cycle_length: f32) -> usize {
    let cycle = if cycle_length.is_finite() { cycle_length.max(1.0) } else { 1.0 };
    let viewport = if viewport_height.is_finite() { viewport_height.max(0.0) } else { 0.0 };
    // The cast saturates for huge viewports.
    let needed = ((viewport / cycle).ceil() as usize).saturating_add(2);
    needed.max(MIN_COPIES)
}

/// Where each copy of the content goes this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlan {
    /// Vertical offset of the whole stack (the first copy's top edge).
    pub offset_y: f32,
    /// Number of copies to draw.
    pub copies: usize,
    /// Distance from one copy's top edge to the next (content + gap).
    pub stride: f32,
}

impl TilePlan {
    pub fn new(offset_y: f32, viewport_height: f32, cycle_length: f32) -> Self {
        Self {
            offset_y,
            copies: repetition_count(viewport_height, cycle_length),
            stride: cycle_length.max(1.0),
        }
    }

    /// Nothing to draw (empty or not-yet-started sessions).
    pub fn hidden() -> Self {
        Self {
            offset_y: 0.0,
            copies: 0,
            stride: 1.0,
        }
    }

    /// Top-left origin of copy `index`, relative to the viewport.
    pub fn origin(&self, index: usize) -> Vec2 {
        Vec2::new(0.0, self.offset_y + index as f32 * self.stride)
    }

    /// Origins of every copy, top to bottom.
    pub fn origins(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.copies).map(move |i| self.origin(i))
    }

    /// Bottom edge of the last copy.
    pub fn covered_bottom(&self) -> f32 {
        self.offset_y + self.copies as f32 * self.stride
    }
}
