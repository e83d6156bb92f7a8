//! Geometry model for the scrolling prompter view.
//!
//! Pure derivations from the host-supplied layout snapshot: loop cycle length,
//! the start anchor that clears the top fade band, and the band near the top of
//! the script inside which a geometry change may re-snap the phase.

/// Spacing between stacked copies of the content, in layout units.
pub const DEFAULT_LOOP_GAP: f32 = 24.0;
/// Font size used when the host supplies a non-finite value.
pub const DEFAULT_FONT_SIZE: f32 = 20.0;
/// Upper bound for the edge fade fraction (each edge may take just under half).
pub const MAX_FADE_FRACTION: f32 = 0.49;

/// Replace NaN / infinities with `fallback`.
#[inline]
pub(crate) fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Clamp a fade fraction into `[0, MAX_FADE_FRACTION]`. NaN maps to 0.
#[inline]
pub fn clamp_fade_fraction(fraction: f32) -> f32 {
    finite_or(fraction, 0.0).clamp(0.0, MAX_FADE_FRACTION)
}

/// Layout snapshot for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryInputs {
    /// Height of the visible region. Zero before the first layout pass.
    pub viewport_height: f32,
    /// Measured height of one content copy (at least 1).
    pub content_height: f32,
    pub font_size: f32,
    /// Raw fade fraction as configured; see [`GeometryInputs::clamped_fade_fraction`].
    pub fade_fraction: f32,
    /// Gap between tiled copies.
    pub loop_gap: f32,
}

impl Default for GeometryInputs {
    fn default() -> Self {
        Self {
            viewport_height: 0.0,
            content_height: 1.0,
            font_size: DEFAULT_FONT_SIZE,
            fade_fraction: 0.0,
            loop_gap: DEFAULT_LOOP_GAP,
        }
    }
}

impl GeometryInputs {
    pub fn new(
        viewport_height: f32,
        content_height: f32,
        font_size: f32,
        fade_fraction: f32,
    ) -> Self {
        Self {
            viewport_height,
            content_height,
            font_size,
            fade_fraction,
            loop_gap: DEFAULT_LOOP_GAP,
        }
        .sanitized()
    }

    pub fn with_loop_gap(mut self, loop_gap: f32) -> Self {
        self.loop_gap = finite_or(loop_gap, DEFAULT_LOOP_GAP).max(0.0);
        self
    }

    /// Clamp every field into its valid range. Non-finite values fall back to
    /// the field's floor (or default, for font size and gap).
    pub fn sanitized(self) -> Self {
        Self {
            viewport_height: finite_or(self.viewport_height, 0.0).max(0.0),
            content_height: finite_or(self.content_height, 1.0).max(1.0),
            font_size: finite_or(self.font_size, DEFAULT_FONT_SIZE).max(0.0),
            fade_fraction: clamp_fade_fraction(self.fade_fraction),
            loop_gap: finite_or(self.loop_gap, DEFAULT_LOOP_GAP).max(0.0),
        }
    }

    pub fn clamped_fade_fraction(&self) -> f32 {
        clamp_fade_fraction(self.fade_fraction)
    }

    /// Distance covered by one full loop: content plus the gap to the next copy.
    pub fn cycle_length(&self) -> f32 {
        (self.content_height + self.loop_gap).max(1.0)
    }

    /// Height of the top fade band. Zero until the viewport has been laid out.
    pub fn top_fade_clear_inset(&self) -> f32 {
        if self.viewport_height > 1.0 {
            self.viewport_height * self.clamped_fade_fraction()
        } else {
            0.0
        }
    }

    pub fn readability_padding(&self) -> f32 {
        (self.font_size * 0.12).max(2.0)
    }

    /// How far below the top edge the first line sits when scrolled to the top.
    ///
    /// Clears the fade band plus a small readability margin, but is capped so a
    /// short viewport still shows most of its height as text.
    pub fn start_anchor_offset(&self) -> f32 {
        let fallback = (self.font_size * 0.45).clamp(8.0, 22.0);
        if self.viewport_height <= 1.0 {
            return fallback;
        }

        let raw = self.top_fade_clear_inset() + self.readability_padding();
        let capped = raw.min((self.viewport_height * 0.38).max(18.0));
        capped.max(fallback)
    }

    /// Phase value meaning "scrolled to the very top of the script".
    pub fn top_of_script_phase_floor(&self) -> f32 {
        -self.start_anchor_offset()
    }

    /// Phases at or below this value are close enough to the top that a
    /// geometry change may re-snap them to the floor without a visible jump.
    pub fn top_normalization_threshold(&self) -> f32 {
        (self.font_size * 1.6).max(12.0)
    }
}
