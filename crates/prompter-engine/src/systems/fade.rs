//! Edge fade compositor.
//!
//! Two layers soften the edges where text enters and leaves the viewport:
//! a vertical opacity mask over the scrolling content, and a pair of blurred
//! dark bands drawn on top (non-interactive).

use glam::Vec2;

use crate::core::geometry::clamp_fade_fraction;

/// Number of stops in the edge mask gradient.
pub const MASK_STOPS: usize = 8;
/// Blur radius applied to each overlay band.
pub const BAND_BLUR_RADIUS: f32 = 2.8;
/// Opacity at the outer edge of each band.
pub const BAND_EDGE_OPACITY: f32 = 0.9;
/// Bands never get thinner than this.
pub const MIN_BAND_HEIGHT: f32 = 8.0;

/// One stop of a vertical gradient: `location` in `[0, 1]` from the top.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradientStop {
    pub location: f32,
    pub opacity: f32,
}

impl GradientStop {
    pub const fn new(location: f32, opacity: f32) -> Self {
        Self { location, opacity }
    }
}

/// Transparency mask over the scrolling content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeMask {
    pub stops: [GradientStop; MASK_STOPS],
}

impl FadeMask {
    pub fn new(fade_fraction: f32) -> Self {
        let f = clamp_fade_fraction(fade_fraction);
        Self {
            stops: [
                GradientStop::new(0.0, 0.0),
                GradientStop::new(f * 0.28, 0.25),
                GradientStop::new(f * 0.68, 0.75),
                GradientStop::new(f, 1.0),
                GradientStop::new(1.0 - f, 1.0),
                GradientStop::new(1.0 - f * 0.68, 0.75),
                GradientStop::new(1.0 - f * 0.28, 0.25),
                GradientStop::new(1.0, 0.0),
            ],
        }
    }

    /// Mask opacity at `t` (0 = top, 1 = bottom), linearly interpolated between stops.
    pub fn opacity_at(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.location {
                let span = b.location - a.location;
                if span <= f32::EPSILON {
                    return b.opacity;
                }
                let k = (t - a.location) / span;
                return a.opacity + (b.opacity - a.opacity) * k;
            }
        }
        self.stops[MASK_STOPS - 1].opacity
    }
}

/// Which edge a softening band sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandEdge {
    /// Opaque at the top, fading to transparent downward.
    Top,
    /// Transparent at its top, opaque at the bottom edge.
    Bottom,
}

/// A blurred gradient band over one edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBand {
    pub edge: BandEdge,
    /// Top-left corner relative to the viewport.
    pub origin: Vec2,
    /// Band size. Width follows the viewport.
    pub size: Vec2,
    /// Opacity at the band's top and bottom.
    pub opacity_from: f32,
    pub opacity_to: f32,
    pub blur_radius: f32,
}

/// Both overlay bands plus the mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFade {
    pub mask: FadeMask,
    pub top: EdgeBand,
    pub bottom: EdgeBand,
}

/// Height of each softening band for a viewport.
pub fn band_height(viewport_height: f32, fade_fraction: f32) -> f32 {
    let viewport = if viewport_height.is_finite() { viewport_height.max(0.0) } else { 0.0 };
    (viewport * clamp_fade_fraction(fade_fraction) * 0.9).max(MIN_BAND_HEIGHT)
}

impl EdgeFade {
    pub fn new(viewport: Vec2, fade_fraction: f32) -> Self {
        let h = band_height(viewport.y, fade_fraction);
        let size = Vec2::new(viewport.x.max(0.0), h);
        Self {
            mask: FadeMask::new(fade_fraction),
            top: EdgeBand {
                edge: BandEdge::Top,
                origin: Vec2::ZERO,
                size,
                opacity_from: BAND_EDGE_OPACITY,
                opacity_to: 0.0,
                blur_radius: BAND_BLUR_RADIUS,
            },
            bottom: EdgeBand {
                edge: BandEdge::Bottom,
                origin: Vec2::new(0.0, viewport.y.max(0.0) - h),
                size,
                opacity_from: 0.0,
                opacity_to: BAND_EDGE_OPACITY,
                blur_radius: BAND_BLUR_RADIUS,
            },
        }
    }

    pub fn band_height(&self) -> f32 {
        self.top.size.y
    }
}
