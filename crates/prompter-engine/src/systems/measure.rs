//! Content height measurement.
//!
//! The host may report the rendered height of a content copy several times per
//! layout pass (and out of order). Reports within a pass are max-reduced; the
//! committed height is never below 1.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentMeasure {
    height: f32,
    pending: Option<f32>,
}

impl Default for ContentMeasure {
    fn default() -> Self {
        Self {
            height: 1.0,
            pending: None,
        }
    }
}

impl ContentMeasure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one measurement for the current pass. Non-finite reports are dropped.
    pub fn report(&mut self, measured: f32) {
        if !measured.is_finite() {
            return;
        }
        self.pending = Some(match self.pending {
            Some(current) => current.max(measured),
            None => measured,
        });
    }

    /// Close the pass. Returns the new height if any measurement arrived.
    pub fn commit(&mut self) -> Option<f32> {
        let measured = self.pending.take()?;
        self.height = measured.max(1.0);
        Some(self.height)
    }

    /// Last committed height.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        assert_eq!(ContentMeasure::new().height(), 1.0);
    }

    #[test]
    fn pass_takes_maximum() {
        let mut m = ContentMeasure::new();
        m.report(320.0);
        m.report(480.0);
        m.report(410.0);
        assert_eq!(m.commit(), Some(480.0));
        assert_eq!(m.height(), 480.0);
    }

    #[test]
    fn later_pass_may_shrink() {
        let mut m = ContentMeasure::new();
        m.report(480.0);
        m.commit();
        m.report(200.0);
        m.commit();
        assert_eq!(m.height(), 200.0);
    }

    #[test]
    fn clamps_to_one_and_ignores_nan() {
        let mut m = ContentMeasure::new();
        m.report(f32::NAN);
        assert_eq!(m.commit(), None);
        m.report(0.0);
        assert_eq!(m.commit(), Some(1.0));
        assert!(!m.has_pending());
    }
}
