//! Segment geometry.

use crate::config::clamp_unit;

/// Horizontal span of one segment plus the underline baseline.
///
/// `end_x - start_x` is always the full section width. The reduction-scale
/// inset is applied at draw time through [`inset_span`](Self::inset_span), so
/// geometry never depends on focus or fill state.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentGeometry {
    pub index: usize,
    pub start_x: f32,
    pub end_x: f32,
    pub underline_y: f32,
}

impl SegmentGeometry {
    #[inline]
    pub fn width(&self) -> f32 { self.end_x - self.start_x }

    /// Horizontal center of the section.
    #[inline]
    pub fn center_x(&self) -> f32 { self.start_x + self.width() / 2.0 }

    /// Drawn underline span after removing `scale` of the width, half from
    /// each end. `scale` is clamped into `[0, 1]`; at 1.0 the span is empty
    /// (`start == end`).
    pub fn inset_span(
        &self,
        scale: f32,
    ) -> (f32, f32) {
        let inset = self.width() * clamp_unit(scale) / 2.0;
        (self.start_x + inset, self.end_x - inset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEGMENT: SegmentGeometry = SegmentGeometry {
        index: 1,
        start_x: 50.0,
        end_x: 100.0,
        underline_y: 40.0,
    };

    #[test]
    fn test_width_and_center() {
        assert_eq!(SEGMENT.width(), 50.0);
        assert_eq!(SEGMENT.center_x(), 75.0);
    }

    #[test]
    fn test_inset_span_no_inset() {
        assert_eq!(SEGMENT.inset_span(0.0), (50.0, 100.0));
    }

    #[test]
    fn test_inset_span_splits_evenly() {
        assert_eq!(SEGMENT.inset_span(0.2), (55.0, 95.0));
    }

    #[test]
    fn test_inset_span_full_is_empty() {
        let (start, end) = SEGMENT.inset_span(1.0);
        assert_eq!(start, end);
        assert_eq!(start, 75.0);
    }

    #[test]
    fn test_inset_span_clamps_scale() {
        assert_eq!(SEGMENT.inset_span(-0.3), SEGMENT.inset_span(0.0));
        assert_eq!(SEGMENT.inset_span(1.7), SEGMENT.inset_span(1.0));
    }
}
