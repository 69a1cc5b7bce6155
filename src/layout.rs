//! Layout engine: segment geometry, text baseline and desired size.
//!
//! [`compute_layout`] runs once per size or configuration change. The result
//! ([`Layout`]) stores only the section width and baselines; segments are
//! produced on demand, so a layout is a few words regardless of
//! `code_length` and per-draw work never touches layout arithmetic again.
//!
//! # Geometry
//!
//! ```text
//!  0          w/n         2w/n                      w
//!  |  seg 0    |  seg 1    |   ...    |  seg n-1    |
//!  +-----------+-----------+----------+-------------+  <- underline_y = view_height
//! ```
//!
//! Segment `i` spans `[section_width * i, section_width * (i + 1))`. Adjacent
//! segments share their boundary exactly, so the spans partition
//! `[0, view_width]`.

use core::iter::FusedIterator;

use crate::config::{FieldConfig, LayoutMode, MEASURE_WIDTH_SLACK};
use crate::error::FieldError;
use crate::geometry::SegmentGeometry;

// =============================================================================
// Layout
// =============================================================================

/// Computed layout for one view size and one configuration.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    view_width: f32,
    view_height: f32,
    code_length: usize,
    section_width: f32,
    underline_y: f32,
    text_baseline_y: f32,
    reduction_scale: f32,
    mode: LayoutMode,
}

impl Layout {
    #[inline]
    pub const fn view_width(&self) -> f32 { self.view_width }

    #[inline]
    pub const fn view_height(&self) -> f32 { self.view_height }

    #[inline]
    pub const fn code_length(&self) -> usize { self.code_length }

    /// Width allotted to each segment before inset.
    #[inline]
    pub const fn section_width(&self) -> f32 { self.section_width }

    #[inline]
    pub const fn underline_y(&self) -> f32 { self.underline_y }

    /// Baseline shared by every glyph.
    #[inline]
    pub const fn text_baseline_y(&self) -> f32 { self.text_baseline_y }

    /// Reduction scale after clamping into `[0, 1]`.
    #[inline]
    pub const fn reduction_scale(&self) -> f32 { self.reduction_scale }

    #[inline]
    pub const fn mode(&self) -> LayoutMode { self.mode }

    /// Geometry of segment `index`, or `None` past the last segment.
    pub fn segment(
        &self,
        index: usize,
    ) -> Option<SegmentGeometry> {
        if index >= self.code_length {
            return None;
        }
        Some(SegmentGeometry {
            index,
            start_x: self.section_width * index as f32,
            end_x: self.section_width * (index + 1) as f32,
            underline_y: self.underline_y,
        })
    }

    /// All segments in index order.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            layout: self,
            front: 0,
            back: self.code_length,
        }
    }
}

/// Iterator over a layout's segments.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    layout: &'a Layout,
    front: usize,
    back: usize,
}

impl Iterator for Segments<'_> {
    type Item = SegmentGeometry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let segment = self.layout.segment(self.front);
        self.front += 1;
        segment
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.layout.segment(self.back)
    }
}

impl ExactSizeIterator for Segments<'_> {}
impl FusedIterator for Segments<'_> {}

// =============================================================================
// Layout Computation
// =============================================================================

/// Compute segment geometry and the text baseline for a view.
///
/// `glyph_bounds_height` is the host-measured height of the glyph bounding
/// box; it only matters in [`LayoutMode::CenteredText`].
///
/// # Errors
///
/// [`FieldError::InvalidConfiguration`] if `config.code_length` is zero.
pub fn compute_layout(
    view_width: f32,
    view_height: f32,
    config: &FieldConfig,
    glyph_bounds_height: f32,
) -> Result<Layout, FieldError> {
    let code_length = config.code_length;
    if code_length == 0 {
        field_error!("invalid code length {=usize}", code_length);
        return Err(FieldError::InvalidConfiguration { code_length });
    }

    let reduction_scale = config.clamped_reduction_scale();
    if reduction_scale != config.reduction_scale {
        field_warn!(
            "reduction scale {=f32} clamped to {=f32}",
            config.reduction_scale,
            reduction_scale
        );
    }

    let section_width = view_width / code_length as f32;
    let underline_y = view_height;
    let text_baseline_y = match config.layout_mode {
        LayoutMode::UnderlineBottom => view_height - config.text_bottom_margin,
        LayoutMode::CenteredText => view_height / 2.0 + glyph_bounds_height / 2.0,
    };

    field_debug!(
        "layout {=f32}x{=f32}: {=usize} segments of {=f32}px",
        view_width,
        view_height,
        code_length,
        section_width
    );

    Ok(Layout {
        view_width,
        view_height,
        code_length,
        section_width,
        underline_y,
        text_baseline_y,
        reduction_scale,
        mode: config.layout_mode,
    })
}

// =============================================================================
// Measurement
// =============================================================================

/// Size the field would like to occupy, before host constraints.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredSize {
    pub width: f32,
    pub height: f32,
}

/// Desired field size.
///
/// - height: `padding.top + padding.bottom + glyph_bounds_height + text_size + stroke_width`
/// - width: `(padding.left + padding.right + text_size) * code_length + 5`
///
/// Never fails; with `code_length == 0` the width is just the slack.
pub fn measure(
    config: &FieldConfig,
    glyph_bounds_height: f32,
) -> DesiredSize {
    let height = config.padding.vertical() + glyph_bounds_height + config.text_size + config.stroke_width;
    let width = (config.padding.horizontal() + config.text_size) * config.code_length as f32 + MEASURE_WIDTH_SLACK;
    DesiredSize { width, height }
}

/// Host size constraint for one axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SizeConstraint {
    /// No constraint; the desired size wins.
    #[default]
    Unspecified,
    /// At most this many pixels.
    AtMost(u32),
    /// Exactly this many pixels.
    Exactly(u32),
}

impl SizeConstraint {
    /// Reconcile a desired size (in pixels, truncated) with this constraint.
    pub fn resolve(
        self,
        desired: f32,
    ) -> u32 {
        // `as` saturates: negative and NaN become 0
        let desired = desired as u32;
        match self {
            Self::Unspecified => desired,
            Self::AtMost(max) => desired.min(max),
            Self::Exactly(size) => size,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config(code_length: usize) -> FieldConfig { FieldConfig::new().with_code_length(code_length) }

    #[test]
    fn test_zero_code_length_is_invalid() {
        let result = compute_layout(300.0, 60.0, &config(0), 20.0);
        assert_eq!(result, Err(FieldError::InvalidConfiguration { code_length: 0 }));
    }

    #[test]
    fn test_section_width() {
        let layout = compute_layout(300.0, 60.0, &config(6), 20.0).unwrap();
        assert_eq!(layout.section_width(), 50.0);
        assert_eq!(layout.segments().len(), 6);
    }

    #[test]
    fn test_segments_partition_view_width() {
        for code_length in 1..=12 {
            for view_width in [0.0f32, 1.0, 7.0, 100.0, 301.0, 1023.0] {
                let layout = compute_layout(view_width, 40.0, &config(code_length), 10.0).unwrap();
                let segments: Vec<_> = layout.segments().collect();

                assert_eq!(segments.len(), code_length);
                assert_eq!(segments[0].start_x, 0.0, "first segment must start at 0");
                for pair in segments.windows(2) {
                    assert_eq!(pair[0].end_x, pair[1].start_x, "segments must share boundaries");
                }
                let last = segments[code_length - 1];
                assert!(
                    (last.end_x - view_width).abs() <= 1e-3 * view_width.max(1.0),
                    "last segment must end at view width ({} vs {})",
                    last.end_x,
                    view_width
                );
            }
        }
    }

    #[test]
    fn test_segment_indices_and_baseline() {
        let layout = compute_layout(120.0, 48.0, &config(4), 10.0).unwrap();
        for (i, segment) in layout.segments().enumerate() {
            assert_eq!(segment.index, i);
            assert_eq!(segment.width(), 30.0);
            assert_eq!(segment.underline_y, 48.0, "underlines sit flush with the bottom");
        }
        assert!(layout.segment(4).is_none());
    }

    #[test]
    fn test_segments_reverse_iteration() {
        let layout = compute_layout(120.0, 48.0, &config(4), 10.0).unwrap();
        let indices: Vec<_> = layout.segments().rev().map(|s| s.index).collect();
        assert_eq!(indices, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_reduction_scale_clamping_idempotent() {
        let low = compute_layout(200.0, 40.0, &config(4).with_reduction_scale(-0.3), 10.0).unwrap();
        let zero = compute_layout(200.0, 40.0, &config(4).with_reduction_scale(0.0), 10.0).unwrap();
        let high = compute_layout(200.0, 40.0, &config(4).with_reduction_scale(1.7), 10.0).unwrap();
        let one = compute_layout(200.0, 40.0, &config(4).with_reduction_scale(1.0), 10.0).unwrap();

        assert_eq!(low, zero);
        assert_eq!(high, one);
        assert_eq!(low.reduction_scale(), 0.0);
        assert_eq!(high.reduction_scale(), 1.0);
    }

    #[test]
    fn test_underline_bottom_baseline() {
        let layout = compute_layout(200.0, 60.0, &config(4), 16.0).unwrap();
        assert_eq!(layout.mode(), LayoutMode::UnderlineBottom);
        assert_eq!(layout.text_baseline_y(), 40.0, "baseline is the bottom margin above the view bottom");
    }

    #[test]
    fn test_centered_text_baseline() {
        let cfg = config(4).with_layout_mode(LayoutMode::CenteredText);
        let layout = compute_layout(200.0, 60.0, &cfg, 16.0).unwrap();
        assert_eq!(layout.text_baseline_y(), 38.0);
        assert_eq!(layout.underline_y(), 60.0);
    }

    #[test]
    fn test_measure_formulas() {
        let cfg = config(6)
            .with_padding(crate::config::Padding::new(2.0, 3.0, 4.0, 5.0))
            .with_text_size(24.0)
            .with_stroke_width(5.0);
        let size = measure(&cfg, 18.0);
        assert_eq!(size.height, 3.0 + 5.0 + 18.0 + 24.0 + 5.0);
        assert_eq!(size.width, (2.0 + 4.0 + 24.0) * 6.0 + 5.0);
    }

    #[test]
    fn test_measure_zero_code_length_is_slack_only() {
        assert_eq!(measure(&config(0), 10.0).width, 5.0);
    }

    #[test]
    fn test_size_constraint_resolve() {
        assert_eq!(SizeConstraint::Unspecified.resolve(149.7), 149);
        assert_eq!(SizeConstraint::AtMost(100).resolve(149.7), 100);
        assert_eq!(SizeConstraint::AtMost(200).resolve(149.7), 149);
        assert_eq!(SizeConstraint::Exactly(80).resolve(149.7), 80);
        assert_eq!(SizeConstraint::Unspecified.resolve(-3.0), 0);
    }
}
