//! Glyph projection: which character goes where.
//!
//! Each entered character is placed in its own segment, horizontally centered
//! on the section and sitting on the layout's text baseline:
//!
//! ```text
//! x = start_x + section_width / 2 - advance(glyph) / 2
//! y = text_baseline_y
//! ```
//!
//! The host measures glyphs; the core never does. When the host cannot
//! measure a glyph ([`GlyphMetrics::advance`] returns `None`) the glyph is
//! placed a quarter section in from the segment start instead.

use core::iter::FusedIterator;
use core::str::Chars;

use embedded_graphics::mono_font::MonoFont;

use crate::config::FieldConfig;
use crate::layout::Layout;

// =============================================================================
// Glyph Metrics
// =============================================================================

/// Host-provided text measurements.
pub trait GlyphMetrics {
    /// Horizontal advance of `glyph` in pixels, or `None` if unknown.
    fn advance(
        &self,
        glyph: char,
    ) -> Option<f32>;

    /// Height of the glyph bounding box in pixels.
    fn bounds_height(&self) -> f32;
}

impl GlyphMetrics for MonoFont<'_> {
    fn advance(
        &self,
        _glyph: char,
    ) -> Option<f32> {
        Some((self.character_size.width + self.character_spacing) as f32)
    }

    fn bounds_height(&self) -> f32 { self.character_size.height as f32 }
}

impl<M: GlyphMetrics + ?Sized> GlyphMetrics for &M {
    fn advance(
        &self,
        glyph: char,
    ) -> Option<f32> {
        (**self).advance(glyph)
    }

    fn bounds_height(&self) -> f32 { (**self).bounds_height() }
}

/// Metrics for hosts that cannot measure text. Every glyph uses the
/// quarter-section fallback.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct UnmeasuredGlyphs {
    pub bounds_height: f32,
}

impl GlyphMetrics for UnmeasuredGlyphs {
    fn advance(
        &self,
        _glyph: char,
    ) -> Option<f32> {
        None
    }

    fn bounds_height(&self) -> f32 { self.bounds_height }
}

// =============================================================================
// Projection
// =============================================================================

/// A glyph and the point where its baseline starts.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProjectedGlyph {
    /// Segment the glyph belongs to.
    pub index: usize,
    /// Character to draw (the mask symbol in hidden mode).
    pub glyph: char,
    pub x: f32,
    pub y: f32,
}

/// Project `text` onto the layout's segments.
///
/// Yields `min(chars(text), code_length)` glyphs; extra characters are
/// ignored. The iterator is `Clone`, so the same projection can be walked
/// more than once.
pub fn project_glyphs<'a, M: GlyphMetrics>(
    text: &'a str,
    layout: &'a Layout,
    config: &FieldConfig,
    metrics: M,
) -> Glyphs<'a, M> {
    Glyphs {
        chars: text.chars(),
        layout,
        metrics,
        mask: config.hidden_mode.then_some(config.hidden_mask_symbol),
        index: 0,
    }
}

/// Iterator returned by [`project_glyphs`].
#[derive(Clone, Debug)]
pub struct Glyphs<'a, M> {
    chars: Chars<'a>,
    layout: &'a Layout,
    metrics: M,
    mask: Option<char>,
    index: usize,
}

impl<M: GlyphMetrics> Iterator for Glyphs<'_, M> {
    type Item = ProjectedGlyph;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.layout.segment(self.index)?;
        let entered = self.chars.next()?;
        let glyph = self.mask.unwrap_or(entered);

        let section_width = self.layout.section_width();
        let x = match self.metrics.advance(glyph) {
            Some(advance) => segment.start_x + section_width / 2.0 - advance / 2.0,
            None => segment.start_x + section_width / 2.0 / 2.0,
        };

        let projected = ProjectedGlyph {
            index: self.index,
            glyph,
            x,
            y: self.layout.text_baseline_y(),
        };
        self.index += 1;
        Some(projected)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_segments = self.layout.code_length().saturating_sub(self.index);
        let (_, upper) = self.chars.size_hint();
        let upper = upper.map_or(remaining_segments, |u| u.min(remaining_segments));
        (0, Some(upper))
    }
}

impl<M: GlyphMetrics> FusedIterator for Glyphs<'_, M> {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::layout::compute_layout;

    /// Fixed-advance metrics for predictable positions.
    #[derive(Clone, Copy, Debug)]
    struct Fixed(f32);

    impl GlyphMetrics for Fixed {
        fn advance(
            &self,
            _glyph: char,
        ) -> Option<f32> {
            Some(self.0)
        }

        fn bounds_height(&self) -> f32 { 10.0 }
    }

    fn layout(config: &FieldConfig) -> Layout { compute_layout(300.0, 60.0, config, 10.0).unwrap() }

    #[test]
    fn test_glyphs_centered_in_sections() {
        let cfg = FieldConfig::new().with_code_length(6);
        let layout = layout(&cfg);
        let glyphs: Vec<_> = project_glyphs("42", &layout, &cfg, Fixed(10.0)).collect();

        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].glyph, '4');
        assert_eq!(glyphs[0].x, 20.0, "0 + 50/2 - 10/2");
        assert_eq!(glyphs[1].glyph, '2');
        assert_eq!(glyphs[1].x, 70.0, "50 + 50/2 - 10/2");
        assert!(glyphs.iter().all(|g| g.y == layout.text_baseline_y()));
    }

    #[test]
    fn test_hidden_mode_masks_every_glyph() {
        let cfg = FieldConfig::new().with_code_length(6).with_hidden_mode(true, '*');
        let layout = layout(&cfg);
        let glyphs: Vec<_> = project_glyphs("12", &layout, &cfg, Fixed(10.0)).collect();

        assert_eq!(glyphs.len(), 2);
        assert!(glyphs.iter().all(|g| g.glyph == '*'), "entered digits must never leak");
    }

    #[test]
    fn test_projection_truncated_to_code_length() {
        let cfg = FieldConfig::new().with_code_length(4);
        let layout = layout(&cfg);
        let glyphs: Vec<_> = project_glyphs("1234567", &layout, &cfg, Fixed(8.0)).collect();

        assert_eq!(glyphs.len(), 4);
        assert_eq!(glyphs.last().map(|g| g.index), Some(3));
    }

    #[test]
    fn test_empty_text_projects_nothing() {
        let cfg = FieldConfig::new();
        let layout = layout(&cfg);
        assert_eq!(project_glyphs("", &layout, &cfg, Fixed(8.0)).count(), 0);
    }

    #[test]
    fn test_projection_is_restartable() {
        let cfg = FieldConfig::new().with_code_length(6);
        let layout = layout(&cfg);
        let glyphs = project_glyphs("987", &layout, &cfg, Fixed(10.0));

        let first: Vec<_> = glyphs.clone().collect();
        let second: Vec<_> = glyphs.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unmeasured_glyphs_use_quarter_section() {
        let cfg = FieldConfig::new().with_code_length(6);
        let layout = layout(&cfg);
        let metrics = UnmeasuredGlyphs { bounds_height: 10.0 };
        let glyphs: Vec<_> = project_glyphs("12", &layout, &cfg, metrics).collect();

        assert_eq!(glyphs[0].x, 12.5);
        assert_eq!(glyphs[1].x, 62.5);
    }

    #[test]
    fn test_mono_font_metrics() {
        // FONT_6X10: 6px wide glyphs, no extra spacing
        assert_eq!(FONT_6X10.advance('7'), Some(6.0));
        assert_eq!(FONT_6X10.bounds_height(), 10.0);

        let cfg = FieldConfig::new().with_code_length(6);
        let layout = layout(&cfg);
        let first = project_glyphs("7", &layout, &cfg, &FONT_6X10).next().unwrap();
        assert_eq!(first.x, 22.0);
    }
}
