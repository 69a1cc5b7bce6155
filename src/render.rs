//! Draw adapter for `embedded-graphics` targets.
//!
//! This is the host side of the engine: it takes a cached [`Layout`], a
//! [`FieldConfig`] and the current [`RenderState`], and issues `Line` and
//! `Text` primitives. All functions are generic over
//! `DrawTarget<Color = Rgb565>`.
//!
//! # Update Strategy
//!
//! | Event | Work |
//! |-------|------|
//! | Resize / reconfigure | [`compute_layout`] (O(`code_length`) segments, computed lazily) |
//! | Text or focus change | colors + glyph projection + draw calls |
//!
//! [`CodeField`] bundles a configuration with its cached layout so the host
//! only has to forward size changes and per-frame state.
//!
//! Draw errors from the target are ignored, matching the other widgets.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
#[cfg(not(test))]
use micromath::F32Ext;

use crate::color_state::{cursor_segment, segment_colors};
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::glyphs::{GlyphMetrics, project_glyphs};
use crate::layout::{DesiredSize, Layout, compute_layout, measure};
use crate::state::RenderState;

/// Caret stroke width in pixels.
const CURSOR_STROKE_WIDTH: u32 = 1;

// =============================================================================
// Underline Span
// =============================================================================

/// How far a drawn underline extends.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnderlineSpan {
    /// The segment's own section minus the reduction-scale inset.
    #[default]
    Section,
    /// Extend the end point by one more section, overlapping the neighbour.
    /// Reproduces older renderings; geometry is unaffected.
    DoubleSection,
}

impl UnderlineSpan {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Section => Self::DoubleSection,
            Self::DoubleSection => Self::Section,
        }
    }
}

// =============================================================================
// Drawing Helpers
// =============================================================================

#[inline]
fn px(value: f32) -> i32 { value.round() as i32 }

/// Row for an underline of `stroke_width` so the stroke stays above
/// `underline_y` (the view's bottom edge).
#[inline]
fn underline_row(
    underline_y: f32,
    stroke_width: f32,
) -> i32 {
    px(underline_y - (stroke_width / 2.0).ceil().max(1.0))
}

/// Draw one underline per segment in its resolved color.
pub fn draw_underlines<D>(
    display: &mut D,
    origin: Point,
    layout: &Layout,
    config: &FieldConfig,
    state: RenderState<'_>,
    span: UnderlineSpan,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let stroke = px(config.stroke_width).max(0) as u32;
    if stroke == 0 {
        return;
    }

    let y = origin.y + underline_row(layout.underline_y(), config.stroke_width);
    let filled_len = state.filled_len(layout.code_length());
    let colors = segment_colors(filled_len, state.focused, config);

    for (segment, color) in layout.segments().zip(colors) {
        let (start, end) = segment.inset_span(layout.reduction_scale());
        let end = match span {
            UnderlineSpan::Section => end,
            UnderlineSpan::DoubleSection => end + layout.section_width(),
        };

        // Spans are half-open; the last pixel belongs to the next segment
        let x0 = px(start);
        let x1 = px(end) - 1;
        if x1 < x0 {
            continue;
        }

        Line::new(Point::new(origin.x + x0, y), Point::new(origin.x + x1, y))
            .into_styled(PrimitiveStyle::with_stroke(color, stroke))
            .draw(display)
            .ok();
    }
}

/// Draw the entered (or masked) characters.
pub fn draw_glyphs<D>(
    display: &mut D,
    origin: Point,
    layout: &Layout,
    config: &FieldConfig,
    state: RenderState<'_>,
    font: &MonoFont<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(font, config.text_color);
    let mut buf = [0u8; 4];

    for glyph in project_glyphs(state.text, layout, config, font) {
        let position = Point::new(origin.x + px(glyph.x), origin.y + px(glyph.y));
        Text::new(glyph.glyph.encode_utf8(&mut buf), position, style)
            .draw(display)
            .ok();
    }
}

/// Draw a vertical caret centered in the first empty segment, if the
/// configuration and state call for one.
pub fn draw_cursor<D>(
    display: &mut D,
    origin: Point,
    layout: &Layout,
    config: &FieldConfig,
    state: RenderState<'_>,
    font: &MonoFont<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let filled_len = state.filled_len(layout.code_length());
    let Some(segment) = cursor_segment(filled_len, state.focused, config).and_then(|i| layout.segment(i)) else {
        return;
    };

    let x = origin.x + px(segment.center_x());
    let bottom = origin.y + px(layout.text_baseline_y());
    let top = bottom - px(font.bounds_height());

    Line::new(Point::new(x, top), Point::new(x, bottom))
        .into_styled(PrimitiveStyle::with_stroke(config.cursor_color, CURSOR_STROKE_WIDTH))
        .draw(display)
        .ok();
}

// =============================================================================
// Code Field
// =============================================================================

/// A configured field with its cached layout.
///
/// Layout is recomputed only by [`resize`](Self::resize) and
/// [`reconfigure`](Self::reconfigure); [`draw`](Self::draw) reuses it.
#[derive(Clone)]
pub struct CodeField<'a> {
    config: FieldConfig,
    font: &'a MonoFont<'a>,
    bounds: Rectangle,
    layout: Layout,
    underline_span: UnderlineSpan,
}

impl<'a> CodeField<'a> {
    /// Create a field occupying `bounds`.
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidConfiguration`] if `config.code_length` is zero.
    pub fn new(
        config: FieldConfig,
        font: &'a MonoFont<'a>,
        bounds: Rectangle,
    ) -> Result<Self, FieldError> {
        let layout = Self::layout_for(&config, font, bounds.size)?;
        Ok(Self {
            config,
            font,
            bounds,
            layout,
            underline_span: UnderlineSpan::Section,
        })
    }

    fn layout_for(
        config: &FieldConfig,
        font: &MonoFont<'_>,
        size: Size,
    ) -> Result<Layout, FieldError> {
        compute_layout(size.width as f32, size.height as f32, config, font.bounds_height())
    }

    pub fn with_underline_span(
        mut self,
        span: UnderlineSpan,
    ) -> Self {
        self.underline_span = span;
        self
    }

    #[inline]
    pub const fn config(&self) -> &FieldConfig { &self.config }

    #[inline]
    pub const fn layout(&self) -> &Layout { &self.layout }

    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    #[inline]
    pub const fn underline_span(&self) -> UnderlineSpan { self.underline_span }

    pub fn set_underline_span(
        &mut self,
        span: UnderlineSpan,
    ) {
        self.underline_span = span;
    }

    /// Move the field without changing its size. Layout is origin-relative,
    /// so nothing is recomputed.
    pub fn move_to(
        &mut self,
        top_left: Point,
    ) {
        self.bounds.top_left = top_left;
    }

    /// Handle a size change.
    ///
    /// # Errors
    ///
    /// Propagates [`FieldError::InvalidConfiguration`]; the field is left
    /// unchanged on error.
    pub fn resize(
        &mut self,
        size: Size,
    ) -> Result<(), FieldError> {
        self.layout = Self::layout_for(&self.config, self.font, size)?;
        self.bounds.size = size;
        Ok(())
    }

    /// Replace the configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`FieldError::InvalidConfiguration`]; the previous
    /// configuration stays active on error.
    pub fn reconfigure(
        &mut self,
        config: FieldConfig,
    ) -> Result<(), FieldError> {
        self.layout = Self::layout_for(&config, self.font, self.bounds.size)?;
        self.config = config;
        Ok(())
    }

    /// Size the field would like, before host constraints.
    pub fn desired_size(&self) -> DesiredSize { measure(&self.config, self.font.bounds_height()) }

    /// Draw underlines, glyphs and the caret for `state`.
    pub fn draw<D>(
        &self,
        display: &mut D,
        state: RenderState<'_>,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let origin = self.bounds.top_left;
        draw_underlines(display, origin, &self.layout, &self.config, state, self.underline_span);
        draw_glyphs(display, origin, &self.layout, &self.config, state, self.font);
        draw_cursor(display, origin, &self.layout, &self.config, state, self.font);
    }
}

// =============================================================================
// Tests
// =============================================================================
