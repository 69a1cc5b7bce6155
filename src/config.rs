//! Field configuration.
//!
//! [`FieldConfig`] is built once from host configuration and never mutated
//! while a draw is in progress. A configuration change produces a new value
//! (see the `with_*` builders), which the host hands to
//! [`CodeField::reconfigure`](crate::CodeField::reconfigure).
//!
//! # Defaults
//!
//! | Option | Default |
//! |--------|---------|
//! | `code_length` | [`DEFAULT_CODE_LENGTH`] (8) |
//! | `reduction_scale` | 0.0 |
//! | `stroke_width` | [`DEFAULT_STROKE_WIDTH`] (5) |
//! | `text_size` | [`DEFAULT_TEXT_SIZE`] (24) |
//! | `text_bottom_margin` | [`DEFAULT_TEXT_BOTTOM_MARGIN`] (20) |
//! | `base_color` / `selected_color` | black / red |
//! | `filled_color` / `cursor_color` | blue / red |
//! | `hidden_mask_symbol` | `'*'` |
//! | `color_variant` | [`ColorVariant::WholeFieldFocus`] |
//! | `layout_mode` | [`LayoutMode::UnderlineBottom`] |

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, BLUE, RED};

// =============================================================================
// Default Values
// =============================================================================

/// Number of segments when the host does not specify one.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Underline stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;

/// Nominal text size in pixels (height of `ProFont` 24pt glyphs).
pub const DEFAULT_TEXT_SIZE: f32 = 24.0;

/// Distance of the text baseline above the view bottom in
/// [`LayoutMode::UnderlineBottom`].
pub const DEFAULT_TEXT_BOTTOM_MARGIN: f32 = 20.0;

/// Glyph substituted for every entered character in hidden mode.
pub const DEFAULT_MASK_SYMBOL: char = '*';

/// Extra pixels added to the desired width.
pub const MEASURE_WIDTH_SLACK: f32 = 5.0;

const _: () = assert!(DEFAULT_CODE_LENGTH > 0);
const _: () = assert!(DEFAULT_STROKE_WIDTH >= 0.0);
const _: () = assert!(DEFAULT_TEXT_SIZE >= 0.0);

// =============================================================================
// Named Variants
// =============================================================================

/// Segment coloring policy.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorVariant {
    /// Every segment shares one color: selected when focused, base otherwise.
    #[default]
    WholeFieldFocus,
    /// Filled segments, the caret segment and empty segments are colored
    /// independently.
    PerSegmentFill,
}

impl ColorVariant {
    /// Switch to the other variant.
    pub const fn toggle(self) -> Self {
        match self {
            Self::WholeFieldFocus => Self::PerSegmentFill,
            Self::PerSegmentFill => Self::WholeFieldFocus,
        }
    }

    /// Short label for status displays.
    pub const fn label(self) -> &'static str {
        match self {
            Self::WholeFieldFocus => "whole-field-focus",
            Self::PerSegmentFill => "per-segment-fill",
        }
    }
}

/// Vertical placement of text relative to the underlines.
///
/// Underlines always sit flush with the bottom of the view; the mode only
/// moves the text baseline.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutMode {
    /// Baseline is `text_bottom_margin` above the view bottom.
    #[default]
    UnderlineBottom,
    /// Glyphs are vertically centered in the view.
    CenteredText,
}

impl LayoutMode {
    /// Switch to the other mode.
    pub const fn toggle(self) -> Self {
        match self {
            Self::UnderlineBottom => Self::CenteredText,
            Self::CenteredText => Self::UnderlineBottom,
        }
    }

    /// Short label for status displays.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderlineBottom => "underline-bottom",
            Self::CenteredText => "centered-text",
        }
    }
}

// =============================================================================
// Padding
// =============================================================================

/// Padding around the field, used only for size measurement.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same padding on all four sides.
    pub const fn uniform(value: f32) -> Self { Self::new(value, value, value, value) }

    #[inline]
    pub const fn horizontal(&self) -> f32 { self.left + self.right }

    #[inline]
    pub const fn vertical(&self) -> f32 { self.top + self.bottom }
}

// =============================================================================
// Field Configuration
// =============================================================================

/// Immutable configuration of a code field.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldConfig {
    /// Number of segments. Must be non-zero for layout to succeed.
    pub code_length: usize,
    /// Fraction of the section width removed from each underline, split
    /// evenly between both ends. Clamped to `[0, 1]` when used.
    pub reduction_scale: f32,
    /// Underline stroke width in pixels.
    pub stroke_width: f32,
    /// Nominal text size in pixels (measurement only).
    pub text_size: f32,
    /// Baseline offset from the bottom in [`LayoutMode::UnderlineBottom`].
    pub text_bottom_margin: f32,
    pub padding: Padding,

    pub base_color: Rgb565,
    pub selected_color: Rgb565,
    pub filled_color: Rgb565,
    pub cursor_color: Rgb565,
    pub text_color: Rgb565,

    /// Render every entered character as `hidden_mask_symbol`.
    pub hidden_mode: bool,
    pub hidden_mask_symbol: char,
    /// Mark the first empty segment while focused.
    pub cursor_enabled: bool,

    pub color_variant: ColorVariant,
    pub layout_mode: LayoutMode,
}

impl FieldConfig {
    /// Configuration with every option at its documented default.
    pub const DEFAULT: Self = Self {
        code_length: DEFAULT_CODE_LENGTH,
        reduction_scale: 0.0,
        stroke_width: DEFAULT_STROKE_WIDTH,
        text_size: DEFAULT_TEXT_SIZE,
        text_bottom_margin: DEFAULT_TEXT_BOTTOM_MARGIN,
        padding: Padding::ZERO,
        base_color: BLACK,
        selected_color: RED,
        filled_color: BLUE,
        cursor_color: RED,
        text_color: BLACK,
        hidden_mode: false,
        hidden_mask_symbol: DEFAULT_MASK_SYMBOL,
        cursor_enabled: false,
        color_variant: ColorVariant::WholeFieldFocus,
        layout_mode: LayoutMode::UnderlineBottom,
    };

    pub const fn new() -> Self { Self::DEFAULT }

    /// Maximum number of characters the host input filter should accept.
    #[inline]
    pub const fn max_input_len(&self) -> usize { self.code_length }

    /// Reduction scale clamped into `[0, 1]`.
    ///
    /// NaN is treated as no inset.
    #[inline]
    pub fn clamped_reduction_scale(&self) -> f32 { clamp_unit(self.reduction_scale) }

    pub const fn with_code_length(
        mut self,
        code_length: usize,
    ) -> Self {
        self.code_length = code_length;
        self
    }

    pub const fn with_reduction_scale(
        mut self,
        scale: f32,
    ) -> Self {
        self.reduction_scale = scale;
        self
    }

    pub const fn with_stroke_width(
        mut self,
        width: f32,
    ) -> Self {
        self.stroke_width = width;
        self
    }

    pub const fn with_text_size(
        mut self,
        size: f32,
    ) -> Self {
        self.text_size = size;
        self
    }

    pub const fn with_text_bottom_margin(
        mut self,
        margin: f32,
    ) -> Self {
        self.text_bottom_margin = margin;
        self
    }

    pub const fn with_padding(
        mut self,
        padding: Padding,
    ) -> Self {
        self.padding = padding;
        self
    }

    /// Set the four segment colors at once.
    pub const fn with_colors(
        mut self,
        base: Rgb565,
        selected: Rgb565,
        filled: Rgb565,
        cursor: Rgb565,
    ) -> Self {
        self.base_color = base;
        self.selected_color = selected;
        self.filled_color = filled;
        self.cursor_color = cursor;
        self
    }

    pub const fn with_text_color(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.text_color = color;
        self
    }

    /// Enable or disable hidden mode with the given mask symbol.
    pub const fn with_hidden_mode(
        mut self,
        hidden: bool,
        mask_symbol: char,
    ) -> Self {
        self.hidden_mode = hidden;
        self.hidden_mask_symbol = mask_symbol;
        self
    }

    pub const fn with_cursor(
        mut self,
        enabled: bool,
    ) -> Self {
        self.cursor_enabled = enabled;
        self
    }

    pub const fn with_color_variant(
        mut self,
        variant: ColorVariant,
    ) -> Self {
        self.color_variant = variant;
        self
    }

    pub const fn with_layout_mode(
        mut self,
        mode: LayoutMode,
    ) -> Self {
        self.layout_mode = mode;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self { Self::DEFAULT }
}

/// Clamp into `[0, 1]`, mapping NaN to 0.
#[inline]
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.code_length, 8);
        assert_eq!(config.stroke_width, 5.0);
        assert_eq!(config.text_bottom_margin, 20.0);
        assert_eq!(config.base_color, BLACK);
        assert_eq!(config.selected_color, RED);
        assert_eq!(config.hidden_mask_symbol, '*');
        assert!(!config.hidden_mode);
        assert!(!config.cursor_enabled);
        assert_eq!(config.color_variant, ColorVariant::WholeFieldFocus);
        assert_eq!(config.layout_mode, LayoutMode::UnderlineBottom);
    }

    #[test]
    fn test_builders_produce_new_values() {
        let base = FieldConfig::new();
        let changed = base.with_code_length(4).with_hidden_mode(true, '#').with_cursor(true);

        assert_eq!(base.code_length, 8, "builders must not touch the original");
        assert_eq!(changed.code_length, 4);
        assert!(changed.hidden_mode);
        assert_eq!(changed.hidden_mask_symbol, '#');
        assert!(changed.cursor_enabled);
    }

    #[test]
    fn test_max_input_len_follows_code_length() {
        assert_eq!(FieldConfig::new().with_code_length(6).max_input_len(), 6);
    }

    #[test]
    fn test_reduction_scale_clamping() {
        let config = FieldConfig::new();
        assert_eq!(config.with_reduction_scale(-0.3).clamped_reduction_scale(), 0.0);
        assert_eq!(config.with_reduction_scale(1.7).clamped_reduction_scale(), 1.0);
        assert_eq!(config.with_reduction_scale(0.25).clamped_reduction_scale(), 0.25);
        assert_eq!(config.with_reduction_scale(f32::NAN).clamped_reduction_scale(), 0.0);
    }

    #[test]
    fn test_variant_toggles() {
        assert_eq!(ColorVariant::WholeFieldFocus.toggle(), ColorVariant::PerSegmentFill);
        assert_eq!(ColorVariant::PerSegmentFill.toggle(), ColorVariant::WholeFieldFocus);
        assert_eq!(LayoutMode::UnderlineBottom.toggle(), LayoutMode::CenteredText);
        assert_eq!(LayoutMode::CenteredText.toggle(), LayoutMode::UnderlineBottom);
    }

    #[test]
    fn test_padding_sums() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(padding.horizontal(), 4.0);
        assert_eq!(padding.vertical(), 6.0);
    }
}
