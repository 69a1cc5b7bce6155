//! Segment color resolution.
//!
//! # Variants
//!
//! **Whole-field focus** ([`ColorVariant::WholeFieldFocus`]): every segment
//! is `selected_color` while focused and `base_color` otherwise. Fill state
//! is ignored.
//!
//! **Per-segment fill** ([`ColorVariant::PerSegmentFill`]), highest
//! precedence first:
//!
//! | Condition | Color |
//! |-----------|-------|
//! | `index < filled_len` | `filled_color` |
//! | cursor enabled, focused, `index == filled_len` | `cursor_color` |
//! | focused, cursor disabled | `selected_color` |
//! | otherwise | `base_color` |
//!
//! All functions here are pure and cheap enough to call every frame.

use embedded_graphics::pixelcolor::Rgb565;

use crate::config::{ColorVariant, FieldConfig};

/// Color of segment `index`.
pub fn resolve_color(
    index: usize,
    filled_len: usize,
    focused: bool,
    config: &FieldConfig,
) -> Rgb565 {
    match config.color_variant {
        ColorVariant::WholeFieldFocus => {
            if focused {
                config.selected_color
            } else {
                config.base_color
            }
        }
        ColorVariant::PerSegmentFill => {
            if index < filled_len {
                config.filled_color
            } else if config.cursor_enabled && focused && index == filled_len {
                config.cursor_color
            } else if focused && !config.cursor_enabled {
                config.selected_color
            } else {
                config.base_color
            }
        }
    }
}

/// Colors of all `code_length` segments, in index order.
pub fn segment_colors(
    filled_len: usize,
    focused: bool,
    config: &FieldConfig,
) -> impl ExactSizeIterator<Item = Rgb565> + Clone + '_ {
    (0..config.code_length).map(move |index| resolve_color(index, filled_len, focused, config))
}

/// Segment that should show the caret, if any.
///
/// Only when the cursor is enabled, the field is focused and at least one
/// segment is still empty.
pub fn cursor_segment(
    filled_len: usize,
    focused: bool,
    config: &FieldConfig,
) -> Option<usize> {
    (config.cursor_enabled && focused && filled_len < config.code_length).then_some(filled_len)
}

// =============================================================================
// Tests
// =============================================================================
