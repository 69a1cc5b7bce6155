//! Default color constants for code fields.
//!
//! Colors are `Rgb565`, the native format of the ST7789-class panels the
//! `embedded-graphics` ecosystem targets. Standard colors come from the
//! `RgbColor` trait constants so they match the crate's own values.
//!
//! These are only defaults: every color used for drawing is a field on
//! [`FieldConfig`](crate::FieldConfig) and can be overridden by the caller.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Default underline and text color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Default selected (focused) underline and caret color.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Used by the simulator for filled segments.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue. Default filled segment color.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow. Used by the simulator for the caret.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Dark gray for unfocused, empty segments on dark backgrounds.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
