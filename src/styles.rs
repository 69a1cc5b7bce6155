//! Fonts and text styles for code fields.
//!
//! The code font is exposed as `&MonoFont` so hosts can build
//! `MonoTextStyle::new(CODE_FONT, color)` with whatever text color the
//! configuration carries; only the color varies per field.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::WHITE;

/// Default font for entered characters (`ProFont` 24pt).
pub const CODE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Small white text on dark backgrounds.
pub const STATUS_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Left-aligned text. Used for status lines.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();
