//! Code entry simulator for desktop platforms.
//!
//! Plays the host role around the `code-underline` engine: it owns the entry
//! buffer, enforces the maximum length, tracks focus and redraws the field
//! using the embedded-graphics-simulator window.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `0-9`, `A-Z` | type a character |
//! | Backspace / Esc | delete last / clear |
//! | Tab | toggle focus |
//! | F1 | hidden mode |
//! | F2 | color variant |
//! | F3 | layout mode |
//! | F4 | caret |
//! | F5 | double-section underline |
//! | F6 | code length (4 / 6 / 8) |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod input;
mod timing;

use std::fmt::Write;
use std::thread;
use std::time::Instant;

use code_underline::colors::{BLACK, GRAY, GREEN, RED, WHITE, YELLOW};
use code_underline::styles::{CODE_FONT, LEFT_ALIGNED, STATUS_STYLE_WHITE};
use code_underline::{CodeField, ColorVariant, FieldConfig, FieldError, RenderState};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;

use crate::input::{Action, CodeInput};
use crate::timing::FRAME_TIME;

/// Window size in pixels.
const SCREEN_WIDTH: u32 = 320;
const SCREEN_HEIGHT: u32 = 120;

/// Field area: six 48px sections.
const FIELD_BOUNDS: Rectangle = Rectangle::new(Point::new(16, 12), Size::new(288, 64));

const STATUS_POS: Point = Point::new(4, 92);
const HINT_POS: Point = Point::new(4, 110);
const HINT: &str = "TAB focus F1 hide F2 color F3 mode F4 caret";

/// Code lengths cycled by F6.
const CODE_LENGTHS: [usize; 3] = [4, 6, 8];

/// Dark theme configuration for the simulator window.
const fn initial_config() -> FieldConfig {
    FieldConfig::new()
        .with_code_length(6)
        .with_reduction_scale(0.2)
        .with_stroke_width(3.0)
        .with_colors(GRAY, RED, GREEN, YELLOW)
        .with_text_color(WHITE)
        .with_color_variant(ColorVariant::PerSegmentFill)
        .with_cursor(true)
}

fn main() -> Result<(), FieldError> {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Code Underline Sim", &output_settings);

    let mut field = CodeField::new(initial_config(), CODE_FONT, FIELD_BOUNDS)?;
    let mut input = CodeInput::new(field.config().max_input_len());
    let mut focused = true;

    let mut status: String<64> = String::new();
    let desired = field.desired_size();
    write!(status, "desired {}x{}", desired.width as u32, desired.height as u32).ok();

    let mut dirty = true;

    loop {
        let frame_start = Instant::now();

        if dirty {
            display.clear(BLACK).ok();
            field.draw(&mut display, RenderState::new(input.as_str(), focused));
            Text::with_text_style(&status, STATUS_POS, STATUS_STYLE_WHITE, LEFT_ALIGNED)
                .draw(&mut display)
                .ok();
            Text::with_text_style(HINT, HINT_POS, STATUS_STYLE_WHITE, LEFT_ALIGNED)
                .draw(&mut display)
                .ok();
            dirty = false;
        }

        window.update(&display);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let Some(action) = Action::from_key_name(&keycode.name()) else {
                        continue;
                    };
                    apply(action, &mut field, &mut input, &mut focused, &mut status)?;
                    dirty = true;
                }
                _ => {}
            }
        }

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Apply one action and update the status line.
///
/// Configuration changes build a new `FieldConfig` and hand it to the field;
/// the previous one is never edited in place.
fn apply(
    action: Action,
    field: &mut CodeField<'_>,
    input: &mut CodeInput,
    focused: &mut bool,
    status: &mut String<64>,
) -> Result<(), FieldError> {
    let config = *field.config();
    status.clear();

    match action {
        Action::Type(c) => {
            if !input.push(c) {
                write!(status, "full ({} max)", input.max_len()).ok();
            }
        }
        Action::Backspace => {
            input.pop();
        }
        Action::Clear => input.clear(),
        Action::ToggleFocus => {
            *focused = !*focused;
            write!(status, "focus: {}", if *focused { "on" } else { "off" }).ok();
        }
        Action::ToggleHidden => {
            let next = config.with_hidden_mode(!config.hidden_mode, config.hidden_mask_symbol);
            field.reconfigure(next)?;
            write!(status, "hidden: {}", if next.hidden_mode { "on" } else { "off" }).ok();
        }
        Action::ToggleColorVariant => {
            let next = config.with_color_variant(config.color_variant.toggle());
            field.reconfigure(next)?;
            write!(status, "color: {}", next.color_variant.label()).ok();
        }
        Action::ToggleLayoutMode => {
            let next = config.with_layout_mode(config.layout_mode.toggle());
            field.reconfigure(next)?;
            write!(status, "layout: {}", next.layout_mode.label()).ok();
        }
        Action::ToggleCursor => {
            let next = config.with_cursor(!config.cursor_enabled);
            field.reconfigure(next)?;
            write!(status, "caret: {}", if next.cursor_enabled { "on" } else { "off" }).ok();
        }
        Action::ToggleUnderlineSpan => {
            let span = field.underline_span().toggle();
            field.set_underline_span(span);
            write!(status, "span: {span:?}").ok();
        }
        Action::CycleCodeLength => {
            let next_len = CODE_LENGTHS
                .iter()
                .copied()
                .find(|&len| len > config.code_length)
                .unwrap_or(CODE_LENGTHS[0]);
            let next = config.with_code_length(next_len);
            field.reconfigure(next)?;
            input.set_max_len(next.max_input_len());
            write!(status, "length: {next_len}").ok();
        }
    }

    if status.is_empty() {
        write!(status, "{}/{}", input.len(), input.max_len()).ok();
    }
    Ok(())
}
