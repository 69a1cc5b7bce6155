//! Layout and color-state engine for segmented code entry fields.
//!
//! A code field is a row of `code_length` equal-width underline segments
//! beneath a short value such as a PIN or a one-time code. This crate computes
//! everything a host needs to draw one:
//!
//! - [`layout`]: segment geometry, text baseline and desired size
//! - [`color_state`]: per-segment colors for both color variants
//! - [`glyphs`]: glyph positions, with hidden-mode masking
//! - [`config`]: the immutable [`FieldConfig`] and its defaults
//! - [`render`]: `embedded-graphics` draw adapter and the [`CodeField`] helper
//!
//! The core (`layout`, `color_state`, `glyphs`) is a set of pure functions
//! over explicit inputs. It keeps no state between calls and never allocates.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the library itself stays `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod log;

pub mod color_state;
pub mod colors;
pub mod config;
pub mod error;
pub mod geometry;
pub mod glyphs;
pub mod layout;
pub mod render;
pub mod state;
pub mod styles;

// Re-export commonly used items
pub use color_state::{cursor_segment, resolve_color, segment_colors};
pub use config::{ColorVariant, FieldConfig, LayoutMode, Padding};
pub use error::FieldError;
pub use geometry::SegmentGeometry;
pub use glyphs::{GlyphMetrics, ProjectedGlyph, UnmeasuredGlyphs, project_glyphs};
pub use layout::{DesiredSize, Layout, SizeConstraint, compute_layout, measure};
pub use render::{CodeField, UnderlineSpan};
pub use state::RenderState;
