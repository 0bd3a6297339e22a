//! Palette types and nearest-color indexing
//!
//! This module provides the [`Palette`] type, the built-in [`GREEN_RAMP`]
//! and the error type for palette validation.

mod error;
mod palette;

pub use error::{PaletteError, MAX_PALETTE_LEN};
pub use palette::{encode_palette_index, Palette, GREEN_RAMP};
