#![allow(clippy::module_inception)]

//! bayer-dither: ordered dithering and fixed-palette indexing
//!
//! This library turns an RGBA bitmap into a stylized low-color-depth image:
//! luminance grayscale, multi-level ordered (Bayer) dithering, an optional
//! green tint, and nearest-color indexing into a small fixed palette. It
//! works on raw in-memory buffers only; decoding and encoding image files is
//! left to the caller.
//!
//! # Quick Start
//!
//! The [`GreenDitherer`] builder is the primary entry point:
//!
//! ```
//! use bayer_dither::GreenDitherer;
//!
//! let rgba = vec![128u8; 2 * 2 * 4];
//! let image = GreenDitherer::new().dither(&rgba, 2, 2).unwrap();
//!
//! assert_eq!(image.width(), 2);
//! assert_eq!(image.indices().len(), 4);
//! assert_eq!(image.palette_table().len(), 16);
//! ```
//!
//! # Building Blocks
//!
//! Each stage is also available on its own:
//!
//! ```
//! use bayer_dither::{bayer_dither, encode_palette_index, make_green, luminance_plane};
//!
//! let rgba = vec![200, 100, 50, 255, 20, 40, 60, 255];
//! let gray = luminance_plane(&rgba);
//! let dithered = bayer_dither(&gray, 2, 4, 8).unwrap();
//! let tinted = make_green(&dithered);
//! let (indices, table) = encode_palette_index(&tinted, 2, 1);
//!
//! assert_eq!(indices.len(), 2);
//! assert_eq!(table.len(), 16);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! RGBA input
//!     |
//!     v
//! luminance  L = round(0.299 R + 0.587 G + 0.114 B)
//!     |
//!     v
//! ordered dither  (Bayer 2x2 / 4x4 / 8x8, N levels, alpha -> 255)
//!     |
//!     v
//! tint  (optional, R x0.85, B x0.75)
//!     |
//!     v
//! nearest palette entry  (squared RGB distance, earliest entry wins ties)
//!     |
//!     v
//! IndexedImage  (indices + RGBA palette table)
//! ```
//!
//! # Buffer Conventions
//!
//! - RGBA buffers are interleaved `R, G, B, A` bytes, `width * height * 4`
//!   long. A mismatched length is a caller error and is only checked with
//!   `debug_assert!`.
//! - Every operation allocates and returns a new buffer and never mutates
//!   its input.
//! - Matrices and the built-in palette are immutable statics, so all types
//!   can be shared freely across threads.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;


pub use api::{DitherError, DitherStages, GreenDitherer, DEFAULT_LEVELS};
pub use color::{luma, luminance_plane, make_green, quantize_grayscale, to_grayscale, Tint};
pub use dither::{bayer_dither, ordered_dither, BayerMatrix, OrderedDither};
pub use output::IndexedImage;
pub use palette::{encode_palette_index, Palette, PaletteError, GREEN_RAMP};
