//! Ordered dithering.
//!
//! This module provides the Bayer threshold matrices and the multi-level
//! ordered dither engine built on them.
//!
//! # Comparison with Error Diffusion
//!
//! | Aspect | Ordered (Bayer) | Error Diffusion |
//! |--------|-----------------|-----------------|
//! | Pattern | Regular cross-hatch | Organic, varies by kernel |
//! | Parallelizable | Yes (per-pixel) | No (neighbor dependencies) |
//! | Deterministic per position | Yes | No |
//!
//! Error diffusion is not provided.
//!
//! # Example
//!
//! ```
//! use bayer_dither::{luminance_plane, BayerMatrix, OrderedDither};
//!
//! let rgba = vec![200, 120, 40, 255, 10, 10, 10, 255];
//! let gray = luminance_plane(&rgba);
//!
//! let dither = OrderedDither::new(BayerMatrix::Bayer8, 4).unwrap();
//! let out = dither.dither(&gray, 2);
//! assert_eq!(out.len(), rgba.len());
//! ```

mod bayer_matrix;
mod ordered;

pub use bayer_matrix::BayerMatrix;
pub use ordered::{bayer_dither, ordered_dither, OrderedDither};
