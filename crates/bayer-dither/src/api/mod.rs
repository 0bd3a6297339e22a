//! Public API for the bayer-dither crate.
//!
//! This module provides the high-level API: [`GreenDitherer`] builder and
//! [`DitherError`] unified error type.

mod builder;
mod error;

pub use builder::{DitherStages, GreenDitherer, DEFAULT_LEVELS};
pub(crate) use error::check_levels;
pub use error::DitherError;
