//! Unified error type for the bayer-dither public API.
//!
//! [`DitherError`] covers every way a core operation can refuse its input.
//! All checks run before any output buffer is allocated, so a failing call
//! never produces a partial image.

use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the bayer-dither public API.
///
/// # Example
///
/// ```
/// use bayer_dither::{BayerMatrix, DitherError};
///
/// let err = BayerMatrix::from_size(3).unwrap_err();
/// assert_eq!(err, DitherError::UnsupportedMatrixSize(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// Requested Bayer matrix size is not one of 2, 4 or 8
    UnsupportedMatrixSize(usize),
    /// Level count outside `2..=256`
    InvalidLevels(usize),
    /// Palette validation error
    Palette(PaletteError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::UnsupportedMatrixSize(size) => write!(
                f,
                "unsupported Bayer matrix size {} (expected 2, 4 or 8)",
                size
            ),
            DitherError::InvalidLevels(levels) => write!(
                f,
                "invalid level count {} (expected 2 to 256)",
                levels
            ),
            DitherError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::Palette(err)
    }
}

/// Check that `levels` is a usable level count.
pub(crate) fn check_levels(levels: usize) -> Result<(), DitherError> {
    if (2..=256).contains(&levels) {
        Ok(())
    } else {
        Err(DitherError::InvalidLevels(levels))
    }
}
