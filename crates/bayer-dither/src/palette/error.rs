//! Error types for palette construction.

use std::fmt;

/// Maximum number of entries an indexed image can address with `u8` indices.
pub const MAX_PALETTE_LEN: usize = 256;

/// Error type for palette validation.
///
/// Returned by [`Palette::new`](super::Palette::new) when the color list
/// cannot be addressed by a one-byte index buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// More colors than a `u8` index can address
    TooManyColors(usize),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::TooManyColors(len) => {
                write!(
                    f,
                    "palette has {} colors, at most {} are supported",
                    len, MAX_PALETTE_LEN
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}
