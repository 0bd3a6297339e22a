//! Multi-level ordered (Bayer) dithering.
//!
//! Ordered dithering compares each pixel against a position-dependent
//! threshold from a tiled [`BayerMatrix`] instead of propagating
//! quantization error to neighbors. Every pixel is independent of every
//! other pixel, so the output does not depend on scan order.
//!
//! # Algorithm
//!
//! For a luminance value `v` at `(x, y)` and `N` output levels:
//!
//! ```text
//! g     = v/255 · (N-1)            continuous level position
//! base  = floor(g)                 lower candidate level
//! frac  = g - base                 position inside the bucket, 0..1
//! T     = (M[y%S][x%S] + 0.5)/S²   local threshold
//! L     = min(N-1, base + (frac >= T))
//! out   = round(L/(N-1) · 255)
//! ```
//!
//! The comparison is non-strict: a fraction exactly at the threshold rounds
//! up. All arithmetic is `f64` so output is bit-reproducible.

use super::bayer_matrix::BayerMatrix;
use crate::api::{check_levels, DitherError};

/// Ordered dithering to `levels` evenly spaced gray values.
///
/// # Example
///
/// ```
/// use bayer_dither::{BayerMatrix, OrderedDither};
///
/// let dither = OrderedDither::new(BayerMatrix::Bayer2, 4).unwrap();
/// let rgba = dither.dither(&[128, 128], 2);
///
/// assert_eq!(rgba, vec![170, 170, 170, 255, 85, 85, 85, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedDither {
    matrix: BayerMatrix,
    levels: usize,
}

impl OrderedDither {
    /// Create a ditherer for the given matrix and level count.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidLevels`] when `levels` is outside `2..=256`.
    pub fn new(matrix: BayerMatrix, levels: usize) -> Result<Self, DitherError> {
        check_levels(levels)?;
        Ok(Self { matrix, levels })
    }

    /// The threshold matrix in use.
    #[inline]
    pub fn matrix(&self) -> BayerMatrix {
        self.matrix
    }

    /// Number of output levels.
    #[inline]
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Output level index (`0..levels`) for luminance `v` at `(x, y)`.
    #[inline]
    pub fn level_at(&self, v: u8, x: usize, y: usize) -> usize {
        let top = (self.levels - 1) as f64;
        let g = v as f64 / 255.0 * top;
        let base = g.floor();
        let frac = g - base;
        let t = self.matrix.threshold(x, y);

        let promoted = if frac >= t { base + 1.0 } else { base };
        promoted.min(top) as usize
    }

    /// Gray value for a level index.
    #[inline]
    pub fn level_value(&self, level: usize) -> u8 {
        let top = (self.levels - 1) as f64;
        (level as f64 / top * 255.0).round() as u8
    }

    /// Dither a grayscale buffer into an RGBA buffer.
    ///
    /// `gray` holds one luminance byte per pixel, row-major. The output has
    /// `gray.len() * 4` bytes with R = G = B = the dithered value and
    /// alpha 255. Height is `gray.len() / width`; a trailing partial row is
    /// left untouched (all zero). A `width` of 0 processes nothing.
    pub fn dither(&self, gray: &[u8], width: usize) -> Vec<u8> {
        let mut out = vec![0u8; gray.len() * 4];
        let height = gray.len().checked_div(width).unwrap_or(0);

        for y in 0..height {
            for x in 0..width {
                let idx = y * width + x;
                let level = self.level_at(gray[idx], x, y);
                let value = self.level_value(level);

                let o = idx * 4;
                out[o..o + 4].copy_from_slice(&[value, value, value, 255]);
            }
        }

        out
    }
}

/// Dither a grayscale buffer with an already resolved matrix.
///
/// See [`OrderedDither::dither`] for the buffer layout.
///
/// # Errors
///
/// [`DitherError::InvalidLevels`] when `levels` is outside `2..=256`.
pub fn ordered_dither(
    gray: &[u8],
    width: usize,
    levels: usize,
    matrix: BayerMatrix,
) -> Result<Vec<u8>, DitherError> {
    Ok(OrderedDither::new(matrix, levels)?.dither(gray, width))
}

/// Dither a grayscale buffer, selecting the Bayer matrix by side length.
///
/// # Errors
///
/// - [`DitherError::UnsupportedMatrixSize`] when `matrix_size` is not 2, 4 or 8
/// - [`DitherError::InvalidLevels`] when `levels` is outside `2..=256`
///
/// Both are reported before any output is produced.
///
/// # Example
///
/// ```
/// use bayer_dither::{bayer_dither, DitherError};
///
/// let gray = vec![0, 64, 128, 255];
/// let rgba = bayer_dither(&gray, 2, 4, 8).unwrap();
/// assert_eq!(rgba.len(), gray.len() * 4);
///
/// assert_eq!(
///     bayer_dither(&gray, 2, 4, 3),
///     Err(DitherError::UnsupportedMatrixSize(3))
/// );
/// ```
pub fn bayer_dither(
    gray: &[u8],
    width: usize,
    levels: usize,
    matrix_size: usize,
) -> Result<Vec<u8>, DitherError> {
    let matrix = BayerMatrix::from_size(matrix_size)?;
    ordered_dither(gray, width, levels, matrix)
}
