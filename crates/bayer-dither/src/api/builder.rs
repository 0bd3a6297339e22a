//! GreenDitherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`GreenDitherer`] chains the whole pipeline (luminance, ordered dither,
//! optional tint, palette indexing) behind a fluent configuration API.

use crate::color::{luminance_plane, to_grayscale, Tint};
use crate::dither::{BayerMatrix, OrderedDither};
use crate::output::IndexedImage;
use crate::palette::Palette;

use super::error::DitherError;

/// Default number of gray levels the ditherer quantizes to.
pub const DEFAULT_LEVELS: usize = 4;

/// High-level pipeline builder.
///
/// # Design
///
/// - Defaults reproduce the reference look: 4 levels, 8x8 Bayer matrix,
///   [`Tint::GREEN`], [`Palette::green_ramp`]
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self` so the builder is reusable
///   across images
/// - Level count is validated when dithering, before any buffer is built
///
/// # Example
///
/// ```
/// use bayer_dither::{BayerMatrix, GreenDitherer};
///
/// let ditherer = GreenDitherer::new()
///     .levels(4)
///     .matrix(BayerMatrix::Bayer4);
///
/// let rgba = vec![128u8; 4 * 4 * 4];
/// let image = ditherer.dither(&rgba, 4, 4).unwrap();
///
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.indices().len(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct GreenDitherer {
    levels: usize,
    matrix: BayerMatrix,
    tint: Option<Tint>,
    palette: Palette,
}

/// Every intermediate buffer of one pipeline run.
///
/// All RGBA buffers have `width * height * 4` bytes.
#[derive(Debug, Clone)]
pub struct DitherStages {
    /// Luminance-collapsed input, alpha preserved
    pub gray: Vec<u8>,
    /// Ordered dither output, alpha 255
    pub dithered: Vec<u8>,
    /// Tinted dither output, `None` when the tint pass is disabled
    pub tinted: Option<Vec<u8>>,
    /// Final palette indices
    pub indexed: IndexedImage,
}

impl GreenDitherer {
    /// Create a ditherer with the default configuration.
    pub fn new() -> Self {
        Self {
            levels: DEFAULT_LEVELS,
            matrix: BayerMatrix::default(),
            tint: Some(Tint::GREEN),
            palette: Palette::green_ramp(),
        }
    }

    /// Set the number of gray levels (2..=256).
    #[inline]
    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Set the threshold matrix.
    #[inline]
    pub fn matrix(mut self, matrix: BayerMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    /// Set the threshold matrix by side length.
    ///
    /// # Errors
    ///
    /// [`DitherError::UnsupportedMatrixSize`] for sizes other than 2, 4, 8.
    pub fn matrix_size(self, size: usize) -> Result<Self, DitherError> {
        Ok(self.matrix(BayerMatrix::from_size(size)?))
    }

    /// Set the tint pass; `None` disables it.
    #[inline]
    pub fn tint(mut self, tint: Option<Tint>) -> Self {
        self.tint = tint;
        self
    }

    /// Set the output palette.
    #[inline]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Run the pipeline on an RGBA buffer.
    ///
    /// `rgba` must hold `width * height * 4` bytes.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidLevels`] when the configured level count is
    /// outside `2..=256`.
    pub fn dither(
        &self,
        rgba: &[u8],
        width: usize,
        height: usize,
    ) -> Result<IndexedImage, DitherError> {
        let engine = OrderedDither::new(self.matrix, self.levels)?;
        debug_assert_eq!(rgba.len(), width * height * 4);

        let gray = luminance_plane(rgba);
        let dithered = engine.dither(&gray, width);
        let colored = match &self.tint {
            Some(tint) => tint.apply(&dithered),
            None => dithered,
        };

        let indices = self.palette.index_pixels(&colored, width, height);
        Ok(IndexedImage::new(indices, width, height, self.palette.clone()))
    }

    /// Run the pipeline, keeping every intermediate buffer.
    ///
    /// # Errors
    ///
    /// Same as [`dither()`](Self::dither).
    pub fn dither_stages(
        &self,
        rgba: &[u8],
        width: usize,
        height: usize,
    ) -> Result<DitherStages, DitherError> {
        let engine = OrderedDither::new(self.matrix, self.levels)?;
        debug_assert_eq!(rgba.len(), width * height * 4);

        let gray = to_grayscale(rgba);
        let plane: Vec<u8> = gray.chunks_exact(4).map(|px| px[0]).collect();
        let dithered = engine.dither(&plane, width);
        let tinted = self.tint.map(|tint| tint.apply(&dithered));

        let final_rgba = tinted.as_deref().unwrap_or(&dithered);
        let indices = self.palette.index_pixels(final_rgba, width, height);
        let indexed = IndexedImage::new(indices, width, height, self.palette.clone());

        Ok(DitherStages {
            gray,
            dithered,
            tinted,
            indexed,
        })
    }
}

impl Default for GreenDitherer {
    fn default() -> Self {
        Self::new()
    }
}
