//! IndexedImage: palette indices plus the palette they point into.

use crate::palette::Palette;

/// The canonical output of the pipeline.
///
/// Stores one `u8` palette index per pixel in row-major order, the image
/// dimensions, and the [`Palette`] the indices refer to. This is exactly what
/// an indexed-color container encoder needs.
///
/// # Example
///
/// ```
/// use bayer_dither::{IndexedImage, Palette};
///
/// let image = IndexedImage::new(vec![0, 3, 3, 0], 2, 2, Palette::green_ramp());
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.indices(), &[0, 3, 3, 0]);
/// assert_eq!(image.to_rgba().len(), 2 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl IndexedImage {
    /// Create a new `IndexedImage`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height` and that every
    /// index is inside the palette.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < palette.len()),
            "index out of palette range {}",
            palette.len()
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Palette indices as a slice.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Consume the image, returning the index buffer.
    #[inline]
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The palette the indices point into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Flattened RGBA palette table, 4 bytes per entry.
    pub fn palette_table(&self) -> Vec<u8> {
        self.palette.to_rgba_table()
    }

    /// Expand back to an RGBA buffer by looking up each index.
    ///
    /// The returned buffer has length `width * height * 4`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.indices.len() * 4);
        for &idx in &self.indices {
            rgba.extend_from_slice(&self.palette.color(idx as usize));
        }
        rgba
    }
}
