//! Fixed color palette with nearest-color indexing.
//!
//! Matching uses squared Euclidean distance in plain RGB. Alpha is stored
//! with each entry for the output palette table but takes no part in
//! matching.

use super::error::{PaletteError, MAX_PALETTE_LEN};

/// Four-step green ramp, darkest first.
pub const GREEN_RAMP: [[u8; 4]; 4] = [
    [0, 34, 0, 255],      // very dark green
    [64, 120, 64, 255],   // dark
    [144, 186, 144, 255], // mid
    [210, 235, 210, 255], // light
];

/// An ordered set of RGBA colors addressed by `u8` index.
///
/// Entry order defines the index written for each color. Lookups are a
/// linear scan, O(pixels · entries), which is adequate for the small
/// palettes indexed images use.
///
/// # Example
///
/// ```
/// use bayer_dither::Palette;
///
/// let palette = Palette::green_ramp();
/// assert_eq!(palette.len(), 4);
/// assert_eq!(palette.nearest(0, 34, 0), 0);
/// assert_eq!(palette.nearest(255, 255, 255), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 4]>,
}

impl Palette {
    /// Create a palette from RGBA entries.
    ///
    /// Duplicate entries are allowed; the first occurrence wins every match.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] when `colors` is empty
    /// - [`PaletteError::TooManyColors`] when there are more than 256 entries
    pub fn new(colors: &[[u8; 4]]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_PALETTE_LEN {
            return Err(PaletteError::TooManyColors(colors.len()));
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// The built-in four-entry [`GREEN_RAMP`].
    pub fn green_ramp() -> Self {
        Self {
            colors: GREEN_RAMP.to_vec(),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// RGBA entry at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> [u8; 4] {
        self.colors[idx]
    }

    /// All entries in index order.
    #[inline]
    pub fn colors(&self) -> &[[u8; 4]] {
        &self.colors
    }

    /// Index of the entry closest to `(r, g, b)`.
    ///
    /// Ties go to the earliest entry: a later entry must be strictly closer
    /// to replace the current best.
    pub fn nearest(&self, r: u8, g: u8, b: u8) -> u8 {
        let mut best = 0;
        let mut best_dist = u32::MAX;

        for (i, c) in self.colors.iter().enumerate() {
            let dist = distance_sq([r, g, b], [c[0], c[1], c[2]]);
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }

        best as u8
    }

    /// Map every RGBA pixel to its nearest palette index.
    ///
    /// Returns `width * height` indices in row-major order. `rgba` must
    /// hold exactly `width * height * 4` bytes.
    pub fn index_pixels(&self, rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
        debug_assert_eq!(
            rgba.len(),
            width * height * 4,
            "RGBA length ({}) must match width * height * 4 ({}x{}x4={})",
            rgba.len(),
            width,
            height,
            width * height * 4,
        );

        let mut indices = vec![0u8; width * height];
        for (idx, px) in indices.iter_mut().zip(rgba.chunks_exact(4)) {
            *idx = self.nearest(px[0], px[1], px[2]);
        }
        indices
    }

    /// Flattened `[R, G, B, A, R, G, B, A, ...]` table, in index order.
    pub fn to_rgba_table(&self) -> Vec<u8> {
        self.colors.iter().flatten().copied().collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::green_ramp()
    }
}

#[inline]
fn distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

/// Index an RGBA buffer against the green ramp.
///
/// Returns the index buffer (`width * height` bytes) and the flattened RGBA
/// palette table (16 bytes), ready for an indexed-color encoder.
///
/// # Example
///
/// ```
/// use bayer_dither::encode_palette_index;
///
/// let rgba = [0, 34, 0, 255, 255, 255, 255, 255];
/// let (indices, table) = encode_palette_index(&rgba, 2, 1);
///
/// assert_eq!(indices, vec![0, 3]);
/// assert_eq!(table.len(), 16);
/// ```
pub fn encode_palette_index(rgba: &[u8], width: usize, height: usize) -> (Vec<u8>, Vec<u8>) {
    let palette = Palette::green_ramp();
    let indices = palette.index_pixels(rgba, width, height);
    (indices, palette.to_rgba_table())
}
