//! Canonical Bayer threshold matrices.
//!
//! The three supported matrices are hand-authored constants. Each is a
//! permutation of `0..S²` laid out so that consecutive thresholds are spread
//! as far apart as possible, which is what gives ordered dithering its even
//! cross-hatch texture. Only sizes 2, 4 and 8 exist; other sizes are
//! rejected instead of generated.

use crate::api::DitherError;

/// 2x2 Bayer matrix
static BAYER_2: [[u8; 2]; 2] = [[0, 2], [3, 1]];

/// 4x4 Bayer matrix
static BAYER_4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// 8x8 Bayer matrix
static BAYER_8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// One of the supported Bayer threshold matrices.
///
/// Lookups tile the matrix over the image plane: the value at `(x, y)` is
/// `M[y mod S][x mod S]`, so pixels with the same coordinates modulo `S`
/// always receive the same threshold.
///
/// # Example
///
/// ```
/// use bayer_dither::BayerMatrix;
///
/// let m = BayerMatrix::from_size(2).unwrap();
/// assert_eq!(m.value(1, 0), 2);
/// assert_eq!(m.value(3, 2), 2); // tiled
/// assert_eq!(m.threshold(0, 0), 0.125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BayerMatrix {
    /// 2x2, coarse four-step pattern
    Bayer2,
    /// 4x4, visibly "pixel" texture
    Bayer4,
    /// 8x8, smoothest transitions
    #[default]
    Bayer8,
}

impl BayerMatrix {
    /// All supported matrices, smallest first.
    pub const ALL: [BayerMatrix; 3] = [
        BayerMatrix::Bayer2,
        BayerMatrix::Bayer4,
        BayerMatrix::Bayer8,
    ];

    /// Look up the matrix for a side length.
    ///
    /// # Errors
    ///
    /// [`DitherError::UnsupportedMatrixSize`] for anything other than 2, 4 or 8.
    pub fn from_size(size: usize) -> Result<Self, DitherError> {
        match size {
            2 => Ok(BayerMatrix::Bayer2),
            4 => Ok(BayerMatrix::Bayer4),
            8 => Ok(BayerMatrix::Bayer8),
            other => Err(DitherError::UnsupportedMatrixSize(other)),
        }
    }

    /// Side length `S`.
    #[inline]
    pub fn size(self) -> usize {
        match self {
            BayerMatrix::Bayer2 => 2,
            BayerMatrix::Bayer4 => 4,
            BayerMatrix::Bayer8 => 8,
        }
    }

    /// Number of cells, `S²`.
    #[inline]
    pub fn cells(self) -> usize {
        self.size() * self.size()
    }

    /// Raw matrix value at `(x, y)`, tiled over the plane.
    #[inline]
    pub fn value(self, x: usize, y: usize) -> u8 {
        match self {
            BayerMatrix::Bayer2 => BAYER_2[y % 2][x % 2],
            BayerMatrix::Bayer4 => BAYER_4[y % 4][x % 4],
            BayerMatrix::Bayer8 => BAYER_8[y % 8][x % 8],
        }
    }

    /// Normalized threshold at `(x, y)`: `(M + 0.5) / S²`.
    ///
    /// The half-cell offset centers each threshold inside its bucket, so
    /// the thresholds span `(0, 1)` symmetrically.
    #[inline]
    pub fn threshold(self, x: usize, y: usize) -> f64 {
        (self.value(x, y) as f64 + 0.5) / self.cells() as f64
    }

    /// Matrix rows, for display and inspection.
    pub fn rows(self) -> Vec<Vec<u8>> {
        match self {
            BayerMatrix::Bayer2 => BAYER_2.iter().map(|r| r.to_vec()).collect(),
            BayerMatrix::Bayer4 => BAYER_4.iter().map(|r| r.to_vec()).collect(),
            BayerMatrix::Bayer8 => BAYER_8.iter().map(|r| r.to_vec()).collect(),
        }
    }
}

impl TryFrom<usize> for BayerMatrix {
    type Error = DitherError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::from_size(size)
    }
}
