//! Luminance extraction from RGBA pixel buffers.
//!
//! Two distinct capabilities live here:
//!
//! - [`to_grayscale`] / [`luminance_plane`]: full-precision luminance, the
//!   input of the ordered dither engine.
//! - [`quantize_grayscale`]: flat quantization to evenly spaced gray levels
//!   with no spatial dithering. It is a standalone utility and is never
//!   applied before dithering.

use crate::api::{check_levels, DitherError};

/// Red weight of the luminance formula.
pub const LUMA_R: f64 = 0.299;
/// Green weight of the luminance formula.
pub const LUMA_G: f64 = 0.587;
/// Blue weight of the luminance formula.
pub const LUMA_B: f64 = 0.114;

/// Perceptual luminance of one RGB triple.
///
/// `L = round(0.299·R + 0.587·G + 0.114·B)`
///
/// # Example
///
/// ```
/// use bayer_dither::luma;
///
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(255, 0, 0), 76);
/// ```
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let l = LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64;
    l.round().min(255.0) as u8
}

/// Collapse an RGBA buffer to luminance, keeping it four channels wide.
///
/// Every output pixel has R = G = B = luminance and the input alpha.
/// The returned buffer has the same length as `rgba`.
pub fn to_grayscale(rgba: &[u8]) -> Vec<u8> {
    debug_assert_eq!(rgba.len() % 4, 0, "RGBA buffer length must be a multiple of 4");

    let mut out = Vec::with_capacity(rgba.len());
    for px in rgba.chunks_exact(4) {
        let l = luma(px[0], px[1], px[2]);
        out.extend_from_slice(&[l, l, l, px[3]]);
    }
    out
}

/// Extract one luminance byte per pixel (row-major).
///
/// This is the grayscale buffer consumed by
/// [`ordered_dither`](crate::dither::ordered_dither). Alpha is dropped.
pub fn luminance_plane(rgba: &[u8]) -> Vec<u8> {
    debug_assert_eq!(rgba.len() % 4, 0, "RGBA buffer length must be a multiple of 4");

    rgba.chunks_exact(4)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect()
}

/// Collapse to luminance and snap each value to one of `levels` flat steps.
///
/// `step = 255/(levels-1)`, output `round(round(L/step)·step)`. Alpha is
/// preserved. No spatial pattern is involved, so smooth gradients band.
///
/// # Errors
///
/// [`DitherError::InvalidLevels`] when `levels` is outside `2..=256`.
pub fn quantize_grayscale(rgba: &[u8], levels: usize) -> Result<Vec<u8>, DitherError> {
    check_levels(levels)?;
    debug_assert_eq!(rgba.len() % 4, 0, "RGBA buffer length must be a multiple of 4");

    let step = 255.0 / (levels - 1) as f64;
    let mut out = Vec::with_capacity(rgba.len());
    for px in rgba.chunks_exact(4) {
        let l = luma(px[0], px[1], px[2]) as f64;
        let q = ((l / step).round() * step).round().min(255.0) as u8;
        out.extend_from_slice(&[q, q, q, px[3]]);
    }
    Ok(out)
}
