//! Per-channel multiplicative tint for grayscale-valued images.

/// Channel multipliers applied to a gray value.
///
/// The gray value is read from the red channel of each pixel (the input is
/// expected to have R = G = B). Each output channel is `round(gray·factor)`,
/// saturating at 255. Alpha passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    /// Red multiplier
    pub red: f64,
    /// Green multiplier
    pub green: f64,
    /// Blue multiplier
    pub blue: f64,
}

impl Tint {
    /// Soft green: red scaled by 0.85, blue by 0.75, green kept as-is.
    pub const GREEN: Self = Self {
        red: 0.85,
        green: 1.0,
        blue: 0.75,
    };

    /// Create a tint from channel multipliers.
    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Apply the tint to an RGBA buffer, returning a new buffer.
    pub fn apply(&self, rgba: &[u8]) -> Vec<u8> {
        debug_assert_eq!(rgba.len() % 4, 0, "RGBA buffer length must be a multiple of 4");

        let mut out = Vec::with_capacity(rgba.len());
        for px in rgba.chunks_exact(4) {
            let gray = px[0] as f64;
            out.extend_from_slice(&[
                scale(gray, self.red),
                scale(gray, self.green),
                scale(gray, self.blue),
                px[3],
            ]);
        }
        out
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::GREEN
    }
}

#[inline]
fn scale(gray: f64, factor: f64) -> u8 {
    (gray * factor).round().clamp(0.0, 255.0) as u8
}

/// Apply [`Tint::GREEN`] to a grayscale-valued RGBA buffer.
///
/// # Example
///
/// ```
/// use bayer_dither::make_green;
///
/// assert_eq!(make_green(&[170, 170, 170, 255]), vec![145, 170, 128, 255]);
/// ```
pub fn make_green(rgba: &[u8]) -> Vec<u8> {
    Tint::GREEN.apply(rgba)
}
