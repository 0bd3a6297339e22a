//! Color transforms on raw RGBA buffers
//!
//! - [`luminance`](self::luminance): perceptual grayscale conversion
//! - [`tint`](self::tint): multiplicative channel tint
//!
//! Every function allocates and returns a new buffer; inputs are never
//! mutated.

mod luminance;
mod tint;

pub use luminance::{
    luma, luminance_plane, quantize_grayscale, to_grayscale, LUMA_B, LUMA_G, LUMA_R,
};
pub use tint::{make_green, Tint};
