use bayer_dither::DitherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG color type: {0}")]
    UnsupportedColorType(String),

    #[error("Image buffer is {actual} bytes, expected {expected} for {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<png::DecodingError> for RenderError {
    fn from(e: png::DecodingError) -> Self {
        RenderError::PngDecode(e.to_string())
    }
}

impl From<png::EncodingError> for RenderError {
    fn from(e: png::EncodingError) -> Self {
        RenderError::PngEncode(e.to_string())
    }
}
