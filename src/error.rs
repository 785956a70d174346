use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding and PPM encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("not a BMP file: {0}")]
    InvalidFormat(String),

    #[error("unsupported BMP feature: {0}")]
    UnsupportedFeature(String),

    #[error("unsupported bit depth: {0} bits per pixel")]
    UnsupportedDepth(u16),

    #[error("unexpected end of input")]
    TruncatedData,

    #[error("palette index {index} out of range (palette has {palette_len} entries)")]
    PaletteIndexOutOfRange { index: usize, palette_len: usize },

    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
