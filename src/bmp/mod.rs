//! Uncompressed BMP decoding (internal).
//!
//! Use [`crate::DecodeRequest`] for pixel decoding and
//! [`BmpHeader::parse`] for a header-only probe.

mod decode;

pub use decode::{BmpHeader, Depth};

use enough::Stop;

use crate::decode::DecodeOutput;
use crate::error::BmpError;
use crate::limits::Limits;

/// Decode a complete BMP byte buffer into header metadata plus a
/// canonical top-down RGB grid.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, BmpError> {
    let header = decode::parse_header(data)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }
    stop.check()?;
    let palette = decode::read_palette(data, &header)?;
    let grid = decode::decode_pixels(data, &header, &palette, stop)?;
    Ok(DecodeOutput::new(header, grid))
}
