//! Binary PPM (P6) serialization.

use alloc::format;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::pixel::PixelGrid;

/// Serialize a grid as binary PPM: the ASCII header
/// `P6\n<width> <height>\n255\n` followed by packed RGB bytes, no padding.
///
/// Write-only; this crate never reads PPM back.
pub fn encode_ppm(grid: &PixelGrid, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    encode(grid, &stop)
}

pub(crate) fn encode(grid: &PixelGrid, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    stop.check()?;
    let header = format!("P6\n{} {}\n255\n", grid.width(), grid.height());
    let mut out = Vec::with_capacity(header.len() + grid.pixels().len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(grid.pixels());
    Ok(out)
}
