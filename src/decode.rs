use enough::Stop;

use crate::bmp::{self, BmpHeader};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelGrid;

/// Builder for a BMP decode call.
///
/// ```no_run
/// use bmpview::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// # Ok::<(), bmpview::BmpError>(())
/// ```
#[derive(Clone, Copy)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    /// A request over one complete BMP file's bytes. No streaming; the
    /// whole buffer must be present before decoding starts.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource limits to the decode.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode. Errors are terminal: no partial grid is returned.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, BmpError> {
        bmp::decode(self.data, self.limits, &stop)
    }
}

/// A decoded image: the parsed header metadata plus the top-down grid.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    header: BmpHeader,
    grid: PixelGrid,
}

impl DecodeOutput {
    pub(crate) fn new(header: BmpHeader, grid: PixelGrid) -> Self {
        Self { header, grid }
    }

    /// Metadata parsed from the file headers.
    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// The decoded pixel grid.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Take the grid, dropping the header.
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    /// Split into header and grid.
    pub fn into_parts(self) -> (BmpHeader, PixelGrid) {
        (self.header, self.grid)
    }
}
