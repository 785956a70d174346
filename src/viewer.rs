//! Session state for an interactive frontend.

use alloc::vec::Vec;

use enough::Stop;

use crate::bmp::BmpHeader;
use crate::decode::{DecodeOutput, DecodeRequest};
use crate::error::BmpError;
use crate::pixel::PixelGrid;
use crate::transform::{self, TransformState};
use crate::{ppm, resample};

/// The one piece of state a viewing session keeps: the originally decoded
/// grid, replaced wholesale when a new file is opened.
///
/// [`render`](Self::render) re-derives its output from that original on
/// every call, so repeated renders with the same [`TransformState`] are
/// byte-identical and parameter changes never accumulate onto previously
/// transformed pixels.
pub struct Viewer {
    header: BmpHeader,
    original: PixelGrid,
}

impl Viewer {
    /// Decode `data` and retain the result as the session's source image.
    pub fn open(data: &[u8], stop: impl Stop) -> Result<Self, BmpError> {
        Ok(Self::from_decoded(DecodeRequest::new(data).decode(stop)?))
    }

    /// Build a session from an already decoded image.
    pub fn from_decoded(decoded: DecodeOutput) -> Self {
        let (header, original) = decoded.into_parts();
        Self { header, original }
    }

    /// Metadata of the loaded file, for display.
    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// The untouched decoded grid.
    pub fn original(&self) -> &PixelGrid {
        &self.original
    }

    /// Recompute the display image for `state` and serialize it as PPM.
    pub fn render(&self, state: &TransformState, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        stop.check()?;
        let adjusted = transform::adjust(&self.original, state);
        stop.check()?;
        let scaled = resample::resize(&adjusted, state.scale);
        ppm::encode(&scaled, &stop)
    }
}
