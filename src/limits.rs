use alloc::format;

use crate::error::BmpError;

/// Caps on what a decode call may produce.
///
/// All fields default to `None` (unlimited). Worth setting when the byte
/// buffer comes from an untrusted source, where a hostile header could
/// otherwise request an enormous pixel allocation.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Cap on total pixel count (width * height).
    pub max_pixels: Option<u64>,
}

impl Limits {
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpError> {
        if let Some(max) = self.max_width {
            if width > max {
                return Err(BmpError::LimitExceeded(format!(
                    "width {width} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_height {
            if height > max {
                return Err(BmpError::LimitExceeded(format!(
                    "height {height} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(BmpError::LimitExceeded(format!(
                    "pixel count {pixels} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }
}
