//! Channel masking and brightness scaling.

use alloc::vec::Vec;

use crate::pixel::PixelGrid;

/// Display parameters, passed in whole on every recompute.
///
/// `brightness` and `scale` are percentages of the original intensity and
/// size; the channel flags zero a channel out entirely when false. The
/// caller owns this value; the pipeline keeps no notion of a "current"
/// setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransformState {
    /// Percent of original intensity. Values above 100 are tolerated and
    /// saturate at 255 per channel.
    pub brightness: u32,
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    /// Percent of original dimensions; zero and below collapse to a 1x1
    /// black grid.
    pub scale: i32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            brightness: 100,
            red: true,
            green: true,
            blue: true,
            scale: 100,
        }
    }
}

/// Apply channel masks and brightness to every pixel, masking first.
///
/// Returns a grid of identical dimensions. Call this on the originally
/// decoded grid, never on a previous output: re-deriving from the
/// untouched source keeps repeated adjustments from compounding rounding
/// error.
pub fn adjust(original: &PixelGrid, state: &TransformState) -> PixelGrid {
    let factor = f64::from(state.brightness) / 100.0;
    let mut data = Vec::with_capacity(original.pixels().len());

    for px in original.pixels().chunks_exact(3) {
        data.push(scale_channel(if state.red { px[0] } else { 0 }, factor));
        data.push(scale_channel(if state.green { px[1] } else { 0 }, factor));
        data.push(scale_channel(if state.blue { px[2] } else { 0 }, factor));
    }

    PixelGrid::from_parts(original.width(), original.height(), data)
}

/// Scale one channel, truncating toward zero and clamping to 0..=255.
fn scale_channel(value: u8, factor: f64) -> u8 {
    (f64::from(value) * factor).min(255.0) as u8
}
