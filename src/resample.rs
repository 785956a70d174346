//! Nearest-neighbor resampling.

use alloc::vec::Vec;

use crate::pixel::PixelGrid;

/// Resize to `percent` of the original dimensions by nearest-neighbor
/// sampling, so every output pixel is a copy of exactly one source pixel.
///
/// A percentage of zero or below yields a single black pixel rather than
/// an error; positive percentages floor to at least 1x1. This stage never
/// fails.
pub fn resize(grid: &PixelGrid, percent: i32) -> PixelGrid {
    if percent <= 0 {
        return PixelGrid::from_parts(1, 1, alloc::vec![0u8; 3]);
    }

    let percent = percent as u64;
    let old_w = u64::from(grid.width());
    let old_h = u64::from(grid.height());
    let new_w = (old_w * percent / 100).clamp(1, u64::from(u32::MAX));
    let new_h = (old_h * percent / 100).clamp(1, u64::from(u32::MAX));

    let src = grid.pixels();
    let src_row_len = grid.width() as usize * 3;
    let mut data = Vec::with_capacity((new_w * new_h) as usize * 3);

    for y in 0..new_h {
        // floor(y * old / new) < old for all y < new, so sampling never
        // leaves the source grid.
        let src_y = (y * old_h / new_h) as usize;
        let row = &src[src_y * src_row_len..(src_y + 1) * src_row_len];
        for x in 0..new_w {
            let src_x = (x * old_w / new_w) as usize * 3;
            data.extend_from_slice(&row[src_x..src_x + 3]);
        }
    }

    PixelGrid::from_parts(new_w as u32, new_h as u32, data)
}
