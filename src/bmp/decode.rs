//! Uncompressed BMP decoder: 24-bit truecolor and 1/4/8-bit paletted.
//!
//! Header fields live at fixed offsets from the start of the file, so
//! parsing indexes the buffer directly instead of streaming through a
//! cursor. Compressed variants (RLE, embedded JPEG/PNG) and 16/32-bit
//! depths are rejected up front.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::pixel::PixelGrid;

// ── Fixed header offsets ────────────────────────────────────────────

// BITMAPFILEHEADER + BITMAPINFOHEADER field offsets.
const FILE_SIZE: usize = 2;
const DATA_OFFSET: usize = 10;
const HEADER_SIZE: usize = 14;
const WIDTH: usize = 18;
const HEIGHT: usize = 22;
const BITS_PER_PIXEL: usize = 28;
const COMPRESSION: usize = 30;
const COLORS_USED: usize = 46;

/// Smallest buffer that holds both fixed headers.
const MIN_HEADER_LEN: usize = 54;

// ── Bit depth ───────────────────────────────────────────────────────

/// The bit depths this decoder accepts.
///
/// Depths of 8 bits and below index into a color table; 24-bit stores one
/// B,G,R triple per pixel. No other depth is ever added at runtime, so
/// dispatch is a closed enum with one row handler per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Depth {
    /// 1 bit per pixel, two palette entries.
    Pal1,
    /// 4 bits per pixel, packed two pixels per byte.
    Pal4,
    /// 8 bits per pixel, one palette index per byte.
    Pal8,
    /// 24 bits per pixel, B,G,R file order.
    Rgb24,
}

impl Depth {
    fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            1 => Some(Self::Pal1),
            4 => Some(Self::Pal4),
            8 => Some(Self::Pal8),
            24 => Some(Self::Rgb24),
            _ => None,
        }
    }

    /// Bits per pixel as stored in the file header.
    pub fn bits(self) -> u16 {
        match self {
            Self::Pal1 => 1,
            Self::Pal4 => 4,
            Self::Pal8 => 8,
            Self::Rgb24 => 24,
        }
    }

    /// Whether pixels are palette indices rather than literal colors.
    pub fn paletted(self) -> bool {
        !matches!(self, Self::Rgb24)
    }

    /// Payload bytes in one row of `width` pixels, before padding.
    pub fn row_bytes(self, width: usize) -> usize {
        match self {
            Self::Pal1 => width.div_ceil(8),
            Self::Pal4 => width.div_ceil(2),
            Self::Pal8 => width,
            Self::Rgb24 => width * 3,
        }
    }

    /// Stored bytes in one row: `row_bytes` rounded up to a 4-byte
    /// boundary.
    pub fn row_stride(self, width: usize) -> usize {
        self.row_bytes(width).div_ceil(4) * 4
    }
}

// ── Header ──────────────────────────────────────────────────────────

/// Metadata extracted from the BMP file and info headers.
///
/// Immutable once parsed. `height` is the absolute pixel height; the
/// stored sign survives only as [`bottom_up`](Self::bottom_up), which
/// drives the single row flip applied after decoding.
#[derive(Clone, Debug)]
pub struct BmpHeader {
    /// Total file size as recorded in the file header (not validated
    /// against the actual buffer length).
    pub file_size: u32,
    /// Byte offset of the first stored pixel row.
    pub data_offset: u32,
    /// Size of the info header; the color table starts at `14 + header_size`.
    pub header_size: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels (absolute value of the stored field).
    pub height: u32,
    /// True when the file stores rows bottom-up (positive stored height),
    /// meaning the first stored row is the visual bottom.
    pub bottom_up: bool,
    /// Bit depth.
    pub depth: Depth,
    /// Compression code; always 0 for files this decoder accepts.
    pub compression: u32,
    /// Color-table entry count, defaulted to `2^depth` when the stored
    /// field is zero and the depth is paletted.
    pub palette_len: u32,
}

impl BmpHeader {
    /// Parse the headers without touching pixel data.
    ///
    /// This is the probe path a frontend uses to show file metadata.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        parse_header(data)
    }
}

fn u16_at(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn u32_at(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn i32_at(data: &[u8], at: usize) -> i32 {
    u32_at(data, at) as i32
}

pub(crate) fn parse_header(data: &[u8]) -> Result<BmpHeader, BmpError> {
    if data.len() < MIN_HEADER_LEN {
        return Err(BmpError::InvalidFormat(format!(
            "file is {} bytes, shorter than the {MIN_HEADER_LEN}-byte header",
            data.len()
        )));
    }
    if &data[..2] != b"BM" {
        return Err(BmpError::InvalidFormat("missing BM magic bytes".into()));
    }

    let file_size = u32_at(data, FILE_SIZE);
    let data_offset = u32_at(data, DATA_OFFSET);
    let header_size = u32_at(data, HEADER_SIZE);
    let width = i32_at(data, WIDTH);
    let height = i32_at(data, HEIGHT);
    let bits = u16_at(data, BITS_PER_PIXEL);
    let compression = u32_at(data, COMPRESSION);
    let colors_used = u32_at(data, COLORS_USED);

    if compression != 0 {
        return Err(BmpError::UnsupportedFeature(format!(
            "compression scheme {compression} (only uncompressed files are handled)"
        )));
    }
    let depth = Depth::from_bits(bits).ok_or(BmpError::UnsupportedDepth(bits))?;

    if width <= 0 || height == 0 {
        return Err(BmpError::InvalidDimensions {
            width: width.max(0) as u32,
            height: height.unsigned_abs(),
        });
    }

    let palette_len = if depth.paletted() {
        let max = 1u32 << depth.bits();
        if colors_used > max {
            return Err(BmpError::InvalidFormat(format!(
                "palette count {colors_used} exceeds the {max}-entry maximum for \
                 {bits}-bit files"
            )));
        }
        if colors_used == 0 { max } else { colors_used }
    } else {
        colors_used
    };

    Ok(BmpHeader {
        file_size,
        data_offset,
        header_size,
        width: width as u32,
        height: height.unsigned_abs(),
        bottom_up: height > 0,
        depth,
        compression,
        palette_len,
    })
}

// ── Color table ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub(crate) struct PaletteEntry {
    red: u8,
    green: u8,
    blue: u8,
}

/// Read the color table: `palette_len` 4-byte entries at `14 + header_size`,
/// stored B,G,R,reserved. Empty for 24-bit files.
pub(crate) fn read_palette(
    data: &[u8],
    header: &BmpHeader,
) -> Result<Vec<PaletteEntry>, BmpError> {
    if !header.depth.paletted() {
        return Ok(Vec::new());
    }
    let start = 14usize + header.header_size as usize;
    let len = header.palette_len as usize;
    let mut palette = Vec::with_capacity(len);
    for i in 0..len {
        let at = start + i * 4;
        let entry = data.get(at..at + 4).ok_or(BmpError::TruncatedData)?;
        palette.push(PaletteEntry {
            red: entry[2],
            green: entry[1],
            blue: entry[0],
        });
    }
    Ok(palette)
}

// ── Pixel decode ────────────────────────────────────────────────────

/// Decode the pixel rows into a canonical top-down RGB grid.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &BmpHeader,
    palette: &[PaletteEntry],
    stop: &dyn Stop,
) -> Result<PixelGrid, BmpError> {
    let w = header.width as usize;
    let h = header.height as usize;
    let row_bytes = header.depth.row_bytes(w);
    let stride = header.depth.row_stride(w);

    let pixel_data = data
        .get(header.data_offset as usize..)
        .ok_or(BmpError::TruncatedData)?;

    let out_len = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(BmpError::InvalidDimensions {
            width: header.width,
            height: header.height,
        })?;
    let mut buf = vec![0u8; out_len];

    for (row, out) in buf.chunks_exact_mut(w * 3).enumerate() {
        if row % 16 == 0 {
            stop.check()?;
        }
        let start = row * stride;
        // Only the row payload is required; a final row may legally lack
        // its trailing pad bytes.
        let src = pixel_data
            .get(start..start + row_bytes)
            .ok_or(BmpError::TruncatedData)?;
        decode_row(src, header.depth, palette, out)?;
    }

    // Bottom-up files store the visual bottom row first; flip once here
    // rather than inside each depth handler.
    if header.bottom_up {
        flip_rows(&mut buf, w * 3);
    }

    Ok(PixelGrid::from_parts(header.width, header.height, buf))
}

fn decode_row(
    src: &[u8],
    depth: Depth,
    palette: &[PaletteEntry],
    out: &mut [u8],
) -> Result<(), BmpError> {
    match depth {
        Depth::Rgb24 => {
            // File order is B,G,R.
            for (px, out_px) in src.chunks_exact(3).zip(out.chunks_exact_mut(3)) {
                out_px[0] = px[2];
                out_px[1] = px[1];
                out_px[2] = px[0];
            }
        }
        Depth::Pal8 => {
            for (&idx, out_px) in src.iter().zip(out.chunks_exact_mut(3)) {
                write_palette_entry(palette, usize::from(idx), out_px)?;
            }
        }
        Depth::Pal4 => {
            // High nibble is the even column, low nibble the odd one.
            for (col, out_px) in out.chunks_exact_mut(3).enumerate() {
                let byte = src[col / 2];
                let idx = if col % 2 == 0 { byte >> 4 } else { byte & 0x0F };
                write_palette_entry(palette, usize::from(idx), out_px)?;
            }
        }
        Depth::Pal1 => {
            // Bit 7 is the leftmost column within the byte.
            for (col, out_px) in out.chunks_exact_mut(3).enumerate() {
                let byte = src[col / 8];
                let idx = (byte >> (7 - col % 8)) & 1;
                write_palette_entry(palette, usize::from(idx), out_px)?;
            }
        }
    }
    Ok(())
}

fn write_palette_entry(
    palette: &[PaletteEntry],
    index: usize,
    out: &mut [u8],
) -> Result<(), BmpError> {
    let entry = palette
        .get(index)
        .ok_or(BmpError::PaletteIndexOutOfRange {
            index,
            palette_len: palette.len(),
        })?;
    out[0] = entry.red;
    out[1] = entry.green;
    out[2] = entry.blue;
    Ok(())
}

/// Reverse row order in place.
fn flip_rows(buf: &mut [u8], row_len: usize) {
    let mid = buf.len() / 2;
    let (top, bottom) = buf.split_at_mut(mid);
    let mut scanline = vec![0u8; row_len];

    for (a, b) in top
        .chunks_exact_mut(row_len)
        .zip(bottom.rchunks_exact_mut(row_len))
    {
        scanline.copy_from_slice(a);
        a.copy_from_slice(b);
        b.copy_from_slice(&scanline);
    }
}
