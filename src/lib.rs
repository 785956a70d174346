//! # bmpview
//!
//! Uncompressed BMP decoder with a small display pipeline: channel
//! masking, brightness scaling, nearest-neighbor resizing, and binary
//! PPM (P6) output.
//!
//! ## Supported input
//!
//! - **24-bit** truecolor (B,G,R file order)
//! - **8-bit**, **4-bit**, and **1-bit** palette-indexed
//! - bottom-up and top-down row order; rows always come out top-down
//!
//! Compressed variants (RLE, embedded JPEG/PNG), 16/32-bit depths, and
//! alpha channels are rejected with a typed error; no partial grid is
//! ever returned.
//!
//! ## Non-goals
//!
//! - BMP encoding (only PPM is produced)
//! - Color management or gamma correction
//! - Any decode source other than BMP, any encode target other than P6
//!
//! ## Usage
//!
//! ```no_run
//! use bmpview::{DecodeRequest, TransformState, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! let header = decoded.header();
//! println!("{}x{} at {} bpp", header.width, header.height, header.depth.bits());
//!
//! // Recompute from the decoded grid on every parameter change.
//! let state = TransformState { brightness: 50, red: false, ..TransformState::default() };
//! let adjusted = bmpview::adjust(decoded.grid(), &state);
//! let scaled = bmpview::resize(&adjusted, state.scale);
//! let ppm = bmpview::encode_ppm(&scaled, Unstoppable)?;
//! # Ok::<(), bmpview::BmpError>(())
//! ```
//!
//! Or hold the decoded image in a [`Viewer`] and let it re-derive output
//! per [`TransformState`]:
//!
//! ```no_run
//! use bmpview::{TransformState, Unstoppable, Viewer};
//!
//! let data: &[u8] = &[];
//! let viewer = Viewer::open(data, Unstoppable)?;
//! let ppm = viewer.render(&TransformState::default(), Unstoppable)?;
//! # Ok::<(), bmpview::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod decode;
mod error;
mod limits;
mod pixel;
mod ppm;
mod resample;
mod transform;
mod viewer;

// Re-exports
pub use bmp::{BmpHeader, Depth};
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use limits::Limits;
pub use pixel::PixelGrid;
pub use ppm::encode_ppm;
pub use resample::resize;
pub use transform::{TransformState, adjust};
pub use viewer::Viewer;
