//! pixfmt packs floating-point colors into arbitrary byte layouts and back.
//!
//! A [`PixelFormat`] is a small set of flags describing one packed pixel: gray or RGB, channel
//! order, optional alpha and depth bytes and where they sit, alpha inversion, premultiplication,
//! or a raw verbatim copy of the in-memory [`Color`]. The codec is pure and stateless:
//!
//! - [`encode`] / [`decode`]: one pixel at an explicit offset into a caller-owned buffer
//! - [`convert_color_format`] / [`encode_colors`] / [`decode_colors`]: whole buffers
//! - [`par_encode_colors`]: the same bytes, produced on a rayon pool
//!
//! Output is bit-exact: alpha quantizes as `floor(a * 255.9)`, color goes through a 16-bit
//! [`Gamma`] stage and keeps its top byte, and gray uses 8.8 fixed-point BT.601 luma weights.
//! Decoding is the mirror image except that it applies no inverse gamma.
//!
//! ```
//! use pixfmt::{Color, Gamma, PixelFormat, decode, encode};
//!
//! let mut buf = [0u8; 4];
//! let end = encode(&Color::new(1.0, 0.5, 0.0, 1.0), PixelFormat::ARGB, &Gamma::NONE, &mut buf, 0);
//! assert_eq!(end, 4);
//! assert_eq!(buf, [255, 255, 128, 0]);
//!
//! let (color, _) = decode(PixelFormat::ARGB, &buf, 0);
//! assert_eq!(color.r, 1.0);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod pixel;

/// JSON codec configuration.
pub mod config;
/// Image-file adapter built on the `image` crate.
pub mod raster;

pub use crate::color::gamma::Gamma;
pub use crate::color::model::{Color, ColorReal};
pub use crate::color::yuv::{DECODE_YUV, ENCODE_YUV, LUMA_WEIGHTS};
pub use crate::config::CodecConfig;
pub use crate::foundation::error::{PixfmtError, PixfmtResult};
pub use crate::pixel::batch::{
    BatchThreading, convert_color_format, decode_colors, encode_colors, par_encode_colors,
};
pub use crate::pixel::codec::{decode, decode_into, encode, try_encode};
pub use crate::pixel::format::PixelFormat;
pub use crate::pixel::layout::{PixelLayout, Slot};
pub use crate::raster::Raster;
