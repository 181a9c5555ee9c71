//! pixpack core - raw packed-pixel encoding library
//!
//! This crate converts decoded bitmap images into fixed-width raw pixel
//! encodings (RGB565, ARGB8888, 8-bit grayscale, packed 4-bit grayscale,
//! ARGB1555) with no header or metadata, the layout expected by small
//! framebuffers and display controllers.
//!
//! The pipeline has three stages:
//! - [`decode`]: load a bitmap from disk and normalize it to RGBA8
//! - [`encode`]: apply the per-pixel bit-packing transform for a
//!   [`PixelFormat`], big-endian byte order for multi-byte pixels
//! - [`convert`]: write the packed bytes to an output file

pub mod convert;
pub mod decode;
pub mod encode;
pub mod format;
pub mod luminance;

pub use convert::{convert_file, ConvertError};
pub use decode::{load_image, DecodeError, SourceImage};
pub use encode::encode;
pub use format::{PixelFormat, UnknownFormat};
