//! Packed pixel format definitions.
//!
//! Each format names a fixed bits-per-channel allocation. The output size of
//! an encoded image is a pure function of the format and the pixel count;
//! there are no variable-length pixels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The raw pixel encodings produced by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 16-bit R(5) G(6) B(5), big-endian.
    Rgb565,
    /// 32-bit A(8) R(8) G(8) B(8), big-endian.
    Argb8888,
    /// 8-bit luminance.
    Grayscale8,
    /// 4-bit luminance, two samples packed per byte (high nibble first).
    Grayscale4,
    /// 16-bit A(1) R(5) G(5) B(5), big-endian.
    Argb1555,
}

/// Error returned when parsing an unrecognized format name.
#[derive(Debug, Error)]
#[error("unknown pixel format '{0}' (expected rgb565, argb8888, grayscale8, grayscale4, or argb1555)")]
pub struct UnknownFormat(pub String);

impl PixelFormat {
    /// All supported formats, in CLI documentation order.
    pub const ALL: [PixelFormat; 5] = [
        PixelFormat::Rgb565,
        PixelFormat::Argb8888,
        PixelFormat::Grayscale8,
        PixelFormat::Grayscale4,
        PixelFormat::Argb1555,
    ];

    /// Bits per encoded pixel.
    pub fn bits_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb565 | PixelFormat::Argb1555 => 16,
            PixelFormat::Argb8888 => 32,
            PixelFormat::Grayscale8 => 8,
            PixelFormat::Grayscale4 => 4,
        }
    }

    /// Exact output length in bytes for an image of the given dimensions.
    ///
    /// Grayscale4 packs two pixels per byte and rounds up, so an odd pixel
    /// count yields one extra byte carrying only a high nibble.
    pub fn encoded_len(self, width: u32, height: u32) -> usize {
        let pixels = (width as usize) * (height as usize);
        match self {
            PixelFormat::Rgb565 | PixelFormat::Argb1555 => pixels * 2,
            PixelFormat::Argb8888 => pixels * 4,
            PixelFormat::Grayscale8 => pixels,
            PixelFormat::Grayscale4 => pixels.div_ceil(2),
        }
    }

    /// The lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::Rgb565 => "rgb565",
            PixelFormat::Argb8888 => "argb8888",
            PixelFormat::Grayscale8 => "grayscale8",
            PixelFormat::Grayscale4 => "grayscale4",
            PixelFormat::Argb1555 => "argb1555",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = UnknownFormat;

    /// Case-insensitive parse of the five CLI format names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb565" => Ok(PixelFormat::Rgb565),
            "argb8888" => Ok(PixelFormat::Argb8888),
            "grayscale8" => Ok(PixelFormat::Grayscale8),
            "grayscale4" => Ok(PixelFormat::Grayscale4),
            "argb1555" => Ok(PixelFormat::Argb1555),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
