//! Command-line argument definitions and type conversions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use pixpack_core::PixelFormat;

/// Convert a bitmap image into raw fixed-width packed pixels.
#[derive(Debug, Parser)]
#[command(name = "convert_image")]
pub struct Args {
    /// Input bitmap (PNG, JPEG or BMP)
    pub input_image: PathBuf,
    /// Output file receiving the raw packed bytes
    pub output_file: PathBuf,
    /// Target pixel encoding
    #[arg(ignore_case = true)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// 16-bit R5 G6 B5, big-endian
    Rgb565,
    /// 32-bit A8 R8 G8 B8, big-endian
    Argb8888,
    /// 8-bit luminance
    Grayscale8,
    /// 4-bit luminance, two pixels packed per byte
    Grayscale4,
    /// 16-bit A1 R5 G5 B5, big-endian
    Argb1555,
}

impl Format {
    pub fn to_pixel_format(self) -> PixelFormat {
        match self {
            Format::Rgb565 => PixelFormat::Rgb565,
            Format::Argb8888 => PixelFormat::Argb8888,
            Format::Grayscale8 => PixelFormat::Grayscale8,
            Format::Grayscale4 => PixelFormat::Grayscale4,
            Format::Argb1555 => PixelFormat::Argb1555,
        }
    }
}
