//! Source image loading.
//!
//! Input bitmaps are decoded with the `image` crate and normalized to RGBA8
//! before encoding. Normalizing up front means every output format can read
//! the channel layout it needs: alpha-less sources get a synthesized opaque
//! alpha channel, and the grayscale formats derive luminance from the RGB
//! channels.
//!
//! EXIF orientation is honored: a camera JPEG tagged as rotated is rotated
//! upright before its pixels are handed to the encoder.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use thiserror::Error;

/// Errors that can occur while loading a source image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input path does not exist.
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    /// The file contents are not a recognized image format.
    #[error("invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// I/O error while reading the input file.
    #[error("I/O error: {0}")]
    Io(String),
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded source image with RGBA pixel data.
///
/// This is the read-only input to the encoder: width, height and a row-major
/// sequence of 4-byte RGBA pixels. Alpha is 255 for sources that carried no
/// alpha channel.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length is width * height * 4.
    pub pixels: Vec<u8>,
}

impl SourceImage {
    /// Create a new SourceImage from raw RGBA pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a SourceImage from any `image` crate image, normalizing to
    /// RGBA8 and synthesizing opaque alpha where the source has none.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let rgba = img.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            pixels: rgba.into_raw(),
        }
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Iterate over pixels as `[r, g, b, a]` quads in row-major order.
    pub fn rgba_pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.pixels
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Load and decode a source image from disk.
///
/// The decoded image is normalized to RGBA8 with EXIF orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::FileNotFound` if the path does not exist,
/// `DecodeError::InvalidFormat` if the contents are not a supported image
/// format, and `DecodeError::CorruptedFile` if decoding fails partway.
pub fn load_image(path: &Path) -> Result<SourceImage, DecodeError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DecodeError::FileNotFound(path.to_path_buf()),
        _ => DecodeError::Io(e.to_string()),
    })?;

    decode_bytes(&bytes)
}

/// Decode an in-memory image file, applying EXIF orientation.
pub fn decode_bytes(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    // Extract EXIF orientation before decoding; the image crate drops it.
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    Ok(SourceImage::from_dynamic(oriented))
}

/// Extract EXIF orientation from encoded image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or the orientation
/// tag is absent.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply an EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
