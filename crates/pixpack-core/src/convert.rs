//! File-to-file conversion.
//!
//! Glue between loading, encoding and output: the encoded buffer is fully
//! materialized in memory, then written to the output file in one
//! `write_all`. The file handle is scoped to the conversion call and closed
//! on every exit path.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::decode::{load_image, DecodeError};
use crate::encode::encode;
use crate::format::PixelFormat;

/// Errors that can occur during a file-to-file conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input image could not be loaded or decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The output file could not be created or written.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Convert an image file to raw packed pixels in the given format.
///
/// Loads the input, encodes every pixel per the format's bit layout, and
/// writes the raw byte sequence to `output` (no header, no metadata).
///
/// # Errors
///
/// Propagates `DecodeError` from loading and reports output failures as
/// `ConvertError::Write`. The output file is not created until the input has
/// decoded successfully.
pub fn convert_file(input: &Path, output: &Path, format: PixelFormat) -> Result<(), ConvertError> {
    let image = load_image(input)?;
    let bytes = encode(&image, format);

    let write_err = |source| ConvertError::Write {
        path: output.display().to_string(),
        source,
    };

    let mut file = File::create(output).map_err(write_err)?;
    file.write_all(&bytes).map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::path::PathBuf;

    /// Unique scratch path under the OS temp directory.
    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pixpack-test-{}-{}", std::process::id(), name))
    }

    fn write_test_png(path: &Path, width: u32, height: u32, pixel: [u8; 4]) {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(pixel)));
        img.save(path).unwrap();
    }

    #[test]
    fn test_convert_writes_exact_encoded_len() {
        let input = temp_path("len-in.png");
        let output = temp_path("len-out.bin");
        write_test_png(&input, 7, 5, [10, 20, 30, 255]);

        for format in PixelFormat::ALL {
            convert_file(&input, &output, format).unwrap();
            let written = std::fs::read(&output).unwrap();
            assert_eq!(written.len(), format.encoded_len(7, 5), "{}", format);
        }

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_convert_rgb565_bytes() {
        let input = temp_path("rgb565-in.png");
        let output = temp_path("rgb565-out.bin");
        // Pure red encodes as 0xF800 big-endian
        write_test_png(&input, 2, 1, [255, 0, 0, 255]);

        convert_file(&input, &output, PixelFormat::Rgb565).unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), vec![0xF8, 0x00, 0xF8, 0x00]);

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_convert_missing_input_is_decode_error() {
        let output = temp_path("missing-out.bin");
        let result = convert_file(Path::new("/no/such/input.png"), &output, PixelFormat::Rgb565);
        assert!(matches!(
            result,
            Err(ConvertError::Decode(DecodeError::FileNotFound(_)))
        ));
        // Output must not be created when the input fails to load
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_unwritable_output_is_write_error() {
        let input = temp_path("unwritable-in.png");
        write_test_png(&input, 1, 1, [0, 0, 0, 255]);

        let output = Path::new("/no/such/directory/out.bin");
        let result = convert_file(&input, output, PixelFormat::Grayscale8);
        assert!(matches!(result, Err(ConvertError::Write { .. })));

        std::fs::remove_file(&input).unwrap();
    }
}
