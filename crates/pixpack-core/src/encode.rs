//! Raw packed-pixel encoding.
//!
//! This module is the core of the tool: a fixed table of per-pixel scalar
//! transforms, one per [`PixelFormat`], applied independently to every pixel
//! in row-major order. Multi-byte pixels are emitted big-endian; Grayscale4
//! packs two 4-bit samples per byte.
//!
//! Pixels are iterated by flat linear index rather than nested (x, y) loops,
//! which makes the Grayscale4 pairing of pixel `i` with pixel `i + 1` direct
//! and keeps every encoder a single pass over the source buffer.

use crate::decode::SourceImage;
use crate::format::PixelFormat;
use crate::luminance::luma_u8;

/// Encode a source image into the given packed pixel format.
///
/// The output is the raw byte sequence, row-major, left-to-right,
/// top-to-bottom, with no header or metadata. Its length is exactly
/// `format.encoded_len(image.width, image.height)`.
///
/// Encoding cannot fail: the source is already normalized to RGBA, so every
/// format's channel layout is derivable (alpha is synthesized as fully
/// opaque for sources that had none).
pub fn encode(image: &SourceImage, format: PixelFormat) -> Vec<u8> {
    match format {
        PixelFormat::Rgb565 => encode_rgb565(image),
        PixelFormat::Argb8888 => encode_argb8888(image),
        PixelFormat::Grayscale8 => encode_grayscale8(image),
        PixelFormat::Grayscale4 => encode_grayscale4(image),
        PixelFormat::Argb1555 => encode_argb1555(image),
    }
}

/// Pack a single pixel as R(5) G(6) B(5).
#[inline]
fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    (((r >> 3) as u16) << 11) | (((g >> 2) as u16) << 5) | ((b >> 3) as u16)
}

/// Pack a single pixel as A(1) R(5) G(5) B(5), thresholding alpha at 128.
#[inline]
fn pack_argb1555(r: u8, g: u8, b: u8, a: u8) -> u16 {
    let alpha_bit = (a >= 128) as u16;
    (alpha_bit << 15) | (((r >> 3) as u16) << 10) | (((g >> 3) as u16) << 5) | ((b >> 3) as u16)
}

fn encode_rgb565(image: &SourceImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(PixelFormat::Rgb565.encoded_len(image.width, image.height));
    for [r, g, b, _] in image.rgba_pixels() {
        out.extend_from_slice(&pack_rgb565(r, g, b).to_be_bytes());
    }
    out
}

fn encode_argb8888(image: &SourceImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(PixelFormat::Argb8888.encoded_len(image.width, image.height));
    for [r, g, b, a] in image.rgba_pixels() {
        out.extend_from_slice(&[a, r, g, b]);
    }
    out
}

fn encode_grayscale8(image: &SourceImage) -> Vec<u8> {
    image
        .rgba_pixels()
        .map(|[r, g, b, _]| luma_u8(r, g, b))
        .collect()
}

fn encode_grayscale4(image: &SourceImage) -> Vec<u8> {
    let lumas: Vec<u8> = image
        .rgba_pixels()
        .map(|[r, g, b, _]| luma_u8(r, g, b))
        .collect();

    let mut out =
        Vec::with_capacity(PixelFormat::Grayscale4.encoded_len(image.width, image.height));
    for pair in lumas.chunks(2) {
        let hi = pair[0] >> 4;
        // A trailing unpaired pixel packs with a zero low nibble.
        let lo = if pair.len() == 2 { pair[1] >> 4 } else { 0 };
        out.push((hi << 4) | lo);
    }
    out
}

fn encode_argb1555(image: &SourceImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(PixelFormat::Argb1555.encoded_len(image.width, image.height));
    for [r, g, b, a] in image.rgba_pixels() {
        out.extend_from_slice(&pack_argb1555(r, g, b, a).to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a SourceImage from a list of RGBA pixels, laid out as one row.
    fn row_image(pixels: &[[u8; 4]]) -> SourceImage {
        let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
        SourceImage::new(pixels.len() as u32, 1, raw)
    }

    #[test]
    fn test_rgb565_packing() {
        // Pure red: top 5 bits set
        let img = row_image(&[[255, 0, 0, 255]]);
        assert_eq!(encode(&img, PixelFormat::Rgb565), vec![0xF8, 0x00]);

        // Pure green: middle 6 bits set
        let img = row_image(&[[0, 255, 0, 255]]);
        assert_eq!(encode(&img, PixelFormat::Rgb565), vec![0x07, 0xE0]);

        // Pure blue: low 5 bits set
        let img = row_image(&[[0, 0, 255, 255]]);
        assert_eq!(encode(&img, PixelFormat::Rgb565), vec![0x00, 0x1F]);

        // White: all field bits set
        let img = row_image(&[[255, 255, 255, 255]]);
        assert_eq!(encode(&img, PixelFormat::Rgb565), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_rgb565_quantization_error_bound() {
        for (r, g, b) in [(0u8, 0u8, 0u8), (17, 130, 250), (127, 128, 129), (255, 1, 84)] {
            let img = row_image(&[[r, g, b, 255]]);
            let bytes = encode(&img, PixelFormat::Rgb565);
            let word = u16::from_be_bytes([bytes[0], bytes[1]]);

            // Recover channels by shifting the quantized fields back up
            let r2 = ((word >> 11) as u8 & 0x1F) << 3;
            let g2 = ((word >> 5) as u8 & 0x3F) << 2;
            let b2 = (word as u8 & 0x1F) << 3;

            assert!((r as i32 - r2 as i32).abs() <= 8, "R error too large for {r}");
            assert!((g as i32 - g2 as i32).abs() <= 4, "G error too large for {g}");
            assert!((b as i32 - b2 as i32).abs() <= 8, "B error too large for {b}");
        }
    }

    #[test]
    fn test_argb8888_is_lossless() {
        let img = row_image(&[[12, 34, 56, 78], [255, 0, 128, 0]]);
        let bytes = encode(&img, PixelFormat::Argb8888);
        // A, R, G, B byte order per pixel
        assert_eq!(bytes, vec![78, 12, 34, 56, 0, 255, 0, 128]);
    }

    #[test]
    fn test_grayscale8_uses_bt601_luma() {
        let img = row_image(&[[255, 0, 0, 255], [0, 255, 0, 255], [200, 200, 200, 255]]);
        assert_eq!(encode(&img, PixelFormat::Grayscale8), vec![76, 149, 200]);
    }

    #[test]
    fn test_grayscale4_single_pixel_high_nibble_only() {
        // 1x1 image of luminance 200: exactly one byte, (200 >> 4) << 4 = 0xC0
        let img = row_image(&[[200, 200, 200, 255]]);
        assert_eq!(encode(&img, PixelFormat::Grayscale4), vec![0xC0]);
    }

    #[test]
    fn test_grayscale4_pairs_pixels() {
        // Lumas 0x12.. -> high nibbles 1, 2, 3, 4 packed as 0x12, 0x34
        let img = row_image(&[
            [0x1F, 0x1F, 0x1F, 255],
            [0x2F, 0x2F, 0x2F, 255],
            [0x3F, 0x3F, 0x3F, 255],
            [0x4F, 0x4F, 0x4F, 255],
        ]);
        assert_eq!(encode(&img, PixelFormat::Grayscale4), vec![0x12, 0x34]);
    }

    #[test]
    fn test_grayscale4_odd_count_pads_low_nibble() {
        let img = row_image(&[
            [0xAF, 0xAF, 0xAF, 255],
            [0xBF, 0xBF, 0xBF, 255],
            [0xCF, 0xCF, 0xCF, 255],
        ]);
        assert_eq!(encode(&img, PixelFormat::Grayscale4), vec![0xAB, 0xC0]);
    }

    #[test]
    fn test_argb1555_alpha_threshold() {
        // Alpha 127 encodes A=0, alpha 128 encodes A=1
        let img = row_image(&[[0, 0, 0, 127], [0, 0, 0, 128]]);
        let bytes = encode(&img, PixelFormat::Argb1555);
        assert_eq!(bytes[0] & 0x80, 0x00);
        assert_eq!(bytes[2] & 0x80, 0x80);
    }

    #[test]
    fn test_argb1555_packing() {
        // Opaque white: alpha bit plus three full 5-bit fields
        let img = row_image(&[[255, 255, 255, 255]]);
        assert_eq!(encode(&img, PixelFormat::Argb1555), vec![0xFF, 0xFF]);

        // Transparent pure blue: low 5 bits only
        let img = row_image(&[[0, 0, 255, 0]]);
        assert_eq!(encode(&img, PixelFormat::Argb1555), vec![0x00, 0x1F]);

        // Green uses 5 bits here, unlike RGB565's 6
        let img = row_image(&[[0, 255, 0, 255]]);
        assert_eq!(encode(&img, PixelFormat::Argb1555), vec![0x83, 0xE0]);
    }

    #[test]
    fn test_row_major_ordering() {
        // 2x2 image: pixel order must be left-to-right, top-to-bottom
        let raw = vec![
            10, 0, 0, 255, // (0,0)
            20, 0, 0, 255, // (1,0)
            30, 0, 0, 255, // (0,1)
            40, 0, 0, 255, // (1,1)
        ];
        let img = SourceImage::new(2, 2, raw);
        let bytes = encode(&img, PixelFormat::Argb8888);
        let reds: Vec<u8> = bytes.chunks_exact(4).map(|p| p[1]).collect();
        assert_eq!(reds, vec![10, 20, 30, 40]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
