//! RGB to luminance conversion using ITU-R BT.601 coefficients.
//!
//! Both grayscale output formats reduce color pixels through this module.
//! The conversion uses the same 16-bit fixed-point weights as the common
//! imaging libraries (0.299 R + 0.587 G + 0.114 B, truncated), so grayscale
//! output is bit-identical to files produced by those tools.

/// Fixed-point BT.601 weight for the red channel (0.299 * 65536).
pub const LUMA_R: u32 = 19595;

/// Fixed-point BT.601 weight for the green channel (0.587 * 65536).
pub const LUMA_G: u32 = 38470;

/// Fixed-point BT.601 weight for the blue channel (0.114 * 65536).
pub const LUMA_B: u32 = 7471;

/// Convert 8-bit RGB to an 8-bit luminance value.
///
/// The weights sum to exactly 65536, so a gray input (r == g == b) maps to
/// itself with no rounding drift.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B) >> 16) as u8
}
