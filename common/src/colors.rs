//! Color constants for the smiley rating widget.
//!
//! The defaults below are what a widget renders with when the attribute
//! source does not override them (or when attribute resolution fails).
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Theme colors are written as 8-bit-per-channel hex literals, so every
//! constant here goes through [`rgb888`] which drops the low bits of each
//! channel at compile time.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Build an `Rgb565` from 8-bit channels (truncating to 5/6/5 bits).
#[inline]
pub const fn rgb888(
    r: u8,
    g: u8,
    b: u8,
) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Default Palette
// =============================================================================

/// Default face fill (`#FFD54F`, amber).
pub const DEFAULT_FACE: Rgb565 = rgb888(0xFF, 0xD5, 0x4F);

/// Default eye fill (`#5D4037`, dark brown).
pub const DEFAULT_EYES: Rgb565 = rgb888(0x5D, 0x40, 0x37);

/// Default mouth stroke and fill (`#5D4037`, same as the eyes).
pub const DEFAULT_MOUTH: Rgb565 = rgb888(0x5D, 0x40, 0x37);

/// Default tongue fill (`#E57373`, soft red).
pub const DEFAULT_TONGUE: Rgb565 = rgb888(0xE5, 0x73, 0x73);

// =============================================================================
// Host Colors
// =============================================================================

/// Pure black. Used by hosts to clear the display between frames.
pub const BLACK: Rgb565 = Rgb565::BLACK;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb888_extremes() {
        assert_eq!(rgb888(0, 0, 0), Rgb565::BLACK);
        assert_eq!(rgb888(0xFF, 0xFF, 0xFF), Rgb565::WHITE);
    }

    #[test]
    fn test_rgb888_truncates_low_bits() {
        let c = rgb888(0xFF, 0xD5, 0x4F);
        assert_eq!(c.r(), 31);
        assert_eq!(c.g(), 0xD5 >> 2);
        assert_eq!(c.b(), 0x4F >> 3);
    }

    #[test]
    fn test_face_and_features_contrast() {
        // Eyes and mouth must stay visible on top of the face fill.
        assert_ne!(DEFAULT_FACE, DEFAULT_EYES);
        assert_ne!(DEFAULT_FACE, DEFAULT_MOUTH);
        assert_ne!(DEFAULT_MOUTH, DEFAULT_TONGUE);
    }
}
