//! # Physical Units
//!
//! Conversion between real-world inches and device pixels. The whole crate
//! renders at a fixed 96 DPI so a 1.00" frame is exactly 96 pixels thick and
//! prints at scale when the output is rasterized at 100%.

/// Fixed raster resolution, pixels per inch.
pub const DPI: f32 = 96.0;

/// Letter page width used by frame-only mode, inches.
pub const LETTER_WIDTH_IN: f32 = 8.5;

/// Letter page height used by frame-only mode, inches.
pub const LETTER_HEIGHT_IN: f32 = 11.0;

/// Convert a physical length in inches to pixels.
#[inline]
pub fn to_pixels(inches: f32) -> f32 {
    inches * DPI
}

/// Convert a pixel length back to inches.
#[inline]
pub fn to_inches(pixels: f32) -> f32 {
    pixels / DPI
}

/// Letter page size in pixels: (width, height).
#[inline]
pub fn letter_page_px() -> (f32, f32) {
    (to_pixels(LETTER_WIDTH_IN), to_pixels(LETTER_HEIGHT_IN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels_exact() {
        assert_eq!(to_pixels(1.0), 96.0);
        assert_eq!(to_pixels(0.5), 48.0);
        assert_eq!(to_pixels(2.0), 192.0);
    }

    #[test]
    fn test_letter_page() {
        assert_eq!(letter_page_px(), (816.0, 1056.0));
    }

    #[test]
    fn test_round_trip() {
        for t in [0.05f32, 0.25, 1.0, 3.5] {
            assert!((to_inches(to_pixels(t)) - t).abs() < 1e-6);
        }
    }
}
