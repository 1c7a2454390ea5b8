//! Image preprocessing for OCR contrast
//!
//! High-contrast binarized input improves recognition accuracy over raw
//! photographs, so every image is converted to grayscale and thresholded
//! with a fixed cutoff before it reaches the OCR engine.

pub mod steps;

use image::{DynamicImage, GrayImage};

/// Produce the binary image fed to OCR: grayscale conversion followed by
/// fixed-cutoff thresholding.
pub fn binarize(image: &DynamicImage, cutoff: u8) -> GrayImage {
    let gray = steps::grayscale::apply(image);
    steps::threshold::apply(&gray, cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_binarize_color_image_is_binary() {
        let mut img = RgbImage::from_pixel(20, 20, Rgb([240, 240, 240]));
        for x in 5..15 {
            img.put_pixel(x, 10, Rgb([20, 20, 20]));
        }

        let result = binarize(&DynamicImage::ImageRgb8(img), 150);

        for pixel in result.pixels() {
            assert!(
                pixel.0[0] == steps::threshold::FOREGROUND
                    || pixel.0[0] == steps::threshold::BACKGROUND,
                "Expected binary pixel, got {}",
                pixel.0[0]
            );
        }
        // Dark strokes end up below the cutoff, bright background above it.
        assert_eq!(result.get_pixel(10, 10).0[0], steps::threshold::BACKGROUND);
        assert_eq!(result.get_pixel(10, 5).0[0], steps::threshold::FOREGROUND);
    }
}
