use image::{GrayImage, Luma};

/// Intensity assigned to pixels at or above the cutoff.
pub const FOREGROUND: u8 = 255;
/// Intensity assigned to pixels below the cutoff.
pub const BACKGROUND: u8 = 0;

/// Apply fixed-cutoff binarization.
///
/// Pixels at or above the cutoff map to foreground, everything below it
/// to background. Both output levels satisfy the same comparison, so
/// re-applying the threshold to its own output leaves the image unchanged.
pub fn apply(img: &GrayImage, cutoff: u8) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        if img.get_pixel(x, y).0[0] >= cutoff {
            Luma([FOREGROUND])
        } else {
            Luma([BACKGROUND])
        }
    })
}
