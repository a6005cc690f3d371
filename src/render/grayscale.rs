//! RGB to grayscale conversion using ITU-R BT.601 luminance weighting.

use image::RgbImage;

/// Convert an RGB image to per-pixel luminance using ITU-R BT.601.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Uses integer math with coefficients scaled by 1000 (299 + 587 + 114),
/// avoiding floating-point work in the per-pixel loop.
///
/// # Returns
/// A vector of luminance values (0-255), one per pixel, row-major.
pub fn to_luminance(image: &RgbImage) -> Vec<u8> {
    let pixel_count = (image.width() * image.height()) as usize;
    let mut luma = Vec::with_capacity(pixel_count);

    for rgb in image.as_raw().chunks_exact(3) {
        let r = rgb[0] as u32;
        let g = rgb[1] as u32;
        let b = rgb[2] as u32;
        let luminance = (299 * r + 587 * g + 114 * b) / 1000;
        luma.push(luminance as u8);
    }

    luma
}
