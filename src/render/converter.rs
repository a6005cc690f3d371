//! The image-to-text conversion pipeline.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use super::error::ConvertError;
use super::grayscale::to_luminance;
use super::palette::GlyphPalette;
use super::size::SizeLimits;
use crate::fetch::{self, ImageSource};

/// Converts raster images into ASCII art.
///
/// Holds the size limits and glyph palette applied to every conversion.
/// Both fields are plain data; reconfigure between calls as needed. A
/// converter is meant to be driven by one caller at a time.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    /// Bounds applied to every converted image
    pub limits: SizeLimits,
    /// Brightness-to-glyph mapping
    pub palette: GlyphPalette,
}

impl Converter {
    pub fn new(limits: SizeLimits, palette: GlyphPalette) -> Self {
        Self { limits, palette }
    }

    /// Convert an image source (file path or URL) to ASCII art.
    ///
    /// # Errors
    /// Fetch errors if the source cannot be read, decode errors if the
    /// bytes are not an image, or [`ConvertError::BadImageSize`] if the
    /// aspect ratio is out of bounds.
    pub fn convert_source(&self, source: &ImageSource) -> Result<String, ConvertError> {
        let bytes = fetch::load(source)?;
        self.convert_bytes(&bytes)
    }

    /// Convert raw encoded image bytes (PNG, JPEG, ...) to ASCII art.
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String, ConvertError> {
        let image = image::load_from_memory(bytes)?;
        self.convert_image(&image)
    }

    /// Convert a decoded image to ASCII art.
    ///
    /// Pipeline: aspect validation on the original dimensions, size
    /// fitting, bilinear resize to the target grid, BT.601 grayscale
    /// reduction, then glyph assembly. Each pixel contributes its glyph
    /// twice per line to counter the tall aspect of monospace character
    /// cells; every row ends with a newline, including the last.
    pub fn convert_image(&self, image: &DynamicImage) -> Result<String, ConvertError> {
        let (width, height) = image.dimensions();
        log::debug!("converting {}x{} image", width, height);

        // Validate the original dimensions before any scaling
        self.limits.check_aspect(width, height)?;

        let (target_w, target_h) = self.limits.fit(width, height);
        if (target_w, target_h) != (width, height) {
            log::debug!("fitting to {}x{}", target_w, target_h);
        }
        // An extreme clamp can truncate a dimension to zero; there is
        // nothing to render then
        if target_w == 0 || target_h == 0 {
            return Ok(String::new());
        }

        let resized = image.resize_exact(target_w, target_h, FilterType::Triangle);
        let luma = to_luminance(&resized.to_rgb8());

        let mut text = String::with_capacity((target_w as usize * 2 + 1) * target_h as usize);
        for row in luma.chunks_exact(target_w as usize) {
            for &luminance in row {
                let glyph = self.palette.glyph_for(luminance);
                text.push(glyph);
                text.push(glyph);
            }
            text.push('\n');
        }
        Ok(text)
    }
}
