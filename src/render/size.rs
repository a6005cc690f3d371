//! Aspect-ratio validation and proportional size fitting.

use super::error::ConvertError;

/// Optional bounds applied to an image before rendering.
///
/// `max_ratio` bounds the width/height aspect ratio symmetrically
/// around 1.0: an image fails validation when its ratio exceeds
/// `max_ratio` or falls below `1 / max_ratio`. `max_width` and
/// `max_height` cap the output pixel grid while preserving proportion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeLimits {
    /// Maximum output width in pixels (`None` = no limit)
    pub max_width: Option<u32>,
    /// Maximum output height in pixels (`None` = no limit)
    pub max_height: Option<u32>,
    /// Maximum allowed width/height ratio (`None` = no aspect check)
    pub max_ratio: Option<f64>,
}

impl SizeLimits {
    /// Limits that accept and preserve any image.
    pub fn none() -> Self {
        Self::default()
    }

    /// Validate the aspect ratio of an image.
    ///
    /// Must be called on the original dimensions, before any size
    /// fitting. No-op when `max_ratio` is unset.
    ///
    /// # Errors
    /// [`ConvertError::BadImageSize`] carrying the actual and maximum
    /// ratios when the image is too wide or too tall.
    pub fn check_aspect(&self, width: u32, height: u32) -> Result<(), ConvertError> {
        let Some(max) = self.max_ratio else {
            return Ok(());
        };
        let ratio = width as f64 / height as f64;
        if ratio > max || ratio < 1.0 / max {
            return Err(ConvertError::BadImageSize { actual: ratio, max });
        }
        Ok(())
    }

    /// Compute target dimensions that fit within the configured limits.
    ///
    /// The width clamp is applied first; the height clamp then runs on
    /// the already-adjusted dimensions. The sequential order is part of
    /// the contract: when both limits are set, the height clamp sees the
    /// height produced by the width clamp, which can truncate a second
    /// time. Scaling uses integer truncation toward zero.
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        let (mut w, mut h) = (width, height);
        if let Some(max_w) = self.max_width {
            if w > max_w {
                h = (h as u64 * max_w as u64 / w as u64) as u32;
                w = max_w;
            }
        }
        if let Some(max_h) = self.max_height {
            if h > max_h {
                w = (w as u64 * max_h as u64 / h as u64) as u32;
                h = max_h;
            }
        }
        (w, h)
    }
}
