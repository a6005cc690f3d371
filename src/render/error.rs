//! Error types for the conversion pipeline.

use thiserror::Error;

use crate::fetch::FetchError;

/// Errors that can occur while converting an image to text.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The image's aspect ratio falls outside the configured bound.
    ///
    /// Raised before any resizing, on the original dimensions. The
    /// allowed range is `1/max ..= max`.
    #[error("image aspect ratio {actual:.2} is outside the allowed bound (max ratio {max:.2})")]
    BadImageSize {
        /// The image's actual width/height ratio
        actual: f64,
        /// The configured maximum ratio
        max: f64,
    },

    /// The source bytes are not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image source could not be read.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
