//! textpix library crate.
//!
//! Converts raster images into ASCII art: images are validated against
//! an optional aspect-ratio bound, shrunk proportionally to fit size
//! limits, reduced to grayscale, and mapped pixel-by-pixel onto an
//! ordered glyph palette.
//!
//! ```no_run
//! use textpix::fetch::ImageSource;
//! use textpix::render::Converter;
//!
//! let converter = Converter::default();
//! let text = converter.convert_source(&ImageSource::parse("cat.png"))?;
//! print!("{}", text);
//! # Ok::<(), textpix::render::ConvertError>(())
//! ```

pub mod cli;
pub mod config;
pub mod fetch;
pub mod render;
