//! Glyph palette definitions and brightness-to-glyph mapping.

use thiserror::Error;

/// Dot/circle ramp (9 levels).
/// Glyphs ordered from darkest (filled circle) to brightest (colon).
const DOTS_GLYPHS: &[char] = &['●', '◍', '◎', '○', '☉', '◌', '+', '-', ':'];

/// ASCII density ramp (10 levels).
/// Pure-ASCII output for terminals without good Unicode coverage.
const ASCII_GLYPHS: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Block character ramp (5 levels).
/// Uses Unicode block characters for a solid, high-contrast look.
const BLOCKS_GLYPHS: &[char] = &['█', '▓', '▒', '░', ' '];

/// Minimal ramp (4 levels). Clean, less noisy look.
const MINIMAL_GLYPHS: &[char] = &['#', ':', '.', ' '];

/// Errors raised when constructing a [`GlyphPalette`].
///
/// These are configuration-time failures; a constructed palette can
/// never fail during conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette has no glyphs")]
    Empty,

    #[error("bucket width must be greater than zero")]
    ZeroBucket,

    #[error(
        "palette covers luminance 0..{covered} but must cover 0..256 \
         ({glyphs} glyphs x bucket width {bucket})"
    )]
    InsufficientCoverage {
        /// Number of glyphs in the rejected palette
        glyphs: usize,
        /// Configured bucket width
        bucket: u32,
        /// Luminance range actually covered (`glyphs * bucket`)
        covered: u32,
    },
}

/// An ordered glyph ramp plus the brightness bucket width that maps
/// luminance values onto it.
///
/// A luminance byte selects the glyph at index `luminance / bucket`.
/// The first glyph renders the darkest band, the last the brightest.
///
/// Construction enforces `bucket * glyph_count >= 256` so that every
/// luminance in 0..=255 maps to a valid index; `glyph_for` can then
/// index without a bounds check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphPalette {
    glyphs: Vec<char>,
    bucket: u32,
}

impl GlyphPalette {
    /// Build a palette from an ordered glyph sequence and a bucket width.
    ///
    /// # Errors
    /// Fails if the glyph list is empty, the bucket width is zero, or
    /// the combination does not cover the full luminance range.
    pub fn new(glyphs: Vec<char>, bucket: u32) -> Result<Self, PaletteError> {
        if glyphs.is_empty() {
            return Err(PaletteError::Empty);
        }
        if bucket == 0 {
            return Err(PaletteError::ZeroBucket);
        }
        let covered = bucket.saturating_mul(glyphs.len() as u32);
        if covered < 256 {
            return Err(PaletteError::InsufficientCoverage {
                glyphs: glyphs.len(),
                bucket,
                covered,
            });
        }
        Ok(Self { glyphs, bucket })
    }

    /// Map a luminance value to its glyph.
    #[inline]
    pub fn glyph_for(&self, luminance: u8) -> char {
        self.glyphs[luminance as usize / self.bucket as usize]
    }

    /// The ordered glyphs of this palette, darkest first.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// The brightness bucket width.
    pub fn bucket(&self) -> u32 {
        self.bucket
    }
}

impl Default for GlyphPalette {
    fn default() -> Self {
        PalettePreset::Dots.palette()
    }
}

/// Built-in palette presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PalettePreset {
    /// 9-level circle/dot ramp (default)
    #[default]
    Dots,
    /// 10-level ASCII density ramp
    Ascii,
    /// 5-level Unicode block ramp
    Blocks,
    /// 4-level minimal ramp
    Minimal,
}

impl PalettePreset {
    /// All presets, in listing order.
    pub fn all() -> &'static [PalettePreset] {
        &[
            PalettePreset::Dots,
            PalettePreset::Ascii,
            PalettePreset::Blocks,
            PalettePreset::Minimal,
        ]
    }

    /// Build the palette for this preset.
    ///
    /// Preset glyph counts and bucket widths are chosen to satisfy the
    /// coverage invariant, so construction cannot fail.
    pub fn palette(&self) -> GlyphPalette {
        let (glyphs, bucket) = match self {
            PalettePreset::Dots => (DOTS_GLYPHS, 30),
            PalettePreset::Ascii => (ASCII_GLYPHS, 26),
            PalettePreset::Blocks => (BLOCKS_GLYPHS, 52),
            PalettePreset::Minimal => (MINIMAL_GLYPHS, 64),
        };
        match GlyphPalette::new(glyphs.to_vec(), bucket) {
            Ok(palette) => palette,
            Err(_) => unreachable!("preset palettes satisfy the coverage invariant"),
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            PalettePreset::Dots => "dots",
            PalettePreset::Ascii => "ascii",
            PalettePreset::Blocks => "blocks",
            PalettePreset::Minimal => "minimal",
        }
    }

    /// Look up a preset by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dots" => Some(PalettePreset::Dots),
            "ascii" => Some(PalettePreset::Ascii),
            "blocks" => Some(PalettePreset::Blocks),
            "minimal" => Some(PalettePreset::Minimal),
            _ => None,
        }
    }
}
