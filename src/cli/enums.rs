//! CLI enum types for palette selection.

use clap::ValueEnum;

use crate::render::PalettePreset;

/// Glyph palette selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaletteKind {
    #[default]
    Dots,
    Ascii,
    Blocks,
    Minimal,
}

impl From<PaletteKind> for PalettePreset {
    fn from(k: PaletteKind) -> Self {
        match k {
            PaletteKind::Dots => PalettePreset::Dots,
            PaletteKind::Ascii => PalettePreset::Ascii,
            PaletteKind::Blocks => PalettePreset::Blocks,
            PaletteKind::Minimal => PalettePreset::Minimal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_kind_to_preset() {
        assert_eq!(PalettePreset::from(PaletteKind::Dots), PalettePreset::Dots);
        assert_eq!(
            PalettePreset::from(PaletteKind::Ascii),
            PalettePreset::Ascii
        );
        assert_eq!(
            PalettePreset::from(PaletteKind::Blocks),
            PalettePreset::Blocks
        );
        assert_eq!(
            PalettePreset::from(PaletteKind::Minimal),
            PalettePreset::Minimal
        );
    }
}
