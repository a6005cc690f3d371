//! Configuration file handling for textpix.
//!
//! Loads configuration from `~/.config/textpix/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::{GlyphPalette, PaletteError, PalettePreset, SizeLimits};

/// Configuration file structure for textpix.
/// Loaded from ~/.config/textpix/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct LimitsConfig {
    /// Maximum output width in pixels (0 or omitted = no limit)
    #[serde(default)]
    pub max_width: Option<u32>,
    /// Maximum output height in pixels (0 or omitted = no limit)
    #[serde(default)]
    pub max_height: Option<u32>,
    /// Maximum width/height aspect ratio (0 or omitted = no check)
    #[serde(default)]
    pub max_ratio: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PaletteConfig {
    /// Built-in palette name: dots, ascii, blocks, minimal
    #[serde(default)]
    pub name: Option<String>,
    /// Custom palette glyphs, darkest first (overrides `name`)
    #[serde(default)]
    pub glyphs: Option<String>,
    /// Brightness bucket width for a custom palette
    #[serde(default)]
    pub bucket: Option<u32>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

impl LimitsConfig {
    /// Convert to render limits; zero values mean "unset".
    pub fn to_limits(&self) -> SizeLimits {
        SizeLimits {
            max_width: self.max_width.filter(|&w| w > 0),
            max_height: self.max_height.filter(|&h| h > 0),
            max_ratio: self.max_ratio.filter(|&r| r > 0.0),
        }
    }
}

impl PaletteConfig {
    /// Resolve the configured palette, if any.
    ///
    /// A custom glyph/bucket pair wins over a named preset. Returns
    /// `Ok(None)` when the section is empty so the caller can pick the
    /// default.
    pub fn resolve(&self) -> Result<Option<GlyphPalette>, ConfigError> {
        if let Some(glyphs) = &self.glyphs {
            let bucket = self.bucket.ok_or(ConfigError::MissingBucket)?;
            let palette = GlyphPalette::new(glyphs.chars().collect(), bucket)
                .map_err(ConfigError::InvalidPalette)?;
            return Ok(Some(palette));
        }
        if let Some(name) = &self.name {
            let preset =
                PalettePreset::from_name(name).ok_or_else(|| ConfigError::UnknownPalette {
                    name: name.clone(),
                })?;
            return Ok(Some(preset.palette()));
        }
        Ok(None)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    UnknownPalette {
        name: String,
    },
    MissingBucket,
    InvalidPalette(PaletteError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::UnknownPalette { name } => {
                write!(
                    f,
                    "Unknown palette '{}'. Available palettes: dots, ascii, blocks, minimal",
                    name
                )
            }
            ConfigError::MissingBucket => {
                write!(f, "palette.glyphs requires palette.bucket to be set")
            }
            ConfigError::InvalidPalette(e) => write!(f, "Invalid palette: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidPalette(source) => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("textpix").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/textpix/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_resolves_to_defaults() {
        let config = Config::default();
        assert_eq!(config.limits.to_limits(), SizeLimits::none());
        assert!(config.palette.resolve().unwrap().is_none());
    }

    #[test]
    fn test_zero_limits_mean_unset() {
        let limits = LimitsConfig {
            max_width: Some(0),
            max_height: Some(0),
            max_ratio: Some(0.0),
        };
        assert_eq!(limits.to_limits(), SizeLimits::none());
    }

    #[test]
    fn test_named_palette_resolves() {
        let palette = PaletteConfig {
            name: Some("blocks".to_string()),
            ..PaletteConfig::default()
        };
        let resolved = palette.resolve().unwrap().unwrap();
        assert_eq!(resolved, PalettePreset::Blocks.palette());
    }

    #[test]
    fn test_unknown_palette_name_fails() {
        let palette = PaletteConfig {
            name: Some("neon".to_string()),
            ..PaletteConfig::default()
        };
        let err = palette.resolve().unwrap_err();
        assert!(format!("{}", err).contains("neon"));
    }

    #[test]
    fn test_custom_palette_wins_over_name() {
        let palette = PaletteConfig {
            name: Some("blocks".to_string()),
            glyphs: Some("AB".to_string()),
            bucket: Some(128),
        };
        let resolved = palette.resolve().unwrap().unwrap();
        assert_eq!(resolved.glyphs(), &['A', 'B']);
        assert_eq!(resolved.bucket(), 128);
    }

    #[test]
    fn test_custom_palette_requires_bucket() {
        let palette = PaletteConfig {
            glyphs: Some("AB".to_string()),
            ..PaletteConfig::default()
        };
        assert!(matches!(palette.resolve(), Err(ConfigError::MissingBucket)));
    }

    #[test]
    fn test_custom_palette_is_validated() {
        let palette = PaletteConfig {
            glyphs: Some("AB".to_string()),
            bucket: Some(100),
            name: None,
        };
        assert!(matches!(
            palette.resolve(),
            Err(ConfigError::InvalidPalette(
                PaletteError::InsufficientCoverage { .. }
            ))
        ));
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [limits]
            max_width = 120
            max_ratio = 3.0

            [palette]
            name = "ascii"
            "#,
        )
        .unwrap();
        let limits = config.limits.to_limits();
        assert_eq!(limits.max_width, Some(120));
        assert_eq!(limits.max_height, None);
        assert_eq!(limits.max_ratio, Some(3.0));
        assert_eq!(
            config.palette.resolve().unwrap().unwrap(),
            PalettePreset::Ascii.palette()
        );
    }
}
