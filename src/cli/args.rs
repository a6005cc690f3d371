//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::PaletteKind;

/// Render images as ASCII art in your terminal
#[derive(Parser, Debug)]
#[command(name = "textpix")]
#[command(version, about = "Render images as ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to convert: a file path or an http(s) URL
    pub source: Option<String>,

    /// Maximum output width in pixels (0 = no limit)
    #[arg(long)]
    pub max_width: Option<u32>,

    /// Maximum output height in pixels (0 = no limit)
    #[arg(long)]
    pub max_height: Option<u32>,

    /// Maximum allowed width/height aspect ratio (0 = no check)
    #[arg(long)]
    pub max_ratio: Option<f64>,

    /// Glyph palette
    #[arg(long, short)]
    pub palette: Option<PaletteKind>,

    /// Write the text to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in glyph palettes
    ListPalettes,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
