//! Subcommand handlers for list-palettes and config actions.

use super::args::ConfigAction;
use crate::config::{default_path as get_config_path, Config};
use crate::render::PalettePreset;

/// List built-in palettes and print them to stdout.
pub fn list_palettes() {
    println!("Built-in palettes:");
    for preset in PalettePreset::all() {
        let palette = preset.palette();
        let glyphs: String = palette.glyphs().iter().collect();
        println!(
            "  {:<8} [{}]  bucket width {}",
            preset.name(),
            glyphs,
            palette.bucket()
        );
    }
    println!();
    println!("Use --palette <name> to select one, darkest glyph first.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction) {
    match action {
        ConfigAction::Show => {
            let config_path = get_config_path();
            let config = match Config::load(None) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            let limits = config.limits.to_limits();

            println!("Current configuration:");
            println!("  Max width: {}", describe_limit(limits.max_width));
            println!("  Max height: {}", describe_limit(limits.max_height));
            println!(
                "  Max ratio: {}",
                limits
                    .max_ratio
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "unchecked".to_string())
            );
            match config.palette.resolve() {
                Ok(Some(palette)) => {
                    let glyphs: String = palette.glyphs().iter().collect();
                    println!("  Palette: [{}] bucket width {}", glyphs, palette.bucket());
                }
                Ok(None) => println!("  Palette: dots (default)"),
                Err(e) => println!("  Palette: invalid ({})", e),
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            let config_path = get_config_path();

            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'textpix config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            // Write default config
            let default_config = r#"# textpix configuration

[limits]
# Maximum output width in pixels (0 = no limit)
max_width = 0
# Maximum output height in pixels (0 = no limit)
max_height = 0
# Maximum width/height aspect ratio; images wider than this
# (or taller than its reciprocal allows) are rejected (0 = no check)
max_ratio = 0.0

[palette]
# Built-in palette: dots, ascii, blocks, minimal
name = "dots"
# Or define a custom palette, darkest glyph first.
# The glyph count times the bucket width must cover 0..256.
# glyphs = "@#+-. "
# bucket = 43
"#;

            if let Err(e) = std::fs::write(&config_path, default_config) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }
            println!("Created config file: {}", config_path.display());
        }
    }
}

fn describe_limit(limit: Option<u32>) -> String {
    limit
        .map(|v| format!("{} px", v))
        .unwrap_or_else(|| "unlimited".to_string())
}
