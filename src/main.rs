use clap::Parser;

use textpix::cli::{handle_config_action, list_palettes, Args, Command};
use textpix::config::{Config, ConfigError};
use textpix::fetch::ImageSource;
use textpix::render::{Converter, PalettePreset};

fn main() {
    let args = Args::parse();

    match &args.command {
        Some(Command::ListPalettes) => {
            list_palettes();
            return;
        }
        Some(Command::Config { action }) => {
            handle_config_action(action.clone());
            return;
        }
        None => {}
    }

    let Some(source) = args.source.as_deref() else {
        eprintln!("Error: no image source given. Pass a file path or URL, or see --help.");
        std::process::exit(2);
    };
    let source = ImageSource::parse(source);

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let converter = match build_converter(&args, &config) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match converter.convert_source(&source) {
        Ok(text) => {
            if let Some(path) = &args.output {
                if let Err(e) = std::fs::write(path, &text) {
                    eprintln!("Error writing '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            } else {
                print!("{}", text);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Build the converter from config file values with CLI flags on top.
fn build_converter(args: &Args, config: &Config) -> Result<Converter, ConfigError> {
    let mut limits = config.limits.to_limits();
    if let Some(w) = args.max_width {
        limits.max_width = (w > 0).then_some(w);
    }
    if let Some(h) = args.max_height {
        limits.max_height = (h > 0).then_some(h);
    }
    if let Some(r) = args.max_ratio {
        limits.max_ratio = (r > 0.0).then_some(r);
    }

    let palette = match args.palette {
        Some(kind) => PalettePreset::from(kind).palette(),
        None => config.palette.resolve()?.unwrap_or_default(),
    };

    Ok(Converter::new(limits, palette))
}
