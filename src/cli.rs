//! Command-line interface implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::banner::Banner;
use crate::error::DecodeError;
use crate::layer::{FONT_BASE, FONT_END};
use crate::message::{anvil_text, compose, render_message, writer_url, RenderOptions};
use crate::output::{save_png, scale_image};
use crate::sprites::SpriteAtlas;
use crate::store::load_sets;

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Anvil item names cap out at 50 length units.
const ANVIL_BUDGET: usize = 50;

/// Bannerforge - banner design codecs and message rendering
#[derive(Parser)]
#[command(name = "bannerforge")]
#[command(about = "Decode, render, and compose Minecraft banner designs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a banner from text, banner code, or URL and describe it
    Decode {
        /// Banner text, banner code, or a banner-writer/planetminecraft URL
        input: String,
    },
    /// Render a single banner to PNG
    Render {
        /// Banner text, banner code, or a banner-writer/planetminecraft URL
        input: String,

        /// Output PNG path
        #[arg(short, long, default_value = "banner.png")]
        output: PathBuf,

        /// Banner spritesheet image
        #[arg(long, default_value = "banners.png")]
        atlas: PathBuf,

        /// Integer scale factor
        #[arg(long, default_value = "4", value_parser = clap::value_parser!(u32).range(1..))]
        scale: u32,
    },
    /// Compose a message from a banner set and render it
    Say {
        /// The message text
        message: String,

        /// JSON file holding the banner sets
        #[arg(long, default_value = "sets.json")]
        sets: PathBuf,

        /// Name of the banner set to use
        #[arg(long = "set")]
        set_name: String,

        /// Banner spritesheet image
        #[arg(long, default_value = "banners.png")]
        atlas: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "message.png")]
        output: PathBuf,

        /// Integer scale factor
        #[arg(long, default_value = "2", value_parser = clap::value_parser!(u32).range(1..))]
        scale: u32,

        /// Outer margin in pixels (default: 4x the scale)
        #[arg(long)]
        margin: Option<u32>,

        /// Space between banners in pixels (default: 4x the scale)
        #[arg(long)]
        spacing: Option<u32>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { input } => run_decode(&input),
        Commands::Render {
            input,
            output,
            atlas,
            scale,
        } => run_render(&input, &output, &atlas, scale),
        Commands::Say {
            message,
            sets,
            set_name,
            atlas,
            output,
            scale,
            margin,
            spacing,
        } => run_say(&message, &sets, &set_name, &atlas, &output, scale, margin, spacing),
    }
}

/// Decode from any supported representation, sniffing the format.
fn parse_banner(input: &str) -> Result<Banner, DecodeError> {
    let input = input.trim();
    if input.starts_with("http") {
        Banner::from_url(input)
    } else if input
        .chars()
        .any(|c| (c as u32) >= FONT_BASE && (c as u32) < FONT_END)
    {
        Banner::from_text(input)
    } else {
        Banner::from_banner_code(input)
    }
}

fn run_decode(input: &str) -> ExitCode {
    match parse_banner(input) {
        Ok(banner) => {
            print!("{}", banner.description());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_render(input: &str, output: &Path, atlas_path: &Path, scale: u32) -> ExitCode {
    let banner = match parse_banner(input) {
        Ok(banner) => banner,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let atlas = match SpriteAtlas::load(atlas_path) {
        Ok(atlas) => atlas,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let image = scale_image(&banner.render(&atlas), scale);
    match save_png(&image, output) {
        Ok(()) => {
            println!("Wrote {}", output.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_say(
    message: &str,
    sets_path: &Path,
    set_name: &str,
    atlas_path: &Path,
    output: &Path,
    scale: u32,
    margin: Option<u32>,
    spacing: Option<u32>,
) -> ExitCode {
    let sets = match load_sets(sets_path) {
        Ok(sets) => sets,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let Some(set) = sets.get(set_name) else {
        eprintln!("Error: no banner set named {set_name:?}");
        return ExitCode::from(EXIT_ERROR);
    };
    let grid = match compose(message, set) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let atlas = match SpriteAtlas::load(atlas_path) {
        Ok(atlas) => atlas,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let opts = RenderOptions {
        scale,
        margin: margin.unwrap_or(4 * scale),
        spacing: spacing.unwrap_or(4 * scale),
    };
    let writing = set.writing_direction();
    let newline = set.newline_direction();
    let image = match render_message(&grid, &atlas, writing, newline, &opts) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if let Err(e) = save_png(&image, output) {
        eprintln!("Error: {e}");
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Wrote {}", output.display());

    match writer_url(&grid, writing, newline) {
        Ok(url) => println!("URL: https://{url}"),
        Err(e) => println!("URL: {e}"),
    }
    match anvil_text(&grid, writing) {
        Ok(anvil) => {
            println!(
                "Anvil-optimized text ({}/{} characters): {}",
                anvil.length, ANVIL_BUDGET, anvil.text
            );
            if anvil.length > ANVIL_BUDGET {
                println!("Warning: text exceeds the anvil length budget");
            }
        }
        Err(e) => println!("Anvil-optimized text: {e}"),
    }

    ExitCode::from(EXIT_SUCCESS)
}
