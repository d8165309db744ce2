//! Stamp a caption onto an icon image.

use std::path::PathBuf;

/// The command line synopsis.
const USAGE: &str = "usage: stamp [--font <font-file>] [--family <name>] <input> <output> <caption>";

/// Error returned for a malformed command line.
#[derive(Debug, thiserror::Error)]
#[error("{reason}\n{}", USAGE)]
struct UsageError {
    /// What was wrong with the arguments.
    reason: pico_args::Error,
}

/// Parsed command line arguments.
#[derive(Debug)]
struct Args {
    /// Extra font file to load.
    font: Option<PathBuf>,

    /// Font family override.
    family: Option<String>,

    /// The icon to stamp.
    input: PathBuf,

    /// Where to write the PNG.
    output: PathBuf,

    /// The caption text.
    caption: String,
}

impl Args {
    /// Parse the process arguments.
    fn parse(mut args: pico_args::Arguments) -> Result<Self, UsageError> {
        let usage = |reason| UsageError { reason };

        let font = args.opt_value_from_str("--font").map_err(usage)?;
        let family = args.opt_value_from_str("--family").map_err(usage)?;
        let input = args.free_from_str().map_err(usage)?;
        let output = args.free_from_str().map_err(usage)?;
        let caption = args.free_from_str().map_err(usage)?;

        let rest = args.finish();
        if !rest.is_empty() {
            tracing::warn!(?rest, "ignoring extra arguments");
        }

        Ok(Self {
            font,
            family,
            input,
            output,
            caption,
        })
    }
}

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let args = match Args::parse(pico_args::Arguments::from_env()) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    let env_font: Option<PathBuf> = envfury::maybe("STAMP_FONT_PATH")?;
    let env_family: Option<String> = envfury::maybe("STAMP_FONT_FAMILY")?;

    let stamp = icon_stamp::Stamp::open(&args.input)?;

    let mut fonts = caption_render::Fonts::system();
    let loaded_family = match args.font.or(env_font) {
        Some(path) => Some(fonts.load_font_file(&path)?),
        None => None,
    };
    let family = args
        .family
        .or(env_family)
        .or(loaded_family)
        .unwrap_or_else(|| caption_render::DEFAULT_FONT_FAMILY.to_owned());

    let mut stamp = stamp.with_font_family(family);
    let outcome = stamp.add_text(&mut fonts, &args.caption);
    stamp.save(&args.output)?;

    let (width, height) = stamp.image().dimensions();
    println!("Image saved to: {}", args.output.display());
    println!("Dimensions: {}x{}", width, height);
    println!(
        "Font size: {:.1}pt{}",
        outcome.font_size,
        if outcome.truncated { " (truncated)" } else { "" }
    );

    Ok(())
}
