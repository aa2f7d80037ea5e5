//! textart CLI - Convert images to text art

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use textart::{loader, Converter, TextartError};

#[derive(Parser)]
#[command(name = "textart", about = "Convert images to text art")]
struct Args {
    /// Input image file
    #[arg(required_unless_present = "list")]
    input: Option<PathBuf>,
    /// Palette name
    #[arg(short, long, default_value = "standard")]
    palette: String,
    /// JSON file of palette name -> characters (defaults to the built-in set)
    #[arg(long)]
    palettes: Option<PathBuf>,
    /// Reverse the palette (for dark text on a light background)
    #[arg(short, long)]
    reverse: bool,
    /// Maximum output width in characters
    #[arg(short = 'W', long, allow_hyphen_values = true)]
    max_width: Option<i64>,
    /// Maximum output height in characters
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    max_height: Option<i64>,
    /// Repeat each character horizontally
    #[arg(short, long, default_value = "1")]
    x_stretch: u32,
    /// Repeat each line vertically
    #[arg(short, long, default_value = "1")]
    y_stretch: u32,
    /// List available palettes and exit
    #[arg(short, long)]
    list: bool,
    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log_level(args.verbose))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(args) {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), TextartError> {
    let factory = match &args.palettes {
        Some(path) => loader::read_palette_file(path)?,
        None => loader::default_palettes()?,
    };

    if args.list {
        for (name, pattern) in factory.entries() {
            println!("{name}\t{pattern:?}");
        }
        return Ok(());
    }

    let Some(input) = &args.input else {
        return Err(TextartError::InvalidArgument("no input image given".into()));
    };

    let palette = factory.get_palette(&args.palette)?;
    let image = loader::read_image_file(input)?;

    let converter = Converter::new()
        .with_max_width(args.max_width)
        .with_max_height(args.max_height)
        .with_stretch(args.x_stretch, args.y_stretch)
        .with_reversed(args.reverse);

    println!("{}", converter.convert(&image, &palette)?);
    Ok(())
}
