use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use e1002_convert::assets::AssetLoader;
use e1002_convert::models::DeviceCatalog;
use e1002_convert::services::{ConvertOptions, Converter, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};

#[derive(Parser)]
#[command(name = "e1002-convert")]
#[command(about = "Convert PNG images to dithered six-color PNGs for Spectra 6 e-ink displays")]
struct Cli {
    /// Input PNG file
    input: Option<PathBuf>,

    /// Output PNG path (default: <input>_dithered.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Device profile id or alias (overrides --max-width/--max-height)
    #[arg(short, long)]
    device: Option<String>,

    /// List available device profiles and exit
    #[arg(long)]
    list_devices: bool,

    /// Dithering method: stucki, floyd-steinberg or atkinson
    #[arg(long, default_value = "stucki")]
    dither: String,

    /// Brightness adjustment (-100 to 100)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    brightness: i32,

    /// Contrast adjustment (-100 to 100)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    contrast: i32,

    /// Keep the original image size
    #[arg(long)]
    no_resize: bool,

    /// Target width when no device is given
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    max_width: u32,

    /// Target height when no device is given
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
    max_height: u32,

    /// Write the measured panel colors instead of the pure output colors
    #[arg(long)]
    preview: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "e1002_convert=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let catalog = DeviceCatalog::load(&loader).context("Failed to load device profiles")?;

    if cli.list_devices {
        println!("Available device profiles:");
        for line in catalog.list_lines() {
            println!("{line}");
        }
        return Ok(());
    }

    let input = cli
        .input
        .context("No input file given (see --help, or use --list-devices)")?;

    let options = ConvertOptions {
        input,
        output: cli.output,
        device: cli.device,
        dither: cli.dither,
        brightness: cli.brightness,
        contrast: cli.contrast,
        no_resize: cli.no_resize,
        max_width: cli.max_width,
        max_height: cli.max_height,
        preview: cli.preview,
    };
    let job = options.validate(&catalog)?;

    let report = Converter::default()
        .run(&job)
        .with_context(|| format!("Failed to convert {}", job.input.display()))?;

    println!(
        "Converted {} ({}x{} -> {}x{}, {} in {:.2}s)",
        report.output.display(),
        report.original_size.0,
        report.original_size.1,
        report.processed_size.0,
        report.processed_size.1,
        job.method,
        report.dither_time.as_secs_f64()
    );
    println!("Wrote {} bytes", report.bytes_written);

    Ok(())
}
