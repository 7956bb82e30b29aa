use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgprep::convert::{self, INPUT_DIR, OUTPUT_DIR, PALETTE_PATH, TARGET_SIZE};
use imgprep::palette_io;
use palquant::Quantizer;

/// Export images as palette-indexed 32x32 assets.
///
/// Reads the reference palette from `palette.bmp`, then converts every
/// image in `in/` into `<name>.bmp` and `<name>.imgbin` under `out/`.
/// All paths are fixed; there are no flags.
#[derive(Parser)]
#[command(name = "imgprep", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    // Only --help/--version; the tool is otherwise flagless.
    Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imgprep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // The palette must load before any input is touched; a bad reference
    // file aborts the whole run.
    let palette = palette_io::load_palette(Path::new(PALETTE_PATH))
        .context("loading reference palette")?;
    tracing::info!(colors = palette.len(), "Loaded reference palette");

    let quantizer = Quantizer::new(palette).resize(TARGET_SIZE, TARGET_SIZE);
    let report = convert::run_batch(Path::new(INPUT_DIR), Path::new(OUTPUT_DIR), &quantizer)
        .context("converting input images")?;

    println!(
        "Converted {} images into {}/ ({} skipped)",
        report.converted, OUTPUT_DIR, report.skipped
    );
    Ok(())
}
