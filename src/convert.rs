//! Per-image conversion and the input directory walk.
//!
//! Every input image becomes two artifacts with the input's base name: an
//! indexed-color BMP for visual inspection and a raw dump of the palette
//! indices. Conversions are independent; nothing is shared across files
//! except the read-only palette inside the [`Quantizer`].

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use palquant::{Quantizer, Rgb};

use crate::bmp;
use crate::error::ConvertError;

/// Fixed path of the reference palette bitmap.
pub const PALETTE_PATH: &str = "palette.bmp";
/// Fixed input directory, scanned non-recursively.
pub const INPUT_DIR: &str = "in";
/// Fixed output directory, created if absent.
pub const OUTPUT_DIR: &str = "out";
/// Edge length of every exported asset, in pixels.
pub const TARGET_SIZE: u32 = 32;

/// Counts of what the directory walk did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files converted into both artifacts.
    pub converted: usize,
    /// Files skipped because they did not decode as images.
    pub skipped: usize,
}

/// Convert one input image into its `.bmp` and `.imgbin` artifacts.
///
/// Pipeline: decode, normalize to 3-channel RGB (alpha discarded, indexed
/// and grayscale data expanded), quantize through `quantizer` (which
/// resizes to the target dimensions), then write both encodings. Existing
/// artifacts for the same base name are overwritten.
pub fn convert_file(
    input: &Path,
    out_dir: &Path,
    quantizer: &Quantizer,
) -> Result<(), ConvertError> {
    // Decode from memory so the format is sniffed from content, not the
    // file extension.
    let data = fs::read(input).map_err(image::ImageError::IoError)?;
    let decoded = image::load_from_memory(&data)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels: Vec<Rgb> = rgb
        .pixels()
        .map(|pixel| Rgb::new(pixel[0], pixel[1], pixel[2]))
        .collect();

    let image = quantizer.quantize(&pixels, width, height);

    let bmp_file = File::create(artifact_path(out_dir, input, "bmp"))?;
    bmp::write_indexed(&image, BufWriter::new(bmp_file))?;

    fs::write(artifact_path(out_dir, input, "imgbin"), image.indices())?;

    tracing::debug!(
        input = %input.display(),
        width,
        height,
        "Converted image"
    );
    Ok(())
}

/// Convert every regular file in `input_dir`, writing into `out_dir`.
///
/// Directories and other special entries are skipped silently; entries
/// that do not decode as images are skipped with a warning (documented
/// policy: a bad input never aborts the batch). Output I/O errors and an
/// unreadable input directory are fatal. No ordering is guaranteed.
pub fn run_batch(
    input_dir: &Path,
    out_dir: &Path,
    quantizer: &Quantizer,
) -> Result<BatchReport, ConvertError> {
    fs::create_dir_all(out_dir)?;

    let mut report = BatchReport::default();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            tracing::debug!(path = %entry.path().display(), "Skipping non-regular entry");
            continue;
        }

        let path = entry.path();
        match convert_file(&path, out_dir, quantizer) {
            Ok(()) => report.converted += 1,
            Err(ConvertError::Decode(err)) => {
                tracing::warn!(path = %path.display(), %err, "Skipping undecodable input");
                report.skipped += 1;
            }
            Err(fatal) => return Err(fatal),
        }
    }

    tracing::info!(
        converted = report.converted,
        skipped = report.skipped,
        "Batch complete"
    );
    Ok(report)
}

/// Output path for `input`'s artifact with the given extension: the input
/// base name keeps everything up to its final extension.
fn artifact_path(out_dir: &Path, input: &Path, extension: &str) -> PathBuf {
    // read_dir never yields entries without a final component.
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(".");
    name.push(extension);
    out_dir.join(name)
}
