//! Reference palette loading.
//!
//! The quantization target is read once at startup from a fixed-path
//! reference bitmap and stays immutable for the rest of the run.

use std::fs;
use std::path::Path;

use palquant::{Palette, Rgb};

use crate::bmp;
use crate::error::PaletteLoadError;

/// Load the reference palette from a bitmap file.
///
/// Two sources are recognized, in order:
///
/// 1. A paletted BMP: its embedded color table becomes the palette,
///    entries in table order.
/// 2. Any other decodable image: each pixel, row-major, becomes one
///    palette entry (a swatch sheet). More than 256 pixels is an error.
///
/// Duplicate colors are kept as-is in both cases; index position in the
/// source is the canonical palette index.
///
/// # Errors
///
/// A missing, undecodable, or oversized reference file is a fatal
/// [`PaletteLoadError`]; the caller must not fall back to converting
/// inputs without a palette.
pub fn load_palette(path: &Path) -> Result<Palette, PaletteLoadError> {
    let data = fs::read(path).map_err(|source| PaletteLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(colors) = bmp::read_color_table(&data)? {
        tracing::debug!(
            path = %path.display(),
            colors = colors.len(),
            "Using embedded BMP color table as palette"
        );
        return Ok(Palette::new(&colors)?);
    }

    // No embedded table: treat the image itself as a swatch sheet.
    let decoded =
        image::load_from_memory(&data).map_err(|source| PaletteLoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    let rgb = decoded.to_rgb8();
    let colors: Vec<Rgb> = rgb
        .pixels()
        .map(|pixel| Rgb::new(pixel[0], pixel[1], pixel[2]))
        .collect();
    tracing::debug!(
        path = %path.display(),
        colors = colors.len(),
        "Derived palette from swatch pixels"
    );
    Ok(Palette::new(&colors)?)
}
