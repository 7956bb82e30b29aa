use std::path::PathBuf;
use thiserror::Error;

/// Fatal setup error: the reference palette could not be loaded.
///
/// Any of these aborts the whole run before the input directory is read.
#[derive(Debug, Error)]
pub enum PaletteLoadError {
    #[error("cannot read reference palette {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode reference palette {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("malformed reference bitmap: {0}")]
    Bmp(#[from] BmpError),

    #[error("unusable reference palette: {0}")]
    Palette(#[from] palquant::PaletteError),
}

/// Per-image conversion error.
///
/// `Decode` aborts only the file concerned (the batch skips it and
/// continues); `Io` means an output artifact or the input directory itself
/// could not be accessed and is fatal for the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error from the hand-rolled BMP header parser.
#[derive(Debug, Error)]
pub enum BmpError {
    #[error("truncated BMP header")]
    TruncatedHeader,

    #[error("truncated BMP color table ({expected} entries declared)")]
    TruncatedColorTable { expected: usize },
}
