//! palquant: fixed-palette quantization for pixel-art assets
//!
//! This library maps raster images onto a fixed reference palette of up to
//! 256 colors, producing an indexed image suitable for raw index dumps and
//! indexed bitmap encoders. It performs no I/O; callers hand it decoded
//! RGB pixels and take back palette indices.
//!
//! # Quick Start
//!
//! The [`Quantizer`] builder is the primary entry point:
//!
//! ```
//! use palquant::{Palette, Quantizer, Rgb};
//!
//! let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
//! let quantizer = Quantizer::new(palette).resize(32, 32);
//!
//! let pixels = vec![Rgb::new(40, 40, 40); 64 * 64];
//! let image = quantizer.quantize(&pixels, 64, 64);
//!
//! assert_eq!(image.indices().len(), 32 * 32);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGB input                (decoded by the caller)
//!     |
//!     v
//! resize_nearest           (copy nearest source pixel, no blending)
//!     |
//!     v
//! Palette::find_nearest    (squared-distance scan, lowest index wins ties)
//!     |
//!     v
//! IndexedImage             (row-major u8 indices + owned palette)
//! ```
//!
//! # Nearest-Color Policy
//!
//! Each pixel maps to the palette entry with the smallest squared Euclidean
//! distance in 8-bit RGB space. With at most 256 entries the linear scan is
//! computationally trivial, and the lowest-index tie-break makes results
//! fully deterministic. There is deliberately no error diffusion: a pixel's
//! index depends only on its own color, never on its neighbors.

pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod resize;


pub use color::Rgb;
pub use output::IndexedImage;
pub use palette::{Palette, PaletteError, MAX_PALETTE_ENTRIES};
pub use quantize::Quantizer;
pub use resize::resize_nearest;
