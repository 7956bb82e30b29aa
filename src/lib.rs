//! Imgprep - palette-constrained asset preparation
//!
//! Batch-converts raster images into fixed-size, palette-indexed assets for
//! a 6502 demo pipeline, and turns raw binaries into assembler data
//! listings. This library exposes modules for integration testing.

pub mod bmp;
pub mod convert;
pub mod dcb;
pub mod error;
pub mod palette_io;
