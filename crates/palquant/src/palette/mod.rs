//! Fixed reference palette and nearest-color matching.

#[allow(clippy::module_inception)]
mod palette;

mod error;

pub use error::PaletteError;
pub use palette::{Palette, MAX_PALETTE_ENTRIES};
