//! IndexedImage struct, the canonical pipeline output.
//!
//! [`IndexedImage`] wraps quantized palette indices with dimension metadata
//! and an owned [`Palette`]. The indexed form is canonical; the RGB form is
//! computed on demand by looking up palette colors.

use crate::palette::Palette;

/// The canonical output of the quantization pipeline.
///
/// Stores one `u8` palette index per pixel in row-major order, along with
/// image dimensions and the palette the image was quantized against. Two
/// output views are available:
///
/// - [`indices()`](IndexedImage::indices): raw palette indices, exactly the
///   bytes of the `.imgbin` artifact
/// - [`to_rgb()`](IndexedImage::to_rgb): flat RGB bytes for visual-check
///   encoders
///
/// # Example
///
/// ```
/// use palquant::{IndexedImage, Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let image = IndexedImage::new(vec![0, 1, 1, 0], 2, 2, palette);
///
/// assert_eq!(image.indices(), &[0, 1, 1, 0]);
/// assert_eq!(image.to_rgb().len(), 2 * 2 * 3);
/// ```
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// The palette the image was quantized against.
    palette: Palette,
}

impl IndexedImage {
    /// Create a new `IndexedImage` from quantized palette indices.
    ///
    /// Each value in `indices` must be in `0..palette.len()`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: u32, height: u32, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            (width as usize) * (height as usize),
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Returns the palette indices as a slice, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the palette this image indexes into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Convert to flat RGB bytes by palette lookup.
    ///
    /// The returned buffer has length `width * height * 3` in
    /// `[R, G, B, R, G, B, ...]` layout.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            let [r, g, b] = self.palette.color(idx as usize).to_bytes();
            rgb.push(r);
            rgb.push(g);
            rgb.push(b);
        }
        rgb
    }
}
