//! Quantizer -- the primary entry point for the crate.
//!
//! [`Quantizer`] wraps the resize + palette-mapping pipeline behind a small
//! builder API.

use crate::color::Rgb;
use crate::output::IndexedImage;
use crate::palette::Palette;
use crate::resize::resize_nearest;

/// Maps images onto a fixed reference palette.
///
/// `Quantizer` owns its [`Palette`] and is reusable across any number of
/// images ([`quantize()`](Self::quantize) takes `&self`). An optional
/// target size applies a nearest-neighbor resize before mapping.
///
/// Every pixel is assigned the index of its nearest palette entry via
/// [`Palette::find_nearest()`]. There is no error diffusion: the index
/// chosen for a pixel depends only on that pixel's color, never on its
/// neighbors, so repeated runs over the same input are byte-identical.
///
/// # Example
///
/// ```
/// use palquant::{Palette, Quantizer, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let quantizer = Quantizer::new(palette).resize(32, 32);
///
/// let pixels = vec![Rgb::new(30, 30, 30); 64 * 64];
/// let image = quantizer.quantize(&pixels, 64, 64);
///
/// assert_eq!(image.width(), 32);
/// assert_eq!(image.height(), 32);
/// assert!(image.indices().iter().all(|&idx| idx == 0));
/// ```
pub struct Quantizer {
    palette: Palette,
    target: Option<(u32, u32)>,
}

impl Quantizer {
    /// Create a new quantizer for the given palette.
    ///
    /// No resize is applied until [`resize()`](Self::resize) is called.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            target: None,
        }
    }

    /// Set target dimensions for the nearest-neighbor resize step.
    #[inline]
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.target = Some((width, height));
        self
    }

    /// Returns the palette this quantizer maps onto.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Quantize raw RGB pixels into an [`IndexedImage`].
    ///
    /// Applies the full pipeline:
    /// 1. Nearest-neighbor resize to the target size, if one was set
    /// 2. Per-pixel nearest-palette-entry mapping, row-major
    ///
    /// `pixels` is row-major and must hold exactly `width * height`
    /// entries.
    pub fn quantize(&self, pixels: &[Rgb], width: u32, height: u32) -> IndexedImage {
        let (pixels, width, height) = match self.target {
            Some((tw, th)) if (tw, th) != (width, height) => {
                (resize_nearest(pixels, width, height, tw, th), tw, th)
            }
            _ => (pixels.to_vec(), width, height),
        };

        let indices: Vec<u8> = pixels
            .iter()
            .map(|&pixel| self.palette.find_nearest(pixel) as u8)
            .collect();

        IndexedImage::new(indices, width, height, self.palette.clone())
    }
}
