//! Palette struct with ordered color storage and nearest-color matching.

use super::error::PaletteError;
use crate::color::Rgb;

/// Maximum number of palette entries addressable by a `u8` index.
pub const MAX_PALETTE_ENTRIES: usize = 256;

/// An ordered, immutable list of reference colors used as quantization
/// targets.
///
/// The index position of a color in the sequence is its canonical palette
/// index: it is the value written into the raw index dump and the position
/// of the color in the emitted BMP color table. Duplicate colors are legal
/// and are *not* deduplicated; matching simply never selects the later of
/// two identical entries (the scan keeps the lowest index on ties).
///
/// A palette is constructed once at startup and never mutated; it is
/// shared by reference into every conversion.
///
/// # Example
///
/// ```
/// use palquant::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.find_nearest(Rgb::new(30, 30, 30)), 0);
/// assert_eq!(palette.find_nearest(Rgb::new(220, 220, 220)), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a new palette from an ordered color sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::Empty`])
    /// - `colors` has more than 256 entries ([`PaletteError::TooManyEntries`])
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > MAX_PALETTE_ENTRIES {
            return Err(PaletteError::TooManyEntries {
                count: colors.len(),
            });
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// Returns all palette colors in canonical index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Find the index of the palette entry nearest to the given color.
    ///
    /// Nearest means smallest squared Euclidean distance in 8-bit RGB
    /// space, scanned linearly over the (at most 256) entries. Ties keep
    /// the lowest index, which makes the result deterministic and
    /// independent of neighboring pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use palquant::{Palette, Rgb};
    ///
    /// // Duplicate colors are legal; the first occurrence wins.
    /// let palette = Palette::new(&[
    ///     Rgb::new(255, 0, 0),
    ///     Rgb::new(255, 0, 0),
    ///     Rgb::new(0, 0, 255),
    /// ]).unwrap();
    ///
    /// assert_eq!(palette.find_nearest(Rgb::new(250, 10, 10)), 0);
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> usize {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        best_idx
    }
}
