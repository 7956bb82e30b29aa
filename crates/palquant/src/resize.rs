//! Nearest-neighbor resampling.
//!
//! Pixel-art sources must keep their hard edges through the resize, so the
//! only supported filter copies the nearest source pixel. No averaging, no
//! interpolation.

use crate::color::Rgb;

/// Resize an image to new dimensions by nearest-neighbor sampling.
///
/// Each output pixel copies the source pixel whose center is nearest,
/// using integer center-point arithmetic:
/// `src = (2 * dst + 1) * src_dim / (2 * dst_dim)`. A solid-color input
/// therefore stays solid, and no color that is absent from the source can
/// appear in the output.
///
/// `pixels` is row-major and must hold exactly `width * height` entries.
///
/// # Panics
///
/// Panics if `pixels.len() != width * height`, or if any dimension is zero
/// while the opposite side of the conversion is not.
pub fn resize_nearest(
    pixels: &[Rgb],
    width: u32,
    height: u32,
    new_width: u32,
    new_height: u32,
) -> Vec<Rgb> {
    assert_eq!(
        pixels.len(),
        (width as usize) * (height as usize),
        "pixel buffer does not match {}x{}",
        width,
        height
    );

    if width == new_width && height == new_height {
        return pixels.to_vec();
    }

    assert!(
        width > 0 && height > 0 && new_width > 0 && new_height > 0,
        "cannot resize {}x{} to {}x{}",
        width,
        height,
        new_width,
        new_height
    );

    let mut out = Vec::with_capacity((new_width as usize) * (new_height as usize));
    for y in 0..new_height {
        let src_y = ((2 * u64::from(y) + 1) * u64::from(height)) / (2 * u64::from(new_height));
        let row = src_y as usize * width as usize;
        for x in 0..new_width {
            let src_x = ((2 * u64::from(x) + 1) * u64::from(width)) / (2 * u64::from(new_width));
            out.push(pixels[row + src_x as usize]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, color: Rgb) -> Vec<Rgb> {
        vec![color; (width * height) as usize]
    }

    #[test]
    fn test_noop_same_dimensions() {
        let input = solid_image(7, 5, Rgb::new(10, 20, 30));
        let output = resize_nearest(&input, 7, 5, 7, 5);
        assert_eq!(output, input);
    }

    #[test]
    fn test_solid_color_stays_solid() {
        for n in [1u32, 3, 32, 100] {
            let input = solid_image(n, n, Rgb::new(200, 100, 50));
            let output = resize_nearest(&input, n, n, 32, 32);
            assert_eq!(output.len(), 32 * 32);
            assert!(
                output.iter().all(|&p| p == Rgb::new(200, 100, 50)),
                "solid {}x{} input must resize to a solid 32x32 image",
                n,
                n
            );
        }
    }

    #[test]
    fn test_no_new_colors_introduced() {
        // A 2x2 checkerboard scaled up and down must never blend.
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        let input = vec![black, white, white, black];

        for (w, h) in [(32, 32), (3, 3), (1, 1), (64, 16)] {
            let output = resize_nearest(&input, 2, 2, w, h);
            assert!(
                output.iter().all(|&p| p == black || p == white),
                "nearest-neighbor must only copy source pixels"
            );
        }
    }

    #[test]
    fn test_downscale_picks_center_pixel() {
        // 4x1 -> 2x1: centers fall at source columns 1 and 3.
        let input = vec![
            Rgb::new(0, 0, 0),
            Rgb::new(1, 1, 1),
            Rgb::new(2, 2, 2),
            Rgb::new(3, 3, 3),
        ];
        let output = resize_nearest(&input, 4, 1, 2, 1);
        assert_eq!(output, vec![Rgb::new(1, 1, 1), Rgb::new(3, 3, 3)]);
    }

    #[test]
    fn test_upscale_replicates_pixels() {
        // 2x1 -> 4x1: each source pixel covers two output pixels.
        let input = vec![Rgb::new(9, 9, 9), Rgb::new(7, 7, 7)];
        let output = resize_nearest(&input, 2, 1, 4, 1);
        assert_eq!(
            output,
            vec![
                Rgb::new(9, 9, 9),
                Rgb::new(9, 9, 9),
                Rgb::new(7, 7, 7),
                Rgb::new(7, 7, 7),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "pixel buffer does not match")]
    fn test_mismatched_buffer_panics() {
        let input = solid_image(2, 2, Rgb::new(0, 0, 0));
        let _ = resize_nearest(&input, 3, 3, 32, 32);
    }
}
