//! Shared helpers for end-to-end converter tests.

use std::fs;
use std::path::PathBuf;
use std::process::Output;

use palquant::{IndexedImage, Palette, Rgb};
use tempfile::TempDir;

/// A disposable working directory with the converter's fixed layout:
/// `palette.bmp` plus `in/`, with `out/` left for the program to create.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp workspace");
        fs::create_dir(dir.path().join("in")).expect("create in/");
        Self { dir }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.dir.path().join("in")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Write `palette.bmp` as a paletted BMP carrying the given color table.
    pub fn write_palette(&self, colors: &[Rgb]) {
        let palette = Palette::new(colors).expect("valid palette fixture");
        let image = IndexedImage::new(vec![0; 4], 2, 2, palette);
        let mut data = Vec::new();
        imgprep::bmp::write_indexed(&image, &mut data).expect("encode palette fixture");
        fs::write(self.dir.path().join("palette.bmp"), data).expect("write palette.bmp");
    }

    /// Save a PNG into `in/`.
    pub fn write_input(&self, name: &str, image: &image::RgbImage) {
        image.save(self.input_dir().join(name)).expect("write input image");
    }

    /// Run the exporter binary with the workspace as working directory.
    pub fn run_exporter(&self) -> Output {
        std::process::Command::new(env!("CARGO_BIN_EXE_imgprep"))
            .current_dir(self.dir.path())
            .output()
            .expect("run imgprep")
    }
}

pub mod fixtures {
    use palquant::Rgb;

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub fn solid(width: u32, height: u32, color: [u8; 3]) -> image::RgbImage {
        image::RgbImage::from_pixel(width, height, image::Rgb(color))
    }

    pub fn checkerboard(width: u32, height: u32) -> image::RgbImage {
        image::RgbImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgb([0, 0, 0])
            } else {
                image::Rgb([255, 255, 255])
            }
        })
    }
}
