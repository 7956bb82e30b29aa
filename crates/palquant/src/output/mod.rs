//! Output types produced by the quantization pipeline.

mod indexed_image;

pub use indexed_image::IndexedImage;
