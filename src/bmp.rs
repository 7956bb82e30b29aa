//! Minimal BMP support for indexed-color artifacts.
//!
//! Covers exactly the two operations the exporter needs:
//!
//! - writing an 8-bit indexed BMP (`BITMAPFILEHEADER` + `BITMAPINFOHEADER`
//!   + color table + bottom-up pixel rows) for visual inspection of a
//!   quantized image, and
//! - pulling the embedded color table out of a paletted reference BMP.
//!
//! General-purpose BMP decoding is deliberately out of scope; the `image`
//! crate handles full decodes elsewhere.

use std::io::{self, Cursor, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use palquant::{IndexedImage, Rgb};

use crate::error::BmpError;

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
/// "BM", read as a little-endian u16.
const BMP_MAGIC: u16 = 0x4D42;

/// Write an [`IndexedImage`] as an 8-bit indexed BMP.
///
/// The color table carries the image's palette in canonical index order,
/// so a decoded artifact can only contain palette colors. Rows are written
/// bottom-up and padded to 4-byte boundaries per the format; `biClrUsed`
/// records the true palette length.
pub fn write_indexed<W: Write>(image: &IndexedImage, mut out: W) -> io::Result<()> {
    let width = image.width();
    let height = image.height();
    let palette = image.palette();

    let row_stride = (width + 3) & !3;
    let table_len = palette.len() as u32;
    let data_offset = FILE_HEADER_LEN + INFO_HEADER_LEN + table_len * 4;
    let image_size = row_stride * height;

    // BITMAPFILEHEADER
    out.write_u16::<LE>(BMP_MAGIC)?;
    out.write_u32::<LE>(data_offset + image_size)?;
    out.write_u32::<LE>(0)?; // reserved
    out.write_u32::<LE>(data_offset)?;

    // BITMAPINFOHEADER
    out.write_u32::<LE>(INFO_HEADER_LEN)?;
    out.write_i32::<LE>(width as i32)?;
    out.write_i32::<LE>(height as i32)?; // positive height: bottom-up rows
    out.write_u16::<LE>(1)?; // planes
    out.write_u16::<LE>(8)?; // bits per pixel
    out.write_u32::<LE>(0)?; // BI_RGB, uncompressed
    out.write_u32::<LE>(image_size)?;
    out.write_i32::<LE>(2835)?; // 72 dpi, pixels per meter
    out.write_i32::<LE>(2835)?;
    out.write_u32::<LE>(table_len)?;
    out.write_u32::<LE>(table_len)?; // all entries are important

    // Color table, BGR0 quads in canonical palette order.
    for &color in palette.colors() {
        let [r, g, b] = color.to_bytes();
        out.write_all(&[b, g, r, 0])?;
    }

    // Pixel rows, bottom-up, padded to the row stride.
    let indices = image.indices();
    let padding = vec![0u8; (row_stride - width) as usize];
    for y in (0..height).rev() {
        let start = (y * width) as usize;
        out.write_all(&indices[start..start + width as usize])?;
        out.write_all(&padding)?;
    }

    Ok(())
}

/// Extract the embedded color table from BMP data.
///
/// Returns:
/// - `Ok(Some(colors))` for a paletted BMP (8 bits per pixel or fewer),
///   honoring `biClrUsed` and capping at 256 entries;
/// - `Ok(None)` when the data is not a BMP, or is a BMP without a color
///   table (truecolor, or a core-header file) -- callers fall back to a
///   full decode;
/// - `Err` when the data claims to be a paletted BMP but the header or
///   color table is cut short.
pub fn read_color_table(data: &[u8]) -> Result<Option<Vec<Rgb>>, BmpError> {
    let mut cursor = Cursor::new(data);

    match cursor.read_u16::<LE>() {
        Ok(magic) if magic == BMP_MAGIC => {}
        _ => return Ok(None),
    }

    // Rest of BITMAPFILEHEADER: file size, reserved, data offset.
    cursor.set_position(14);
    let dib_size = cursor
        .read_u32::<LE>()
        .map_err(|_| BmpError::TruncatedHeader)?;
    if dib_size < INFO_HEADER_LEN {
        // BITMAPCOREHEADER and friends; no biClrUsed field to honor.
        return Ok(None);
    }

    cursor.set_position(28);
    let bit_count = cursor
        .read_u16::<LE>()
        .map_err(|_| BmpError::TruncatedHeader)?;
    if bit_count > 8 {
        return Ok(None);
    }

    cursor.set_position(46);
    let clr_used = cursor
        .read_u32::<LE>()
        .map_err(|_| BmpError::TruncatedHeader)?;

    let declared = if clr_used != 0 {
        clr_used as usize
    } else {
        1usize << bit_count
    };
    let entries = declared.min(256);

    let table_start = (FILE_HEADER_LEN + dib_size) as usize;
    let table_end = table_start + entries * 4;
    if data.len() < table_end {
        return Err(BmpError::TruncatedColorTable { expected: entries });
    }

    let colors = data[table_start..table_end]
        .chunks_exact(4)
        .map(|quad| Rgb::new(quad[2], quad[1], quad[0]))
        .collect();
    Ok(Some(colors))
}
