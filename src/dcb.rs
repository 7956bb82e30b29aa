//! Binary-to-assembler data listing conversion.
//!
//! Renders an arbitrary byte stream as `DCB` directives for inclusion in
//! 6502 assembler source, 16 bytes per line:
//!
//! ```text
//! DCB $DE, $AD, $BE, $EF
//! ```

use std::io::{self, Read, Write};

/// Input bytes emitted per `DCB` line.
pub const BYTES_PER_LINE: usize = 16;

/// Write `input` as assembler `DCB` lines to `output`.
///
/// Each line holds up to [`BYTES_PER_LINE`] comma-separated `$XX` items
/// (two-digit uppercase hex); the final line carries the remainder. Empty
/// input writes nothing.
pub fn write_dcb_listing<R: Read, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    for chunk in data.chunks(BYTES_PER_LINE) {
        write!(output, "DCB ")?;
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                write!(output, ", ")?;
            }
            write!(output, "${:02X}", byte)?;
        }
        writeln!(output)?;
    }
    Ok(())
}
