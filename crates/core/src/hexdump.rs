//! Hex/ASCII dump rendering
//!
//! One line per 16-byte chunk:
//!
//! ```text
//! 00000000: 54 6F 75 70 54 65 6B 00  01 02 03 04 05 06 07 08  ToupTek.........
//! ```
//!
//! The hex column is always [`HEX_COLUMN_WIDTH`] characters wide, so the
//! ASCII column of a short final line lines up with the lines above it.

use std::fmt;
use std::io::{self, Write};

/// Bytes rendered per line
pub const BYTES_PER_LINE: usize = 16;

/// Width of the hex column including its trailing separator
pub const HEX_COLUMN_WIDTH: usize = BYTES_PER_LINE * 3 + 2;

/// Placeholder for bytes outside the printable ASCII range
pub const NON_PRINTABLE: char = '.';

/// Lazily formatted dump of a byte slice
///
/// Implements [`fmt::Display`]; nothing is allocated until it is written.
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a> {
    data: &'a [u8],
}

impl<'a> HexDump<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Number of lines the dump will contain
    pub fn line_count(&self) -> usize {
        self.data.len().div_ceil(BYTES_PER_LINE)
    }

    /// Iterate over rendered lines (without trailing newline)
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        let data: &'a [u8] = self.data;
        data.chunks(BYTES_PER_LINE)
            .enumerate()
            .map(|(i, chunk)| format_line(i * BYTES_PER_LINE, chunk))
    }

    /// Write the dump to `out`, one `\n`-terminated line per chunk
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Render a single dump line for `chunk` starting at `offset`
///
/// `chunk` must not be longer than [`BYTES_PER_LINE`].
pub fn format_line(offset: usize, chunk: &[u8]) -> String {
    debug_assert!(chunk.len() <= BYTES_PER_LINE);

    let mut line = String::with_capacity(10 + HEX_COLUMN_WIDTH + BYTES_PER_LINE);
    line.push_str(&format!("{:08X}: ", offset));

    for i in 0..BYTES_PER_LINE {
        match chunk.get(i) {
            Some(byte) => line.push_str(&format!("{:02X} ", byte)),
            None => line.push_str("   "),
        }
        // Split the row into two groups of eight
        if i == BYTES_PER_LINE / 2 - 1 {
            line.push(' ');
        }
    }
    line.push(' ');

    line.extend(chunk.iter().map(|&b| printable(b)));
    line
}

/// ASCII rendering of one byte
pub fn printable(byte: u8) -> char {
    if (0x20..=0x7e).contains(&byte) {
        byte as char
    } else {
        NON_PRINTABLE
    }
}
