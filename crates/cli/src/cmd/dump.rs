//! Print a hex/ASCII dump of a file

use anyhow::{Context, Result};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;
use tu_core::{Blob, HexDump};

pub fn run<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let blob = Blob::read(path)?;
    let dump = HexDump::new(blob.as_bytes());
    debug!("Dumping {} bytes as {} lines", blob.len(), dump.line_count());

    match dump.write_to(out).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("Failed to write dump"),
    }
}
