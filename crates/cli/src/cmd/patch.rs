//! Patch libtoupcam.so to enable debug logging

use crate::util;
use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tu_core::{atomic_write, Blob, PatchOutcome, Patcher, Sha1Hash, PATCHED_LIBRARY_NAME};

/// What a patch run ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchStatus {
    /// Patched library written to this path
    Written(PathBuf),
    /// `--check` only: the build is supported
    Supported,
    /// Digest not recognised; nothing written
    Unsupported,
}

/// Patch `library` with the built-in build table, writing into `out_dir`
pub fn run<W: Write>(library: &Path, out_dir: &Path, check_only: bool, out: &mut W) -> Result<PatchStatus> {
    run_with(&Patcher::default(), library, out_dir, check_only, out)
}

/// Patch `library` against an explicit build table
pub fn run_with<W: Write>(
    patcher: &Patcher<'_>,
    library: &Path,
    out_dir: &Path,
    check_only: bool,
    out: &mut W,
) -> Result<PatchStatus> {
    let blob = Blob::read(library)?;
    debug!("Loaded {} ({})", library.display(), util::format_size(blob.len() as u64));

    if check_only {
        return check(patcher, &blob, out);
    }

    match patcher.apply(blob.into_bytes())? {
        PatchOutcome::Unsupported { computed, expected } => {
            print_unsupported(out, &computed, &expected)?;
            Ok(PatchStatus::Unsupported)
        }
        PatchOutcome::Patched { build, bytes, .. } => {
            let target = out_dir.join(PATCHED_LIBRARY_NAME);
            atomic_write(&target, &bytes)?;
            debug!("Wrote {} bytes for build {}", bytes.len(), build.name);

            writeln!(
                out,
                "{} Wrote patched library to {}",
                "✓".if_supports_color(Stream::Stdout, |t| t.green()),
                target.display()
            )?;
            print_preload_instructions(out, &target)?;
            Ok(PatchStatus::Written(target))
        }
    }
}

fn check<W: Write>(patcher: &Patcher<'_>, blob: &Blob, out: &mut W) -> Result<PatchStatus> {
    let computed = blob.sha1();
    match patcher.identify(&computed) {
        Some(build) => {
            writeln!(
                out,
                "{} Supported build: {}",
                "✓".if_supports_color(Stream::Stdout, |t| t.green()),
                build.name.if_supports_color(Stream::Stdout, |t| t.cyan())
            )?;
            writeln!(out, "  SHA1:   {}", computed)?;
            writeln!(out, "  Size:   {}", util::format_size(blob.len() as u64))?;
            writeln!(out, "  Patch:  {:#010x} -> {:#04x}", build.offset, build.value)?;
            Ok(PatchStatus::Supported)
        }
        None => {
            let expected: Vec<&str> = patcher.builds().iter().map(|b| b.sha1).collect();
            print_unsupported(out, &computed, &expected)?;
            Ok(PatchStatus::Unsupported)
        }
    }
}

fn print_unsupported<W: Write>(out: &mut W, computed: &Sha1Hash, expected: &[&str]) -> Result<()> {
    warn!("Refusing to patch unrecognised build {}", computed);
    writeln!(
        out,
        "{}",
        "Unsupported version of libtoupcam.so".if_supports_color(Stream::Stdout, |t| t.yellow())
    )?;
    writeln!(out, "Incorrect SHA1 digest {}, should be {}", computed, expected.join(" or "))?;
    Ok(())
}

fn print_preload_instructions<W: Write>(out: &mut W, target: &Path) -> Result<()> {
    writeln!(out, "You can set $LD_PRELOAD to use this, i.e.")?;
    writeln!(out)?;
    writeln!(out, "  $ gcc test.c -o test -ltoupcam")?;
    writeln!(out, "  $ touch toupcam.log")?;
    writeln!(out, "  $ LD_PRELOAD={} ./test", target.display())?;
    writeln!(out)?;
    Ok(())
}
