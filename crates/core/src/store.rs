//! On-disk output for patched artifacts

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Mode given to written files; temp files start out owner-only
#[cfg(unix)]
pub const OUTPUT_MODE: u32 = 0o644;

/// Atomic write helper
///
/// Writes data to a temporary file next to `target`, fsyncs it, then renames
/// it over `target`. An existing file at `target` is replaced; a failed write
/// leaves it untouched. On unix the result is world-readable
/// ([`OUTPUT_MODE`]) so other users can preload it.
pub fn atomic_write(target: &Path, data: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(data)
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(Permissions::from_mode(OUTPUT_MODE))
            .context("Failed to set permissions on temporary file")?;
    }
    tmp.as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    debug!("Renaming {} -> {}", tmp.path().display(), target.display());
    tmp.persist(target)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    Ok(())
}
