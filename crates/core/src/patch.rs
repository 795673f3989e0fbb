//! Checksum-gated single-byte patching of libtoupcam.so
//!
//! A build is recognised only by the SHA-1 of the complete file. Each
//! recognised build carries the one byte that has to change to make the
//! library write its debug output to `./toupcam.log`. The offsets differ
//! between releases, so anything not listed in [`KNOWN_BUILDS`] is refused.

use crate::hash::{hash_bytes, Sha1Hash};
use thiserror::Error;
use tracing::{debug, info};

/// File name the patched library is written to
pub const PATCHED_LIBRARY_NAME: &str = "libtoupcam_dbg.so";

/// Builds of libtoupcam.so this tool knows how to patch
pub const KNOWN_BUILDS: &[KnownBuild<'static>] = &[KnownBuild {
    name: "libtoupcam.so",
    sha1: "fc795a438afa4c294c35f02077492fa463dfd60d",
    // Log flags; 0x82 enables file output
    offset: 0x0081_7f79,
    value: 0x82,
}];

/// A library build identified by digest, and the byte to rewrite in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownBuild<'a> {
    /// Human-readable build name
    pub name: &'a str,
    /// Lowercase hex SHA-1 of the unmodified file
    pub sha1: &'a str,
    /// Absolute file offset of the byte to rewrite
    pub offset: usize,
    /// Replacement value
    pub value: u8,
}

impl KnownBuild<'_> {
    /// Overwrite the patch byte in `bytes`, returning the previous value
    pub fn apply(&self, bytes: &mut [u8]) -> Result<u8, PatchError> {
        let len = bytes.len();
        let slot = bytes
            .get_mut(self.offset)
            .ok_or(PatchError::OffsetOutOfBounds { offset: self.offset, len })?;
        let previous = *slot;
        *slot = self.value;
        Ok(previous)
    }
}

/// Errors raised while patching a recognised build
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("patch offset {offset:#010x} is beyond the end of the input ({len} bytes)")]
    OffsetOutOfBounds { offset: usize, len: usize },
}

/// Result of running the patcher over a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome<'a> {
    /// Digest matched; `bytes` is the patched buffer
    Patched {
        build: &'a KnownBuild<'a>,
        previous: u8,
        bytes: Vec<u8>,
    },
    /// Digest matched nothing in the table; nothing should be written
    Unsupported {
        computed: Sha1Hash,
        expected: Vec<&'a str>,
    },
}

impl PatchOutcome<'_> {
    pub fn is_patched(&self) -> bool {
        matches!(self, PatchOutcome::Patched { .. })
    }
}

/// Matches buffers against a table of known builds
#[derive(Debug, Clone, Copy)]
pub struct Patcher<'a> {
    builds: &'a [KnownBuild<'a>],
}

impl<'a> Patcher<'a> {
    /// Create a patcher over an explicit build table
    pub fn new(builds: &'a [KnownBuild<'a>]) -> Self {
        Self { builds }
    }

    /// Build table this patcher checks against
    pub fn builds(&self) -> &'a [KnownBuild<'a>] {
        self.builds
    }

    /// Look up the build whose digest equals `digest`
    pub fn identify(&self, digest: &Sha1Hash) -> Option<&'a KnownBuild<'a>> {
        let hex = digest.to_hex();
        self.builds.iter().find(|build| build.sha1 == hex)
    }

    /// Verify `data` and patch it when the digest is recognised
    ///
    /// The digest is computed over the unmodified buffer. An unrecognised
    /// digest is an expected outcome, not an error.
    pub fn apply(&self, mut data: Vec<u8>) -> Result<PatchOutcome<'a>, PatchError> {
        let computed = hash_bytes(&data);
        debug!("Input digest {} ({} bytes)", computed, data.len());

        let Some(build) = self.identify(&computed) else {
            return Ok(PatchOutcome::Unsupported {
                computed,
                expected: self.builds.iter().map(|b| b.sha1).collect(),
            });
        };

        let previous = build.apply(&mut data)?;
        info!(
            "Patched {} at {:#010x}: {:#04x} -> {:#04x}",
            build.name, build.offset, previous, build.value
        );

        Ok(PatchOutcome::Patched {
            build,
            previous,
            bytes: data,
        })
    }
}

impl Default for Patcher<'static> {
    fn default() -> Self {
        Self::new(KNOWN_BUILDS)
    }
}
