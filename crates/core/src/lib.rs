//! toupcam-utils core - byte-level primitives behind the toupcam tools
//!
//! This crate provides:
//! - SHA-1 hashing for build identification
//! - Full-file blob loading
//! - Hex/ASCII dump rendering
//! - Checksum-gated single-byte patching of libtoupcam.so
//! - Atomic output writes

pub mod hash;
pub mod blob;
pub mod hexdump;
pub mod patch;
pub mod store;

// Re-export main types for convenience
pub use hash::{Sha1Hash, IncrementalHasher, hash_bytes};
pub use blob::Blob;
pub use hexdump::{HexDump, BYTES_PER_LINE};
pub use patch::{KnownBuild, PatchError, PatchOutcome, Patcher, KNOWN_BUILDS, PATCHED_LIBRARY_NAME};
pub use store::atomic_write;

/// Common result type used throughout toupcam-utils-core
pub type Result<T> = anyhow::Result<T>;
