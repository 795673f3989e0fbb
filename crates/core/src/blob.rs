//! In-memory binary blobs loaded from disk

use crate::hash::{hash_bytes, Sha1Hash};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// A blob holds a file's complete contents
///
/// Loaded by a single full-file read; the file handle is closed before
/// `read` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Vec<u8>,
}

impl Blob {
    /// Read the whole file at `path`
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(Self { data })
    }

    /// Create a blob from bytes already in memory
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Blob contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// SHA-1 of the contents
    pub fn sha1(&self) -> Sha1Hash {
        hash_bytes(&self.data)
    }

    /// Take ownership of the contents
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
