//! ``src/fs/probe.rs``
//!
//! # Text probe
//!
//! Decides whether a file is worth concatenating by decoding a bounded prefix.

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use crate::error::AppError;

/// Bounded-prefix text detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextProbe {
    limit: usize,
}

impl Default for TextProbe {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

impl TextProbe {
    pub const DEFAULT_LIMIT: usize = 4096;

    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// `false` for anything unreadable, including directories.
    #[must_use]
    pub fn is_text(&self, path: &Path) -> bool {
        self.read_prefix_bytes(path)
            .map(|bytes| looks_like_text(&bytes))
            .unwrap_or(false)
    }

    /// The decoded prefix, for previews.
    pub fn read_prefix(&self, path: &Path) -> Result<String, AppError> {
        let bytes = self
            .read_prefix_bytes(path)
            .map_err(|e| AppError::file_unreadable(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn read_prefix_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        let file = File::open(path)?;
        let mut buf = Vec::with_capacity(self.limit.min(64 * 1024));
        file.take(self.limit as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Valid UTF-8 without NUL bytes. A multi-byte sequence cut off at the end of
/// the buffer still counts, since the prefix boundary is arbitrary.
#[must_use]
pub fn looks_like_text(bytes: &[u8]) -> bool {
    if bytes.contains(&0) {
        return false;
    }
    match std::str::from_utf8(bytes) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}
