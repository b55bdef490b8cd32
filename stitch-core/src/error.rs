//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for Stitch
//!
//! Every fallible operation in the core returns `Result<T, AppError>`. None of
//! these errors end the session: the controller turns them into a status
//! message and the event loop keeps running.

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::model::mode::Mode;

/// Unified error type for all browser operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The directory could not be enumerated (permissions, deleted underneath us).
    #[error("Cannot list {path:?}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be read for preview, copy or concatenation.
    #[error("Cannot read {path:?}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The concatenation destination could not be created or written.
    #[error("Cannot write output {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No usable system clipboard.
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// A mode change the state machine does not allow.
    #[error("Invalid mode transition: {from} -> {to}")]
    InvalidTransition { from: Mode, to: Mode },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a directory listing failure
    pub fn directory_unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a file read failure
    pub fn file_unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create an output write failure
    pub fn output_write<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a config I/O failure
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Short, path-free text for the one-line status bar.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            Self::DirectoryUnreadable { source, .. } => {
                format!("Error listing directory: {source}")
            }
            Self::FileUnreadable { path, source } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                format!("Error reading {name}: {source}")
            }
            Self::OutputWrite { source, .. } => format!("Error during concatenation: {source}"),
            Self::ClipboardUnavailable(reason) => format!("Failed to copy to clipboard: {reason}"),
            other => other.to_string(),
        }
    }
}

impl From<clipr::ClipError> for AppError {
    fn from(e: clipr::ClipError) -> Self {
        Self::ClipboardUnavailable(e.to_string())
    }
}
