//! Clipboard error types

use thiserror::Error;

pub type ClipResult<T> = Result<T, ClipError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipError {
    /// No clipboard provider could be opened (no display server, no backend).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The provider opened but refused the content.
    #[error("Clipboard rejected content: {0}")]
    Rejected(String),
}

impl ClipError {
    /// True when retrying later may succeed, e.g. another process held the
    /// clipboard lock.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl From<arboard::Error> for ClipError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ClipboardNotSupported => Self::Unavailable(err.to_string()),
            arboard::Error::ClipboardOccupied => Self::Rejected(err.to_string()),
            other => Self::Rejected(other.to_string()),
        }
    }
}
