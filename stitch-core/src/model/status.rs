//! ``src/model/status.rs``
//!
//! One-line status message with a severity level. It stays until replaced.

use compact_str::CompactString;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum StatusLevel {
    #[default]
    Info = 0,
    Success = 1,
    Warning = 2,
    Error = 3,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub message: CompactString,
    pub level: StatusLevel,
}

impl StatusLine {
    #[must_use]
    pub fn new(message: impl Into<CompactString>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}
