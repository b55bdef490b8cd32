//! ``src/model/mode.rs``
//!
//! Interaction modes. Browse is home; every other mode is an overlay entered
//! from Browse and left back to Browse, never chained.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    #[default]
    Browse = 0,
    Filter = 1,
    Search = 2,
    Reorder = 3,
    QuickMark = 4,
}

impl Mode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Browse => "BROWSE",
            Self::Filter => "FILTER",
            Self::Search => "SEARCH",
            Self::Reorder => "REORDER",
            Self::QuickMark => "QUICK-MARK",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_overlay(self) -> bool {
        !matches!(self, Self::Browse)
    }

    /// Browse to any overlay, any overlay back to Browse.
    #[must_use]
    pub const fn allows_transition(self, to: Self) -> bool {
        match (self, to) {
            (Self::Browse, Self::Browse) => false,
            (Self::Browse, _) => true,
            (_, Self::Browse) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
