//! # clipr - Clipboard Sink for Terminal Tools
//!
//! A narrow text-only clipboard seam: the application hands over a finished
//! string and learns whether the system accepted it.
//!
//! ## Key Features
//! - `ClipboardSink` trait so callers never depend on a platform backend
//! - `SystemClipboard` backed by `arboard`, created lazily and kept alive
//! - `MemoryClipboard` for tests and headless runs

pub mod clipboard;
pub mod error;

// Re-export main types for easy use
pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use error::{ClipError, ClipResult};
