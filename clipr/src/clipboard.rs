use crate::error::{ClipError, ClipResult};
use tracing::debug;

/// Destination for text the user asked to copy.
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: String) -> ClipResult<()>;

    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;
}

/// The platform clipboard.
///
/// The `arboard` handle is opened on first use and then kept: on X11 the
/// contents live only as long as the owning handle.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> ClipResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        self.inner
            .as_mut()
            .ok_or_else(|| ClipError::Unavailable("clipboard handle missing".into()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> ClipResult<()> {
        let len = text.len();
        self.handle()?.set_text(text)?;
        debug!(marker = "CLIPBOARD_SET", bytes = len, "System clipboard updated");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// In-memory clipboard. Records every copy; can be told to fail.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub content: Option<String>,
    pub copies: usize,
    pub fail_with: Option<ClipError>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails as unavailable.
    pub fn unavailable() -> Self {
        Self {
            fail_with: Some(ClipError::Unavailable("no display".into())),
            ..Self::default()
        }
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: String) -> ClipResult<()> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.content = Some(text);
        self.copies += 1;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
