use arboard::Clipboard;
use prompt_queue_core::{ClipboardError, ClipboardWriter};

/// System clipboard via arboard.
///
/// The handle is opened lazily and kept: on X11/Wayland the copied text is
/// served by this process and disappears once the last handle is dropped.
#[derive(Default)]
pub(crate) struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialized".to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self
            .handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()));
        if result.is_err() {
            // Reopen on next attempt in case the handle went stale
            self.clipboard = None;
        }
        result
    }
}
