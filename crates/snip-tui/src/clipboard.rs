use snip_core::{SnipError, SnipResult};

/// Makes `text` the system clipboard contents.
pub fn copy_to_clipboard(text: &str) -> SnipResult<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text))
        .map_err(|e| SnipError::Clipboard(e.to_string()))
}
