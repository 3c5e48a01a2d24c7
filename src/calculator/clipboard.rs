//! Copying calculator values to the system clipboard.

use crate::error::Result;
use arboard::Clipboard;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    tracing::debug!(%text, "copied to clipboard");
    Ok(())
}
