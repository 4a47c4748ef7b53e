//! Clipboard access for the Paste button

use arboard::Clipboard;

/// Read the current clipboard text
pub fn read_text() -> Result<String, String> {
    let mut clipboard = Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;
    clipboard
        .get_text()
        .map_err(|e| format!("Failed to read clipboard: {}", e))
}
