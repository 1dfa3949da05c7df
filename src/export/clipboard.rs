use arboard::Clipboard;

use crate::errors::{AppError, AppResult};

/// Copy the export payload to the system clipboard.
/// A single fire-and-forget write; nothing else depends on its ordering.
pub fn copy_text(payload: &str) -> AppResult<()> {
    let mut clipboard = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(payload.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))?;
    Ok(())
}
