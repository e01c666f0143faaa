//! Clipboard helper for copying product ids
//!
//! Uses `arboard` for cross-platform support. The clipboard is created fresh
//! each time so no handle is held between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails without a display server (headless Linux) or on permission errors.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .with_context(|| format!("Failed to copy {:?} to clipboard", text))?;
    Ok(())
}
