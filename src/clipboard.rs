//! System clipboard access for copy actions.
//!
//! Self-contained; no coupling to UI or application state.

/// Copy text to the system clipboard.
///
/// Returns a human-readable error message on failure so the caller can
/// surface it as a notice instead of crashing the TUI.
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
}
