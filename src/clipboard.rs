use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::debug;

/// Write `text` to the system clipboard.
///
/// Fails when no clipboard is reachable (headless session, denied access).
/// Callers decide how to surface the error; it is never swallowed here.
/// On Linux the clipboard contents persist only while the process runs.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write text to clipboard")?;
    debug!(bytes = text.len(), "copied text to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_does_not_panic() {
        // Clipboard availability depends on the environment (CI often has
        // no display server), so success is not asserted.
        let _ = copy_to_clipboard("test");
    }
}
