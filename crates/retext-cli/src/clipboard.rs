use anyhow::Context as _;

/// Copy `text` to the system clipboard.
///
/// # Errors
/// Returns an error if no clipboard is available (e.g. headless session) or
/// the write fails. Callers treat this as feedback, never as data loss —
/// the history slot is untouched either way.
pub fn copy(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("open clipboard")?;
    clipboard
        .set_text(text.to_owned())
        .context("write clipboard")?;
    Ok(())
}
