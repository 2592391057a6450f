//! OS clipboard access.
//!
//! Thin wrapper around `arboard`. Both directions are fallible external
//! calls: a failure is logged and reported to the caller, never a panic,
//! and the core model is untouched either way.

/// Write text to the system clipboard.
pub fn write_text(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Read text from the system clipboard.
pub fn read_text() -> Result<String, arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.get_text()
}
