//! STG Core - Backend logic for Shot Timer GUI
//!
//! This crate contains all business logic with zero UI dependencies:
//! the recording clock, the shot timeline state machine, clipboard text
//! parsing/serialization, configuration, and logging setup. It can be
//! used by the GUI application or a CLI tool.

pub mod clock;
pub mod config;
pub mod export;
pub mod logging;
pub mod timeline;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
