//! Timeline error types.
//!
//! Every timeline error is recoverable: the command that raised it is
//! all-or-nothing and leaves the model untouched.

/// Errors raised by timeline commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    /// Advance was invoked with no active shot.
    #[error("No available shot to set. Paste texts and start the clock first.")]
    NoActiveShot,

    /// Paste-merge input contained no usable text items.
    #[error("Could not parse any cue lines from the pasted text.")]
    EmptyParse,
}
