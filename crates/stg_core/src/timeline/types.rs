//! Shot timeline data types.

use std::time::Duration;

/// One cue line to be timed during the recording session.
///
/// Timestamps are elapsed-clock offsets, recorded as explicit options so
/// an unrecorded field is distinguishable from a zero offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot {
    /// Display text for the cue (possibly empty).
    pub text: String,
    /// Elapsed time when this shot became active. Set at most once per
    /// recording pass until a times-reset.
    pub start: Option<Duration>,
    /// Elapsed time when this shot was marked complete. Only ever set
    /// after (or together with) `start`.
    pub end: Option<Duration>,
}

impl Shot {
    /// Create an untimed shot with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: None,
            end: None,
        }
    }

    /// Whether both timestamps have been recorded.
    pub fn is_recorded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Position of the highlight in the shot list.
///
/// `Exhausted` is an explicit variant rather than an index sentinel so
/// that advancing past the last shot can be reported repeatedly without
/// touching any shot data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// No shot active: before the first start, or after a reset.
    #[default]
    Idle,
    /// The shot at this index is highlighted and being timed.
    Active(usize),
    /// Every shot has been recorded.
    Exhausted,
}

impl Cursor {
    /// Index of the active shot, if one is active.
    pub fn active_index(&self) -> Option<usize> {
        match self {
            Cursor::Active(index) => Some(*index),
            _ => None,
        }
    }
}

/// Result of a successful advance command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The highlight moved from one shot to its successor.
    Moved { departed: usize, entered: usize },
    /// The departed shot was the last one; all shots are now recorded.
    AllRecorded,
}

/// Counts reported after a paste-merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of text items parsed from the clipboard.
    pub parsed: usize,
    /// Number of shots created or updated with new text.
    pub filled: usize,
}

/// Render record for one row of the shot list display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotRow {
    /// Row label, e.g. `"Shot 3"`.
    pub label: String,
    /// Recorded interval, e.g. `"00:05 - 00:12"`, or empty.
    pub interval: String,
    /// Cue text.
    pub text: String,
    /// Whether this row is the highlighted one.
    pub is_active: bool,
}
