//! Shot timeline state machine.
//!
//! Owns the ordered list of shots and the highlight cursor, and applies
//! the recording-session rules: the clock's first start activates shot
//! zero, each advance closes out the active shot and moves the highlight
//! to its successor, and resets clear timing data or the whole list.
//!
//! Cursor transitions:
//!
//! ```text
//! Idle -> Active(0)          on first clock start with shots present
//! Active(i) -> Active(i+1)   on advance while a successor exists
//! Active(N-1) -> Exhausted   on advance with no successor
//! any -> Idle                on reset-times / reset-all
//! ```
//!
//! Every command is all-or-nothing: a rejected command leaves the model
//! exactly as it was.

mod error;
mod parser;
mod types;

pub use error::TimelineError;
pub use parser::split_items;
pub use types::{AdvanceOutcome, Cursor, MergeReport, Shot, ShotRow};

use std::time::Duration;

use crate::export;

/// Ordered shot list plus the highlight cursor.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    shots: Vec<Shot>,
    cursor: Cursor,
}

impl Timeline {
    /// Create an empty timeline with no active shot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shots in display/recording order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Number of shots.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// Whether the timeline holds no shots.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Current highlight cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Index of the highlighted shot, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.cursor.active_index()
    }

    /// Activate the first shot if nothing is active yet.
    ///
    /// Called when the clock transitions from stopped to running. Only
    /// fires from a fully reset timeline; resuming mid-session leaves
    /// the cursor alone. Returns `true` if shot zero was activated.
    pub fn activate_first(&mut self, elapsed: Duration) -> bool {
        if self.cursor != Cursor::Idle || self.shots.is_empty() {
            return false;
        }

        self.cursor = Cursor::Active(0);
        let first = &mut self.shots[0];
        if first.start.is_none() {
            first.start = Some(elapsed);
        }
        tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "activated shot 0");
        true
    }

    /// Close out the active shot and move the highlight to its successor.
    ///
    /// Backfills the active shot's `start` if it was never stamped, sets
    /// its `end` to `elapsed`, then either enters the next shot (stamping
    /// its `start` if unset) or reports that every shot is recorded.
    /// Re-invoking after exhaustion reports [`AdvanceOutcome::AllRecorded`]
    /// again without mutating anything.
    pub fn advance(&mut self, elapsed: Duration) -> Result<AdvanceOutcome, TimelineError> {
        let index = match self.cursor {
            Cursor::Idle => return Err(TimelineError::NoActiveShot),
            Cursor::Exhausted => return Ok(AdvanceOutcome::AllRecorded),
            Cursor::Active(index) => index,
        };

        let shot = &mut self.shots[index];
        if shot.start.is_none() {
            shot.start = Some(elapsed);
        }
        shot.end = Some(elapsed);

        let next = index + 1;
        if next < self.shots.len() {
            self.cursor = Cursor::Active(next);
            let entered = &mut self.shots[next];
            if entered.start.is_none() {
                entered.start = Some(elapsed);
            }
            tracing::debug!(departed = index, entered = next, "advanced shot");
            Ok(AdvanceOutcome::Moved {
                departed: index,
                entered: next,
            })
        } else {
            self.cursor = Cursor::Exhausted;
            tracing::debug!(departed = index, "all shots recorded");
            Ok(AdvanceOutcome::AllRecorded)
        }
    }

    /// Clear every shot's timing data and drop the highlight.
    ///
    /// Cue texts are kept.
    pub fn reset_times(&mut self) {
        for shot in &mut self.shots {
            shot.start = None;
            shot.end = None;
        }
        self.cursor = Cursor::Idle;
    }

    /// Drop every shot and the highlight.
    pub fn clear(&mut self) {
        self.shots.clear();
        self.cursor = Cursor::Idle;
    }

    /// Merge a raw clipboard string into the shot list.
    ///
    /// Parses the text per [`split_items`], grows the list as needed
    /// (new shots have empty text and no timings) and overwrites the
    /// text of the first N shots. Existing timing data is untouched.
    pub fn merge_text(&mut self, raw: &str) -> Result<MergeReport, TimelineError> {
        let items = split_items(raw);
        if items.is_empty() {
            return Err(TimelineError::EmptyParse);
        }
        Ok(self.merge_items(&items))
    }

    /// Merge already-parsed cue items into the shot list.
    pub fn merge_items(&mut self, items: &[String]) -> MergeReport {
        if self.shots.len() < items.len() {
            self.shots.resize_with(items.len(), || Shot::new(""));
        }

        let filled = items.len().min(self.shots.len());
        for (shot, text) in self.shots.iter_mut().zip(items) {
            shot.text = text.clone();
        }

        tracing::debug!(parsed = items.len(), filled, "merged pasted cue texts");
        MergeReport {
            parsed: items.len(),
            filled,
        }
    }

    /// Render records for the shot list display.
    pub fn rows(&self) -> Vec<ShotRow> {
        let active = self.active_index();
        self.shots
            .iter()
            .enumerate()
            .map(|(i, shot)| ShotRow {
                label: format!("Shot {}", i + 1),
                interval: export::interval_text(shot),
                text: shot.text.clone(),
                is_active: active == Some(i),
            })
            .collect()
    }

    /// Text of the highlighted shot, for the rolling cue display.
    pub fn current_text(&self) -> Option<&str> {
        self.active_index().map(|i| self.shots[i].text.as_str())
    }

    /// Text of the shot after the highlighted one.
    ///
    /// Before the first start this is the first shot, so the display can
    /// show what is coming up once the clock starts.
    pub fn next_text(&self) -> Option<&str> {
        let next = match self.cursor {
            Cursor::Idle => 0,
            Cursor::Active(index) => index + 1,
            Cursor::Exhausted => return None,
        };
        self.shots.get(next).map(|shot| shot.text.as_str())
    }
}
