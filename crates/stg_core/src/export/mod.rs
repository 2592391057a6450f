//! Clipboard export serialization.
//!
//! Three export formats, each a pure function of the shot list. The
//! format is a caller choice, never state:
//!
//! - **Column**: one interval per line, for pasting into a spreadsheet
//!   column.
//! - **Row**: intervals joined by tabs on a single line, for pasting
//!   into a spreadsheet row.
//! - **Paired**: `interval<TAB>text` per line, pairing timing with the
//!   original cue text for import into audio-editing tools.
//!
//! Interval rendering per shot: `"mm:ss - mm:ss"` when both timestamps
//! are recorded, `"mm:ss"` when only the start is, empty otherwise.

use std::time::Duration;

use crate::timeline::Shot;

/// Which clipboard export format to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One interval per line.
    Column,
    /// Intervals joined by tabs, one line total.
    Row,
    /// `interval<TAB>text` per line.
    Paired,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Column => write!(f, "column"),
            ExportFormat::Row => write!(f, "row"),
            ExportFormat::Paired => write!(f, "audio"),
        }
    }
}

/// Format an elapsed duration as zero-padded `mm:ss`.
///
/// There is no hour component; past 99 minutes the minute field simply
/// widens (`100:00`), matching spreadsheet-friendly stopwatch output.
pub fn format_clock(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Interval string for one shot: `"mm:ss - mm:ss"`, `"mm:ss"`, or empty.
pub fn interval_text(shot: &Shot) -> String {
    match (shot.start, shot.end) {
        (Some(start), Some(end)) => {
            format!("{} - {}", format_clock(start), format_clock(end))
        }
        (Some(start), None) => format_clock(start),
        // end without start cannot occur; treat it as unrecorded
        _ => String::new(),
    }
}

/// Serialize the shot list for the clipboard. Never mutates state.
pub fn serialize(shots: &[Shot], format: ExportFormat) -> String {
    match format {
        ExportFormat::Column => shots
            .iter()
            .map(interval_text)
            .collect::<Vec<_>>()
            .join("\n"),
        ExportFormat::Row => shots
            .iter()
            .map(interval_text)
            .collect::<Vec<_>>()
            .join("\t"),
        ExportFormat::Paired => shots
            .iter()
            .map(|shot| format!("{}\t{}", interval_text(shot), shot.text))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(text: &str, start: Option<u64>, end: Option<u64>) -> Shot {
        Shot {
            text: text.to_string(),
            start: start.map(Duration::from_millis),
            end: end.map(Duration::from_millis),
        }
    }

    #[test]
    fn format_clock_pads_to_two_digits() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(90_000)), "01:30");
        assert_eq!(format_clock(Duration::from_secs(59)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(60)), "01:00");
    }

    #[test]
    fn format_clock_truncates_subsecond_remainder() {
        assert_eq!(format_clock(Duration::from_millis(999)), "00:00");
        assert_eq!(format_clock(Duration::from_millis(1_001)), "00:01");
    }

    #[test]
    fn format_clock_widens_past_99_minutes() {
        // No hour component: the minute field just grows.
        assert_eq!(format_clock(Duration::from_secs(99 * 60 + 59)), "99:59");
        assert_eq!(format_clock(Duration::from_secs(100 * 60)), "100:00");
    }

    #[test]
    fn interval_text_covers_all_timing_states() {
        assert_eq!(interval_text(&shot("a", None, None)), "");
        assert_eq!(interval_text(&shot("a", Some(5_000), None)), "00:05");
        assert_eq!(
            interval_text(&shot("a", Some(5_000), Some(65_000))),
            "00:05 - 01:05"
        );
    }

    #[test]
    fn column_line_count_equals_shot_count() {
        let shots = vec![
            shot("a", Some(0), Some(1_000)),
            shot("b", Some(1_000), None),
            shot("c", None, None),
        ];
        let out = serialize(&shots, ExportFormat::Column);
        // split, not lines(): a trailing unrecorded shot is an empty final line
        assert_eq!(out.split('\n').count(), shots.len());
        assert_eq!(out, "00:00 - 00:01\n00:01\n");
    }

    #[test]
    fn row_joins_with_tabs() {
        let shots = vec![shot("a", Some(0), Some(1_000)), shot("b", None, None)];
        assert_eq!(serialize(&shots, ExportFormat::Row), "00:00 - 00:01\t");
    }

    #[test]
    fn paired_keeps_cue_text() {
        let shots = vec![
            shot("Hello", Some(0), Some(2_000)),
            shot("World", Some(2_000), Some(4_000)),
        ];
        assert_eq!(
            serialize(&shots, ExportFormat::Paired),
            "00:00 - 00:02\tHello\n00:02 - 00:04\tWorld"
        );
    }

    #[test]
    fn empty_timeline_serializes_to_empty_string() {
        for format in [ExportFormat::Column, ExportFormat::Row, ExportFormat::Paired] {
            assert_eq!(serialize(&[], format), "");
        }
    }
}
