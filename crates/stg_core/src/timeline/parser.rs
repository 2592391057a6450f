//! Paste-merge text parsing.
//!
//! Turns a raw clipboard string into an ordered list of cue text items:
//!
//! 1. Split on newlines, trim each piece, drop empties.
//! 2. More than one line left: one item per line.
//! 3. Zero or one line left: split that line on horizontal tabs instead,
//!    trim, drop empties. This lets a single spreadsheet row pasted as
//!    one tab-separated line populate multiple shots.
//!
//! An empty result is the caller's signal to report a parse failure.

/// Split raw clipboard text into cue items.
pub fn split_items(raw: &str) -> Vec<String> {
    let lines: Vec<&str> = raw
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() > 1 {
        return lines.into_iter().map(String::from).collect();
    }

    // Single line (or nothing): try the tab-separated shape.
    let single = lines.first().copied().unwrap_or("");
    single
        .split('\t')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_multiline_text_into_one_item_per_line() {
        assert_eq!(split_items("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trims_and_drops_blank_lines() {
        assert_eq!(split_items("  a  \n\n   \nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn handles_windows_line_endings() {
        assert_eq!(split_items("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn single_line_splits_on_tabs() {
        assert_eq!(split_items("a\tb\tc"), vec!["a", "b", "c"]);
        assert_eq!(split_items(" a \t\t b "), vec!["a", "b"]);
    }

    #[test]
    fn single_line_without_tabs_is_one_item() {
        assert_eq!(split_items("just one cue"), vec!["just one cue"]);
    }

    #[test]
    fn tabs_within_multiline_text_are_kept_verbatim() {
        // The tab fallback only applies to single-line input.
        assert_eq!(split_items("a\tb\nc"), vec!["a\tb", "c"]);
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_items() {
        assert!(split_items("").is_empty());
        assert!(split_items("   \n  \n").is_empty());
        assert!(split_items("\t \t").is_empty());
    }
}
