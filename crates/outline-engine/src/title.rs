//! Heading title cleanup.

const LEADERS: [char; 3] = ['.', '\u{2026}', '\u{00b7}'];

fn is_leader(c: char) -> bool {
    LEADERS.contains(&c)
}

/// Strip a trailing dot-leader run and the page number after it.
///
/// `"Introduction.......5"` becomes `"Introduction"`. Only the end of the
/// string is touched. Stripping repeats until nothing changes, so
/// `clean_title(&clean_title(s)) == clean_title(s)`.
pub fn clean_title(raw: &str) -> String {
    let mut current = raw.trim();
    while let Some(next) = strip_leader_tail(current) {
        current = next;
    }
    current.to_string()
}

/// One pass: `None` when the string does not end in a leader run.
fn strip_leader_tail(s: &str) -> Option<&str> {
    let without_page = s.trim_end_matches(|c: char| c.is_ascii_digit());
    let had_page = without_page.len() < s.len();
    let before_page = without_page.trim_end();
    let head = before_page.trim_end_matches(|c: char| is_leader(c) || c.is_whitespace());
    let run = &before_page[head.len()..];
    if run.is_empty() {
        return None;
    }
    // "2.0": a lone dot between digits is a decimal, not a leader
    let tight = before_page.len() == without_page.len();
    if had_page && tight && run == "." && head.ends_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leader_and_page() {
        assert_eq!(clean_title("Introduction.......5"), "Introduction");
        assert_eq!(clean_title("Deep Dive.......12"), "Deep Dive");
    }

    #[test]
    fn test_spaced_leaders() {
        assert_eq!(clean_title("Setup . . . . . 10"), "Setup");
        assert_eq!(clean_title("Setup ....   10  "), "Setup");
    }

    #[test]
    fn test_unicode_leaders() {
        assert_eq!(clean_title("Kirish\u{2026}\u{2026}3"), "Kirish");
        assert_eq!(clean_title("Введение ·········· 4"), "Введение");
    }

    #[test]
    fn test_trailing_dots_without_page() {
        assert_eq!(clean_title("Conclusion..."), "Conclusion");
    }

    #[test]
    fn test_no_leader_is_noop() {
        assert_eq!(clean_title("Overview"), "Overview");
        assert_eq!(clean_title("Chapter 5"), "Chapter 5");
        assert_eq!(clean_title("  padded  "), "padded");
    }

    #[test]
    fn test_decimal_kept() {
        assert_eq!(clean_title("Version 2.0"), "Version 2.0");
        assert_eq!(clean_title("Release 1.2 ........ 7"), "Release 1.2");
    }

    #[test]
    fn test_leading_text_untouched() {
        assert_eq!(clean_title("... and more....9"), "... and more");
    }

    #[test]
    fn test_only_leaders() {
        assert_eq!(clean_title("......."), "");
        assert_eq!(clean_title(".... 12"), "");
    }

    #[test]
    fn test_nested_runs_collapse_in_one_call() {
        let once = clean_title("A.5..7");
        assert_eq!(once, "A");
        assert_eq!(clean_title(&once), once);
    }
}
