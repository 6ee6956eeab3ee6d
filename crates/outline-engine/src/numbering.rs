//! Numbering token parser.
//!
//! One grammar serves every source format: after linearization a PDF page,
//! a Word paragraph and a spreadsheet cell all look the same.

use outline_core::SectionPath;
use regex::Regex;
use std::sync::LazyLock;

/// A line that starts with a numbering path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numbered<'a> {
    pub path: SectionPath,
    /// Text after the number, not yet cleaned.
    pub remainder: &'a str,
}

/// Matches `1`, `2.1`, `2.1.3` (with an optional closing dot) followed by
/// whitespace and some text.
pub struct NumberingParser {
    numbering_re: Regex,
}

impl NumberingParser {
    pub fn new() -> Self {
        Self {
            numbering_re: Regex::new(r"^([0-9]+(?:\.[0-9]+)*)\.?\s+(\S.*)$").unwrap(),
        }
    }

    /// Split a raw line into its path and remainder, or `None` when the line
    /// is not a numbered heading.
    pub fn parse<'a>(&self, line: &'a str) -> Option<Numbered<'a>> {
        let cap = self.numbering_re.captures(line.trim())?;
        let path = SectionPath::parse(cap.get(1)?.as_str()).ok()?;
        let remainder = cap.get(2)?.as_str().trim();
        if remainder.is_empty() {
            return None;
        }
        Some(Numbered { path, remainder })
    }
}

impl Default for NumberingParser {
    fn default() -> Self {
        Self::new()
    }
}

static PARSER: LazyLock<NumberingParser> = LazyLock::new(NumberingParser::new);

/// Parse with a shared parser instance.
pub fn parse_numbering(line: &str) -> Option<Numbered<'_>> {
    PARSER.parse(line)
}
