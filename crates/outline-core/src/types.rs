use crate::tree::OutlineTree;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Source document formats accepted by the line producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Xlsx,
}

impl DocumentFormat {
    pub const PDF_MIME: &'static str = "application/pdf";
    pub const DOCX_MIME: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
    pub const XLSX_MIME: &'static str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    pub const ALL: [DocumentFormat; 3] = [Self::Pdf, Self::Docx, Self::Xlsx];

    /// Map an exact MIME type to a format.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim() {
            Self::PDF_MIME => Some(Self::Pdf),
            Self::DOCX_MIME => Some(Self::Docx),
            Self::XLSX_MIME => Some(Self::Xlsx),
            _ => None,
        }
    }

    /// Guess the format from a file name's extension (case-insensitive).
    pub fn from_extension(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => Self::PDF_MIME,
            Self::Docx => Self::DOCX_MIME,
            Self::Xlsx => Self::XLSX_MIME,
        }
    }

    /// Whether producers of this format report real page numbers.
    pub fn is_paginated(&self) -> bool {
        matches!(self, Self::Pdf)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One linearized line of a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub text: String,
    /// Zero-based page index for paginated formats.
    pub page: Option<usize>,
}

impl SourceLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), page: None }
    }

    pub fn on_page(text: impl Into<String>, page: usize) -> Self {
        Self { text: text.into(), page: Some(page) }
    }
}

impl From<&str> for SourceLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceLine {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Why a scan produced no outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    /// A gated scan never saw a contents marker.
    MarkerNotFound,
    /// The scan ran but no line matched the numbering grammar.
    NoSections,
}

impl NotFoundReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MarkerNotFound => "table of contents not found",
            Self::NoSections => "no numbered sections found",
        }
    }
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of extracting one document. Not finding an outline is an
/// expected result, not an error.
#[derive(Debug, Clone)]
pub enum Extraction {
    Found(OutlineTree),
    NotFound(NotFoundReason),
}

impl Extraction {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn tree(&self) -> Option<&OutlineTree> {
        match self {
            Self::Found(tree) => Some(tree),
            Self::NotFound(_) => None,
        }
    }

    pub fn into_tree(self) -> Option<OutlineTree> {
        match self {
            Self::Found(tree) => Some(tree),
            Self::NotFound(_) => None,
        }
    }

    pub fn reason(&self) -> Option<NotFoundReason> {
        match self {
            Self::Found(_) => None,
            Self::NotFound(reason) => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_mime() {
        for format in DocumentFormat::ALL {
            assert_eq!(DocumentFormat::from_mime(format.mime_type()), Some(format));
        }
        assert_eq!(DocumentFormat::from_mime("text/plain"), None);
        assert_eq!(DocumentFormat::from_mime("application/msword"), None);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("report.PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("/tmp/a.b.docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension("sheet.xlsx"), Some(DocumentFormat::Xlsx));
        assert_eq!(DocumentFormat::from_extension("notes.txt"), None);
        assert_eq!(DocumentFormat::from_extension("README"), None);
    }

    #[test]
    fn test_only_pdf_is_paginated() {
        assert!(DocumentFormat::Pdf.is_paginated());
        assert!(!DocumentFormat::Docx.is_paginated());
        assert_eq!(DocumentFormat::Xlsx.to_string(), "xlsx");
    }

    #[test]
    fn test_extraction_accessors() {
        let missing = Extraction::NotFound(NotFoundReason::NoSections);
        assert!(!missing.is_found());
        assert!(missing.tree().is_none());
        assert_eq!(missing.reason(), Some(NotFoundReason::NoSections));
        assert_eq!(missing.reason().map(|r| r.to_string()).as_deref(), Some("no numbered sections found"));

        let found = Extraction::Found(OutlineTree::new());
        assert!(found.is_found());
        assert!(found.reason().is_none());
        assert!(found.into_tree().is_some());
    }
}
