//! Excel (`.xlsx`) reader: text cells of the first worksheet, row by row.

use crate::archive::{self, Package};
use crate::error::{ReaderError, Result};
use crate::traits::LineProducer;
use outline_core::{DocumentFormat, SourceLine};
use roxmltree::{Document, Node};
use tracing::debug;

const SML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";
const FIRST_SHEET_PART: &str = "xl/worksheets/sheet1.xml";

pub struct XlsxReader;

impl XlsxReader {
    pub fn new() -> Self {
        Self
    }

    /// Entries of `sharedStrings.xml`, rich-text runs concatenated and
    /// phonetic hints dropped.
    pub fn shared_strings(xml: &str) -> Result<Vec<String>> {
        let doc = Document::parse(xml)?;
        Ok(doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name((SML_NS, "si")))
            .map(|si| {
                si.descendants()
                    .filter(|n| n.has_tag_name((SML_NS, "t")))
                    .filter(|t| !t.ancestors().any(|a| a.has_tag_name((SML_NS, "rPh"))))
                    .filter_map(|t| t.text())
                    .collect::<String>()
            })
            .collect())
    }

    /// Text cells of one worksheet in row-major order. Numeric, boolean and
    /// error cells are skipped.
    pub fn sheet_cells(xml: &str, shared: &[String]) -> Result<Vec<String>> {
        let doc = Document::parse(xml)?;
        let mut lines = Vec::new();
        for row in doc.descendants().filter(|n| n.has_tag_name((SML_NS, "row"))) {
            for cell in row.children().filter(|n| n.has_tag_name((SML_NS, "c"))) {
                if let Some(text) = cell_text(cell, shared)? {
                    archive::push_lines(&mut lines, &text);
                }
            }
        }
        Ok(lines)
    }

    fn first_sheet_name(package: &Package<'_>) -> Option<String> {
        if package.file_names().any(|n| n == FIRST_SHEET_PART) {
            return Some(FIRST_SHEET_PART.to_string());
        }
        let mut sheets: Vec<&str> = package
            .file_names()
            .filter(|n| n.starts_with("xl/worksheets/") && n.ends_with(".xml"))
            .collect();
        sheets.sort_unstable_by_key(|name| (sheet_number(name).unwrap_or(u64::MAX), *name));
        sheets.first().map(|s| s.to_string())
    }
}

/// Trailing number of a worksheet part name: `xl/worksheets/sheet10.xml` is 10.
fn sheet_number(name: &str) -> Option<u64> {
    let stem = name.strip_suffix(".xml")?;
    let digits = stem.len() - stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    stem[stem.len() - digits..].parse().ok()
}

fn child_value<'a>(cell: Node<'a, '_>, name: &str) -> Option<&'a str> {
    cell.children()
        .find(|n| n.has_tag_name((SML_NS, name)))
        .and_then(|n| n.text())
}

fn cell_text(cell: Node<'_, '_>, shared: &[String]) -> Result<Option<String>> {
    match cell.attribute("t") {
        Some("s") => {
            let Some(raw) = child_value(cell, "v") else {
                return Ok(None);
            };
            let index: usize = raw.trim().parse().map_err(|_| ReaderError::Corrupt {
                format: DocumentFormat::Xlsx,
                reason: format!("bad shared string index {raw:?}"),
            })?;
            shared.get(index).cloned().map(Some).ok_or_else(|| ReaderError::Corrupt {
                format: DocumentFormat::Xlsx,
                reason: format!("shared string {index} out of range"),
            })
        }
        Some("inlineStr") => Ok(Some(
            cell.descendants()
                .filter(|n| n.has_tag_name((SML_NS, "t")))
                .filter_map(|t| t.text())
                .collect(),
        )),
        Some("str") => Ok(child_value(cell, "v").map(str::to_string)),
        _ => Ok(None),
    }
}

impl LineProducer for XlsxReader {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Xlsx
    }

    fn read_lines(&self, bytes: &[u8], _max_pages: Option<usize>) -> Result<Vec<SourceLine>> {
        let mut package = archive::open(bytes)?;
        let shared = match archive::read_optional_part(&mut package, SHARED_STRINGS_PART)? {
            Some(xml) => Self::shared_strings(&xml)?,
            None => Vec::new(),
        };
        let sheet = Self::first_sheet_name(&package)
            .ok_or_else(|| ReaderError::MissingPart("xl/worksheets/*.xml".into()))?;
        let xml = archive::read_part(&mut package, &sheet)?;
        let lines = Self::sheet_cells(&xml, &shared)?;
        debug!(sheet = %sheet, lines = lines.len(), "xlsx linearized");
        Ok(lines.into_iter().map(SourceLine::new).collect())
    }
}

impl Default for XlsxReader {
    fn default() -> Self {
        Self::new()
    }
}
