//! PDF reader: page text via `lopdf`, split into lines, numbered by page.

use crate::error::Result;
use crate::traits::LineProducer;
use lopdf::Document;
use outline_core::{DocumentFormat, SourceLine};
use tracing::{debug, warn};

pub struct PdfReader;

impl PdfReader {
    pub fn new() -> Self {
        Self
    }
}

impl LineProducer for PdfReader {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn read_lines(&self, bytes: &[u8], max_pages: Option<usize>) -> Result<Vec<SourceLine>> {
        let doc = Document::load_mem(bytes)?;
        let pages = doc.get_pages();
        let mut lines = Vec::new();
        for (index, page_number) in pages.keys().enumerate() {
            if max_pages.is_some_and(|max| index >= max) {
                break;
            }
            match doc.extract_text(&[*page_number]) {
                Ok(text) => lines.extend(
                    text.lines()
                        .map(str::trim)
                        .filter(|l| !l.is_empty())
                        .map(|l| SourceLine::on_page(l, index)),
                ),
                Err(e) => warn!(page = page_number, error = %e, "skipping unreadable pdf page"),
            }
        }
        debug!(pages = pages.len(), lines = lines.len(), "pdf linearized");
        Ok(lines)
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
