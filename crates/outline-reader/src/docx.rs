//! Word (`.docx`) reader: one line per paragraph of `word/document.xml`.

use crate::archive;
use crate::error::Result;
use crate::traits::LineProducer;
use outline_core::{DocumentFormat, SourceLine};
use roxmltree::{Document, Node};
use tracing::debug;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";

/// Containers whose paragraphs count as body text: tables, content controls
/// (where Word keeps generated tables of contents) and tracked insertions.
const CONTAINERS: [&str; 7] = ["tbl", "tr", "tc", "sdt", "sdtContent", "customXml", "ins"];

pub struct DocxReader;

impl DocxReader {
    pub fn new() -> Self {
        Self
    }

    /// Paragraph texts of a `document.xml` body, in document order.
    pub fn paragraphs(xml: &str) -> Result<Vec<String>> {
        let doc = Document::parse(xml)?;
        let mut lines = Vec::new();
        if let Some(body) = doc.descendants().find(|n| n.has_tag_name((W_NS, "body"))) {
            collect_blocks(body, &mut lines);
        }
        Ok(lines)
    }
}

fn collect_blocks(node: Node<'_, '_>, out: &mut Vec<String>) {
    for child in node.children().filter(Node::is_element) {
        if child.has_tag_name((W_NS, "p")) {
            archive::push_lines(out, &paragraph_text(child));
        } else if child.tag_name().namespace() == Some(W_NS)
            && CONTAINERS.contains(&child.tag_name().name())
        {
            collect_blocks(child, out);
        }
    }
}

fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    for node in paragraph.descendants().filter(Node::is_element) {
        if node.tag_name().namespace() != Some(W_NS) {
            continue;
        }
        match node.tag_name().name() {
            "t" => text.push_str(node.text().unwrap_or("")),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            _ => {}
        }
    }
    text
}

impl LineProducer for DocxReader {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn read_lines(&self, bytes: &[u8], _max_pages: Option<usize>) -> Result<Vec<SourceLine>> {
        let mut package = archive::open(bytes)?;
        let xml = archive::read_part(&mut package, DOCUMENT_PART)?;
        let lines = Self::paragraphs(&xml)?;
        debug!(lines = lines.len(), "docx linearized");
        Ok(lines.into_iter().map(SourceLine::new).collect())
    }
}

impl Default for DocxReader {
    fn default() -> Self {
        Self::new()
    }
}
