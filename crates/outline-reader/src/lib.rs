//! Format-specific line producers.
//!
//! Each reader turns one binary document into an ordered list of text
//! lines. The outline engine never looks at the format; it only sees
//! [`outline_core::SourceLine`]s.

pub mod archive;
pub mod docx;
pub mod error;
pub mod pdf;
pub mod traits;
pub mod xlsx;

pub use docx::DocxReader;
pub use error::{ReaderError, Result};
pub use pdf::PdfReader;
pub use traits::LineProducer;
pub use xlsx::XlsxReader;

use outline_core::{DocumentFormat, SourceLine};

/// The reader for a format.
pub fn producer_for(format: DocumentFormat) -> Box<dyn LineProducer> {
    match format {
        DocumentFormat::Pdf => Box::new(PdfReader::new()),
        DocumentFormat::Docx => Box::new(DocxReader::new()),
        DocumentFormat::Xlsx => Box::new(XlsxReader::new()),
    }
}

/// Linearize a document with the reader for `format`.
pub fn read_document(
    format: DocumentFormat,
    bytes: &[u8],
    max_pages: Option<usize>,
) -> Result<Vec<SourceLine>> {
    producer_for(format).read_lines(bytes, max_pages)
}
