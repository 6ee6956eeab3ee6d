use crate::error::Result;
use outline_core::{DocumentFormat, SourceLine};

/// Trait for document line producers.
pub trait LineProducer: Send + Sync {
    /// Format this producer reads.
    fn format(&self) -> DocumentFormat;

    /// Linearize a document. Paginated readers stop after `max_pages`
    /// pages; others ignore it and leave pacing to the extractor.
    fn read_lines(&self, bytes: &[u8], max_pages: Option<usize>) -> Result<Vec<SourceLine>>;

    /// Read a document from disk.
    fn read_file(&self, path: &str, max_pages: Option<usize>) -> Result<Vec<SourceLine>> {
        let bytes = std::fs::read(path)?;
        self.read_lines(&bytes, max_pages)
    }
}
