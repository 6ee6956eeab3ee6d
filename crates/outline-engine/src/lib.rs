//! Outline reconstruction engine.
//!
//! Lines flow through the contents gate, the numbering parser and the title
//! cleaner before landing in an [`outline_core::OutlineTree`]:
//!
//! 1. `gate`: arms on the first contents marker (gated mode only)
//! 2. `numbering`: splits `"2.1 Title"` into a path and the remaining text
//! 3. `title`: strips dot leaders and page numbers
//! 4. `extractor`: drives the scan and decides found / not found

pub mod extractor;
pub mod gate;
pub mod numbering;
pub mod title;

pub use extractor::{ExtractionOutcome, OutlineExtractor, OutlineScan, ScanReport, ScanState};
pub use gate::{GateDecision, TocGate};
pub use numbering::{parse_numbering, Numbered, NumberingParser};
pub use title::clean_title;
