//! Core data model for document outline reconstruction.

pub mod config;
pub mod error;
pub mod path;
pub mod serialize;
pub mod tree;
pub mod types;

pub use config::{AppConfig, BotConfig, DeliveryConfig, ExtractionMode, OutlineConfig, OutputFormat};
pub use error::{OutlineError, Result};
pub use path::SectionPath;
pub use serialize::{serialize, serialize_extraction, serialize_text, JsonStyle};
pub use tree::{NodeId, OutlineTree, SectionNode};
pub use types::{DocumentFormat, Extraction, NotFoundReason, SourceLine};
