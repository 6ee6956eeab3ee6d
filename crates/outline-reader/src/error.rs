use outline_core::DocumentFormat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Missing document part: {0}")]
    MissingPart(String),
    #[error("Corrupt {format} document: {reason}")]
    Corrupt { format: DocumentFormat, reason: String },
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReaderError>;
