use outline_core::DocumentFormat;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Start,
    Document,
    Text,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Document => "document",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded file as the transport hands it over.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    /// MIME type declared by the sender.
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Format from the declared MIME type, `None` when unsupported.
    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_mime(&self.mime_type)
    }
}

#[derive(Debug, Clone)]
pub enum Incoming {
    /// The start command, with the sender's full name.
    Start { user_name: String },
    Document(DocumentUpload),
    Text(String),
}

impl Incoming {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Start { .. } => MessageKind::Start,
            Self::Document(_) => MessageKind::Document,
            Self::Text(_) => MessageKind::Text,
        }
    }
}
