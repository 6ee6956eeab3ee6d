use crate::error::{OutlineError, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;

/// Page ceiling applied to a gated contents scan unless overridden.
pub const DEFAULT_TOC_MAX_PAGES: usize = 15;
/// Nesting levels kept in full-body mode unless overridden.
pub const DEFAULT_BODY_MAX_DEPTH: usize = 3;
/// Message-size ceiling of the reply transport.
pub const DEFAULT_FRAME_LIMIT: usize = 4096;

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub outline: OutlineConfig,
    pub delivery: DeliveryConfig,
    pub bot: BotConfig,
}

impl AppConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.outline.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// How the extractor treats the line stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Gated by a contents marker, front pages only, titles without bodies.
    #[default]
    Toc,
    /// Ungated; free text accumulates under the nearest preceding heading.
    FullBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    pub mode: ExtractionMode,
    /// Case-sensitive substrings that announce a table of contents.
    pub markers: Vec<String>,
    /// Scan ceiling in pages (or page-equivalents). `None` picks the mode default.
    pub max_pages: Option<usize>,
    /// Lines per page-equivalent for formats without real pages.
    pub lines_per_page: usize,
    /// Deepest heading level accepted. `None` picks the mode default.
    pub max_depth: Option<usize>,
}

impl OutlineConfig {
    pub fn toc() -> Self {
        Self::default()
    }

    pub fn full_body() -> Self {
        Self {
            mode: ExtractionMode::FullBody,
            ..Self::default()
        }
    }

    pub fn with_markers(mut self, markers: Vec<String>) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = Some(pages);
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Whether numbering is only accepted after a contents marker.
    pub fn is_gated(&self) -> bool {
        self.mode == ExtractionMode::Toc
    }

    pub fn captures_body(&self) -> bool {
        self.mode == ExtractionMode::FullBody
    }

    /// Effective page ceiling for this mode.
    pub fn scan_ceiling(&self) -> Option<usize> {
        match (self.max_pages, self.mode) {
            (Some(pages), _) => Some(pages),
            (None, ExtractionMode::Toc) => Some(DEFAULT_TOC_MAX_PAGES),
            (None, ExtractionMode::FullBody) => None,
        }
    }

    /// Effective depth cap for this mode.
    pub fn depth_limit(&self) -> Option<usize> {
        match (self.max_depth, self.mode) {
            (Some(depth), _) => Some(depth),
            (None, ExtractionMode::Toc) => None,
            (None, ExtractionMode::FullBody) => Some(DEFAULT_BODY_MAX_DEPTH),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.lines_per_page == 0 {
            return Err(OutlineError::InvalidConfig("lines_per_page must be positive".into()));
        }
        if self.max_depth == Some(0) {
            return Err(OutlineError::InvalidConfig("max_depth must be positive".into()));
        }
        if self.is_gated() && self.markers.iter().all(|m| m.is_empty()) {
            return Err(OutlineError::InvalidConfig("toc mode needs at least one marker".into()));
        }
        Ok(())
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::Toc,
            markers: s(&[
                "Mundarija",
                "\u{0421}\u{043e}\u{0434}\u{0435}\u{0440}\u{0436}\u{0430}\u{043d}\u{0438}\u{0435}",
                "\u{041e}\u{0433}\u{043b}\u{0430}\u{0432}\u{043b}\u{0435}\u{043d}\u{0438}\u{0435}",
                "Table of Contents",
                "Contents",
            ]),
            max_pages: None,
            lines_per_page: 50,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Largest frame, in characters, the reply transport accepts.
    pub frame_limit: NonZeroUsize,
    /// Sentinel sent once every frame of a payload is out.
    pub acknowledgement: String,
    /// Pause between consecutive frames; 0 sends back to back.
    pub frame_interval_ms: u64,
    /// Indent JSON payloads with four spaces.
    pub pretty: bool,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            frame_limit: NonZeroUsize::new(DEFAULT_FRAME_LIMIT).unwrap_or(NonZeroUsize::MIN),
            acknowledgement: "All contents sent.".into(),
            frame_interval_ms: 0,
            pretty: true,
        }
    }
}

/// What the document handler sends back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The reconstructed outline, or `{"error": ...}`.
    #[default]
    Outline,
    /// Every extracted line as `{"text": ...}`.
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Reply to the start command; `{name}` is replaced by the user's name.
    pub greeting: String,
    pub usage_hint: String,
    pub unsupported_type: String,
    pub failure_prefix: String,
    pub output: OutputFormat,
}

impl BotConfig {
    pub fn greeting_for(&self, name: &str) -> String {
        self.greeting.replace("{name}", name)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello, {name}!".into(),
            usage_hint: "Send a PDF, DOCX or XLSX file and I will turn its table of contents into JSON.".into(),
            unsupported_type: "Unsupported file type. Please upload a PDF, DOCX or XLSX file.".into(),
            failure_prefix: "An error occurred: ".into(),
            output: OutputFormat::Outline,
        }
    }
}
