//! Contents-marker gate.
//!
//! Numbered lines before the table of contents (running headers, dates,
//! numbered paragraphs) are noise, so a gated scan ignores everything until
//! a line contains one of the configured markers. Arming is one-way.

use tracing::debug;

/// What the scan should do with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Not armed yet; skip the line.
    Closed,
    /// This line armed the gate; consume it, it is not a heading.
    Marker,
    /// Armed; parse the line.
    Open,
}

#[derive(Debug, Clone)]
pub struct TocGate {
    markers: Vec<String>,
    armed: bool,
    armed_at: Option<usize>,
    observed: usize,
}

impl TocGate {
    /// A closed gate waiting for any of `markers`. Empty markers never match.
    pub fn new(markers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
            armed: false,
            armed_at: None,
            observed: 0,
        }
    }

    /// A gate that is armed from the start (ungated scans).
    pub fn open() -> Self {
        Self {
            markers: Vec::new(),
            armed: true,
            armed_at: None,
            observed: 0,
        }
    }

    pub fn observe(&mut self, line: &str) -> GateDecision {
        let index = self.observed;
        self.observed += 1;
        if self.armed {
            return GateDecision::Open;
        }
        match self.markers.iter().find(|m| line.contains(m.as_str())) {
            Some(marker) => {
                debug!(line = index, marker = %marker, "contents marker found, gate armed");
                self.armed = true;
                self.armed_at = Some(index);
                GateDecision::Marker
            }
            None => GateDecision::Closed,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Index (in observed lines) of the marker line, if one armed the gate.
    pub fn armed_at(&self) -> Option<usize> {
        self.armed_at
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}
