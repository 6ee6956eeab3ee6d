//! Outline extraction. One forward pass over a document's lines through the
//! gate, the numbering parser, the title cleaner and the tree builder.

use crate::gate::{GateDecision, TocGate};
use crate::numbering::NumberingParser;
use crate::title::clean_title;
use outline_core::{
    Extraction, NodeId, NotFoundReason, OutlineConfig, OutlineTree, Result, SourceLine,
};
use tracing::{debug, info, trace};

/// Where a scan is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    ScanningForMarker,
    Armed,
    Done,
}

/// Counters collected during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub lines_scanned: usize,
    pub pages_scanned: usize,
    /// Index of the line that armed the gate.
    pub marker_line: Option<usize>,
    pub headings: usize,
    pub body_lines: usize,
    pub hit_ceiling: bool,
}

/// Extraction result plus the scan counters.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub extraction: Extraction,
    pub report: ScanReport,
}

/// Reusable extractor; holds configuration and the compiled grammar.
pub struct OutlineExtractor {
    config: OutlineConfig,
    parser: NumberingParser,
}

impl OutlineExtractor {
    pub fn new(config: OutlineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            parser: NumberingParser::new(),
        })
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// Start an incremental scan.
    pub fn scan(&self) -> OutlineScan<'_> {
        OutlineScan::new(&self.config, &self.parser)
    }

    /// Extract the outline from a complete line sequence.
    pub fn extract<I>(&self, lines: I) -> Extraction
    where
        I: IntoIterator,
        I::Item: Into<SourceLine>,
    {
        self.extract_with_report(lines).extraction
    }

    pub fn extract_with_report<I>(&self, lines: I) -> ExtractionOutcome
    where
        I: IntoIterator,
        I::Item: Into<SourceLine>,
    {
        let mut scan = self.scan();
        for line in lines {
            if scan.feed(line.into()) == ScanState::Done {
                break;
            }
        }
        scan.finish()
    }
}

/// A scan in progress. Lines go in through [`OutlineScan::feed`]; the tree
/// only becomes visible through [`OutlineScan::finish`], so dropping a scan
/// midway leaves nothing behind.
pub struct OutlineScan<'a> {
    config: &'a OutlineConfig,
    parser: &'a NumberingParser,
    gate: TocGate,
    tree: OutlineTree,
    current: Option<NodeId>,
    state: ScanState,
    report: ScanReport,
    ceiling: Option<usize>,
    depth_limit: Option<usize>,
    index: usize,
}

impl<'a> OutlineScan<'a> {
    fn new(config: &'a OutlineConfig, parser: &'a NumberingParser) -> Self {
        let (gate, state) = if config.is_gated() {
            (TocGate::new(config.markers.iter().cloned()), ScanState::ScanningForMarker)
        } else {
            (TocGate::open(), ScanState::Armed)
        };
        let tree = if config.captures_body() {
            OutlineTree::with_body()
        } else {
            OutlineTree::new()
        };
        Self {
            config,
            parser,
            gate,
            tree,
            current: None,
            state,
            report: ScanReport::default(),
            ceiling: config.scan_ceiling(),
            depth_limit: config.depth_limit(),
            index: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn report(&self) -> &ScanReport {
        &self.report
    }

    /// Process the next line and return the state after it.
    pub fn feed(&mut self, line: SourceLine) -> ScanState {
        if self.state == ScanState::Done {
            return ScanState::Done;
        }
        let index = self.index;
        self.index += 1;

        let page = line.page.unwrap_or(index / self.config.lines_per_page);
        if self.ceiling.is_some_and(|max| page >= max) {
            debug!(line = index, page, "scan ceiling reached");
            self.report.hit_ceiling = true;
            self.state = ScanState::Done;
            return self.state;
        }
        self.report.lines_scanned += 1;
        self.report.pages_scanned = self.report.pages_scanned.max(page.saturating_add(1));

        let text = line.text.trim();
        if text.is_empty() {
            return self.state;
        }

        match self.gate.observe(text) {
            GateDecision::Closed => return self.state,
            GateDecision::Marker => {
                self.report.marker_line = Some(index);
                self.state = ScanState::Armed;
                return self.state;
            }
            GateDecision::Open => {}
        }

        let heading = self
            .parser
            .parse(text)
            .filter(|n| self.depth_limit.map_or(true, |max| n.path.depth() <= max));
        match heading {
            Some(numbered) => {
                let title = clean_title(numbered.remainder);
                trace!(path = %numbered.path, title = %title, "heading");
                self.current = Some(self.tree.insert(&numbered.path, &title));
                self.report.headings += 1;
            }
            None if self.config.captures_body() => {
                if let Some(id) = self.current {
                    self.tree.append_body(id, text);
                    self.report.body_lines += 1;
                }
            }
            None => {}
        }
        self.state
    }

    /// End the scan and hand over the result.
    pub fn finish(self) -> ExtractionOutcome {
        let report = self.report;
        let extraction = if !self.tree.is_empty() {
            Extraction::Found(self.tree)
        } else if self.config.is_gated() && !self.gate.is_armed() {
            Extraction::NotFound(NotFoundReason::MarkerNotFound)
        } else {
            Extraction::NotFound(NotFoundReason::NoSections)
        };
        info!(
            found = extraction.is_found(),
            nodes = extraction.tree().map_or(0, OutlineTree::len),
            lines = report.lines_scanned,
            pages = report.pages_scanned,
            headings = report.headings,
            "outline extraction finished"
        );
        ExtractionOutcome { extraction, report }
    }
}
