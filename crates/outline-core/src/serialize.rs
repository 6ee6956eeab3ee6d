//! Deterministic JSON encoding of outlines.
//!
//! Shape: `{"<path>": {"title": .., "sections": {..}, "body": ..}}`, keys in
//! first-seen order, `body` only for trees built in full-body mode. Non-ASCII
//! text is written as-is.

use crate::error::{OutlineError, Result};
use crate::tree::{NodeId, OutlineTree, SectionNode};
use crate::types::Extraction;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

/// Output layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    Compact,
    /// Four-space indentation.
    #[default]
    Pretty,
}

impl JsonStyle {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty { Self::Pretty } else { Self::Compact }
    }
}

struct Sections<'a> {
    tree: &'a OutlineTree,
    ids: &'a [NodeId],
}

impl Serialize for Sections<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ids.len()))?;
        for node in self.ids.iter().filter_map(|&id| self.tree.node(id)) {
            map.serialize_entry(node.path.as_str(), &NodeView { tree: self.tree, node })?;
        }
        map.end()
    }
}

struct NodeView<'a> {
    tree: &'a OutlineTree,
    node: &'a SectionNode,
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let with_body = self.tree.captures_body();
        let mut map = serializer.serialize_map(Some(if with_body { 3 } else { 2 }))?;
        map.serialize_entry("title", &self.node.title)?;
        map.serialize_entry(
            "sections",
            &Sections { tree: self.tree, ids: self.node.child_ids() },
        )?;
        if with_body {
            map.serialize_entry("body", &self.node.body)?;
        }
        map.end()
    }
}

impl Serialize for OutlineTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Sections { tree: self, ids: self.root_ids() }.serialize(serializer)
    }
}

#[derive(serde::Serialize)]
struct ErrorPayload<'a> {
    error: &'a str,
}

#[derive(serde::Serialize)]
struct TextPayload<'a> {
    text: &'a str,
}

fn encode<T: Serialize>(value: &T, style: JsonStyle) -> Result<String> {
    match style {
        JsonStyle::Compact => Ok(serde_json::to_string(value)?),
        JsonStyle::Pretty => {
            let mut buf = Vec::new();
            let mut ser =
                serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
            value.serialize(&mut ser)?;
            String::from_utf8(buf).map_err(|e| OutlineError::Other(e.into()))
        }
    }
}

/// Encode a tree.
pub fn serialize(tree: &OutlineTree, style: JsonStyle) -> Result<String> {
    encode(tree, style)
}

/// Encode an extraction result; a missing outline becomes `{"error": reason}`.
pub fn serialize_extraction(extraction: &Extraction, style: JsonStyle) -> Result<String> {
    match extraction {
        Extraction::Found(tree) => serialize(tree, style),
        Extraction::NotFound(reason) => encode(&ErrorPayload { error: reason.message() }, style),
    }
}

/// Encode raw document text as `{"text": ..}`.
pub fn serialize_text(text: &str, style: JsonStyle) -> Result<String> {
    encode(&TextPayload { text }, style)
}
