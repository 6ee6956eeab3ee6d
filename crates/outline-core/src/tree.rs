//! Arena-backed outline tree and the hierarchy builder.
//!
//! Nodes live in a flat vector in creation order; a path-keyed map gives
//! O(1) lookup and every node keeps its parent and ordered children as
//! arena indices. Nodes are never removed.

use crate::path::SectionPath;
use std::collections::HashMap;
use tracing::trace;

/// Index of a node inside its [`OutlineTree`].
pub type NodeId = usize;

/// One heading of the reconstructed outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNode {
    pub path: SectionPath,
    pub title: String,
    /// Free text captured under this heading (full-body mode only).
    pub body: String,
    /// True while the title is synthesized rather than observed.
    pub placeholder: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SectionNode {
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in first-seen order.
    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }
}

/// Title given to an ancestor that was never announced by the document.
pub fn placeholder_title(path: &str) -> String {
    format!("Section {path}")
}

/// Container for a reconstructed outline.
#[derive(Debug, Clone, Default)]
pub struct OutlineTree {
    nodes: Vec<SectionNode>,
    path_map: HashMap<String, NodeId>,
    roots: Vec<NodeId>,
    capture_body: bool,
}

impl OutlineTree {
    /// Empty tree for TOC-only extraction (no body text).
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty tree that carries a `body` per node.
    pub fn with_body() -> Self {
        Self {
            capture_body: true,
            ..Self::default()
        }
    }

    pub fn captures_body(&self) -> bool {
        self.capture_body
    }

    /// Insert or update the heading at `path`.
    ///
    /// Missing ancestors are synthesized first with placeholder titles. A
    /// path seen before keeps its node: a non-empty `title` overwrites the
    /// old one (last write wins), an empty one leaves it alone.
    pub fn insert(&mut self, path: &SectionPath, title: &str) -> NodeId {
        let title = title.trim();
        if let Some(&id) = self.path_map.get(path.as_str()) {
            if !title.is_empty() {
                let node = &mut self.nodes[id];
                node.title = title.to_string();
                node.placeholder = false;
            }
            return id;
        }

        let parent = self.ensure_ancestors(path);
        if title.is_empty() {
            self.attach(path.clone(), placeholder_title(path.as_str()), true, parent)
        } else {
            self.attach(path.clone(), title.to_string(), false, parent)
        }
    }

    /// Make sure every proper ancestor of `path` exists and return the id of
    /// its immediate parent.
    fn ensure_ancestors(&mut self, path: &SectionPath) -> Option<NodeId> {
        let mut missing = Vec::new();
        let mut anchor = None;
        for ancestor in path.ancestors() {
            if let Some(&id) = self.path_map.get(ancestor) {
                anchor = Some(id);
                break;
            }
            missing.push(ancestor.to_string());
        }
        for ancestor in missing.into_iter().rev() {
            let title = placeholder_title(&ancestor);
            trace!(path = %ancestor, "synthesizing placeholder ancestor");
            anchor = Some(self.attach(SectionPath::from_trusted(ancestor), title, true, anchor));
        }
        anchor
    }

    fn attach(
        &mut self,
        path: SectionPath,
        title: String,
        placeholder: bool,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.path_map.insert(path.as_str().to_string(), id);
        self.nodes.push(SectionNode {
            path,
            title,
            body: String::new(),
            placeholder,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Append a line of body text to a node. Body is append-only.
    pub fn append_body(&mut self, id: NodeId, text: &str) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        if !node.body.is_empty() {
            node.body.push('\n');
        }
        node.body.push_str(text);
    }

    pub fn node(&self, id: NodeId) -> Option<&SectionNode> {
        self.nodes.get(id)
    }

    pub fn id_of(&self, path: &str) -> Option<NodeId> {
        self.path_map.get(path).copied()
    }

    /// Look up a node by its path.
    pub fn get(&self, path: &str) -> Option<&SectionNode> {
        self.id_of(path).map(|id| &self.nodes[id])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.path_map.contains_key(path)
    }

    /// Top-level nodes in first-seen order.
    pub fn roots(&self) -> impl Iterator<Item = &SectionNode> {
        self.roots.iter().map(|&id| &self.nodes[id])
    }

    pub fn root_ids(&self) -> &[NodeId] {
        &self.roots
    }

    /// Direct children of a path, in first-seen order.
    pub fn children(&self, path: &str) -> Vec<&SectionNode> {
        self.get(path)
            .map(|n| n.children.iter().map(|&id| &self.nodes[id]).collect())
            .unwrap_or_default()
    }

    pub fn parent(&self, path: &str) -> Option<&SectionNode> {
        self.get(path)
            .and_then(|n| n.parent)
            .map(|id| &self.nodes[id])
    }

    /// The chain from a node up to its root, node first.
    pub fn path_to_root(&self, path: &str) -> Vec<&SectionNode> {
        let mut chain = Vec::new();
        let mut current = self.id_of(path);
        while let Some(id) = current {
            let node = &self.nodes[id];
            chain.push(node);
            current = node.parent;
        }
        chain
    }

    /// Number of nodes, placeholders included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, SectionNode> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a OutlineTree {
    type Item = &'a SectionNode;
    type IntoIter = std::slice::Iter<'a, SectionNode>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
