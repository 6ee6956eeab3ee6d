//! Dotted numbering paths (`"2"`, `"2.1"`, `"2.1.3"`).
//!
//! A path carries its own depth and parent: the parent is everything before
//! the last dot, so ancestry is computed by slicing rather than by walking
//! a tree.

use crate::error::{OutlineError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated section path: one or more dot-separated runs of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionPath(String);

impl SectionPath {
    /// Validate and wrap a raw path. Empty components (`"1..2"`), trailing
    /// dots and non-digit characters are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let valid = !raw.is_empty()
            && raw
                .split('.')
                .all(|c| !c.is_empty() && c.bytes().all(|b| b.is_ascii_digit()));
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(OutlineError::InvalidPath(raw.to_string()))
        }
    }

    /// Wrap a path already known to be well formed (an ancestor slice of a
    /// validated path).
    pub(crate) fn from_trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of components; `"2.1.3"` has depth 3.
    pub fn depth(&self) -> usize {
        self.0.bytes().filter(|&b| b == b'.').count() + 1
    }

    pub fn is_root(&self) -> bool {
        !self.0.contains('.')
    }

    /// Immediate parent path, `None` for a top-level path.
    pub fn parent(&self) -> Option<SectionPath> {
        parent_of(&self.0).map(|p| SectionPath(p.to_string()))
    }

    /// Proper ancestors, nearest first: `"2.1.3"` yields `"2.1"`, `"2"`.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(parent_of(&self.0), |p| parent_of(p))
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

fn parent_of(path: &str) -> Option<&str> {
    path.rfind('.').map(|i| &path[..i])
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SectionPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SectionPath {
    type Err = OutlineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for SectionPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
