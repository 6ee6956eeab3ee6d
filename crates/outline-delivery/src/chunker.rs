//! Frame chunker: fixed-size character slices.

use std::num::NonZeroUsize;

/// Splits payloads into frames of at most `limit` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameChunker {
    pub limit: NonZeroUsize,
}

impl FrameChunker {
    pub fn new(limit: NonZeroUsize) -> Self {
        Self { limit }
    }

    /// Lazily iterate the frames of `payload`.
    pub fn frames<'a>(&self, payload: &'a str) -> Frames<'a> {
        Frames { rest: payload, limit: self.limit.get() }
    }

    pub fn chunk<'a>(&self, payload: &'a str) -> Vec<&'a str> {
        self.frames(payload).collect()
    }

    /// Number of frames `payload` needs: `ceil(chars / limit)`, 0 when empty.
    pub fn count(&self, payload: &str) -> usize {
        payload.chars().count().div_ceil(self.limit.get())
    }
}

impl Default for FrameChunker {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(outline_core::config::DEFAULT_FRAME_LIMIT).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Iterator over consecutive frames. Slices always fall on character
/// boundaries; every frame but the last holds exactly `limit` characters.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    rest: &'a str,
    limit: usize,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .nth(self.limit)
            .map_or(self.rest.len(), |(i, _)| i);
        let (frame, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(frame)
    }
}

impl std::iter::FusedIterator for Frames<'_> {}

/// Split `payload` into frames of at most `limit` characters.
pub fn chunk(payload: &str, limit: NonZeroUsize) -> Vec<&str> {
    FrameChunker::new(limit).chunk(payload)
}

/// Concatenate frames back into one payload.
pub fn reassemble<I>(frames: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    frames.into_iter().fold(String::new(), |mut acc, frame| {
        acc.push_str(frame.as_ref());
        acc
    })
}
