//! Byte spans into the annotated text.

use serde::Serialize;
use std::fmt;

/// End-exclusive byte span into the original text.
///
/// Offsets always fall on `char` boundaries because they come from regex matches or from the
/// boundaries of other spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    /// True when `offset` lies in `[start, end)`.
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Overlap test used when claiming candidates.
    ///
    /// `self` conflicts with an already-claimed `other` when its start falls inside `other`, when
    /// its end falls inside `other` (end-inclusive on that side), or when it covers `other`
    /// entirely. Spans that merely touch (`self.start == other.end`) do not conflict.
    pub fn conflicts_with(&self, other: &Span) -> bool {
        let start_inside = self.start >= other.start && self.start < other.end;
        let end_inside = self.end > other.start && self.end <= other.end;
        let covers = self.start <= other.start && self.end >= other.end;
        start_inside || end_inside || covers
    }

    /// Slice `text` by this span.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
