//! Output segments and gap-filling assembly.

use super::candidates::{Candidate, CandidateKind};
use super::span::Span;
use serde::Serialize;

/// Where a link came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// `http://` / `https://` address.
    Url,
    /// `@handle` or bare `t.me/handle`.
    Telegram,
}

impl From<CandidateKind> for LinkKind {
    fn from(kind: CandidateKind) -> Self {
        match kind {
            CandidateKind::Url => LinkKind::Url,
            CandidateKind::Mention => LinkKind::Telegram,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSegment {
    pub display_text: String,
    pub target_url: String,
    pub source_span: Span,
    pub kind: LinkKind,
}

impl From<Candidate> for LinkSegment {
    fn from(candidate: Candidate) -> Self {
        let target_url = candidate.target();
        Self {
            display_text: candidate.raw,
            target_url,
            source_span: candidate.span,
            kind: candidate.kind.into(),
        }
    }
}

/// One piece of annotated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Segment {
    Plain { text: String, source_span: Span },
    Link(LinkSegment),
}

impl Segment {
    pub fn plain(text: impl Into<String>, source_span: Span) -> Self {
        Segment::Plain {
            text: text.into(),
            source_span,
        }
    }

    /// The text this segment contributes to the rendered output.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text, .. } => text,
            Segment::Link(link) => &link.display_text,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Segment::Plain { source_span, .. } => *source_span,
            Segment::Link(link) => link.source_span,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link(_))
    }

    pub fn as_link(&self) -> Option<&LinkSegment> {
        match self {
            Segment::Link(link) => Some(link),
            Segment::Plain { .. } => None,
        }
    }
}

/// Walk accepted candidates, filling the gaps between them with plain segments.
///
/// `accepted` must be start-ordered and pairwise non-overlapping.
pub fn assemble(text: &str, accepted: Vec<Candidate>) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut cursor = 0;

    for candidate in accepted {
        if candidate.span.start > cursor {
            let gap = Span::new(cursor, candidate.span.start);
            segments.push(Segment::plain(gap.slice(text), gap));
        }
        cursor = candidate.span.end;
        segments.push(Segment::Link(candidate.into()));
    }

    if cursor < text.len() {
        let rest = Span::new(cursor, text.len());
        segments.push(Segment::plain(rest.slice(text), rest));
    }

    segments
}
