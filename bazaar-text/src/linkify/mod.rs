//! Link annotation for listing text.
//!
//! [`annotate`] turns a string into an ordered, gap-filled sequence of [`Segment`]s: plain runs
//! and links. Two kinds of links are recognised:
//!
//! - web addresses: `http://` or `https://` followed by non-whitespace (see [`candidates`])
//! - Telegram: `@handle` (→ `https://t.me/handle`) and bare `t.me/handle` (→ `https://t.me/handle`)
//!
//! ## Pipeline
//!
//! ```text
//! text ──► scan_urls ───────┐
//!     └──► scan_mentions ──►├─► drop_shadowed_mentions ─► merge ─► resolve_overlaps ─► assemble
//! ```
//!
//! Every stage is a pure function and can be exercised on its own.
//!
//! ## Guarantees
//!
//! - Lossless: concatenating [`Segment::text`] in order yields the input.
//! - Segment spans are strictly increasing, non-overlapping and tile the input.
//! - Empty input yields no segments; input without links yields one plain segment.
//! - Never fails: anything unrecognised stays plain text.

pub mod candidates;
pub mod resolve;
pub mod segments;
pub mod span;

pub use candidates::{scan_mentions, scan_urls, telegram_target, Candidate, CandidateKind};
pub use resolve::{drop_shadowed_mentions, merge, resolve_overlaps};
pub use segments::{assemble, LinkKind, LinkSegment, Segment};
pub use span::Span;

/// Annotate `text` with url and Telegram links.
pub fn annotate(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    let accepted = resolve::resolve(scan_urls(text), scan_mentions(text));
    assemble(text, accepted)
}

/// Only the link segments of `text`, in order.
pub fn links(text: &str) -> Vec<LinkSegment> {
    annotate(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Link(link) => Some(link),
            Segment::Plain { .. } => None,
        })
        .collect()
}

/// Concatenate the visible text of `segments`.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}
