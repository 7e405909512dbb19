//! Candidate resolution.
//!
//! Resolution runs in two passes:
//!
//! 1. [`drop_shadowed_mentions`]: a mention whose start falls inside any url candidate is
//!    discarded, so `https://t.me/foo` never yields a nested `t.me/foo` link.
//! 2. [`resolve_overlaps`]: all survivors are ordered by start and claimed first-come. A
//!    candidate is rejected if it conflicts with any claimed one (see [`Span::conflicts_with`](super::span::Span::conflicts_with)),
//!    including when it lies entirely inside a claimed span.
//!
//! This is not leftmost-longest: a short candidate claimed first blocks a longer one that starts
//! inside it.

use super::candidates::Candidate;

/// Remove mentions that start inside a url candidate.
pub fn drop_shadowed_mentions(urls: &[Candidate], mentions: Vec<Candidate>) -> Vec<Candidate> {
    mentions
        .into_iter()
        .filter(|mention| {
            !urls
                .iter()
                .any(|url| url.span.contains_offset(mention.span.start))
        })
        .collect()
}

/// Merge both candidate lists by ascending start.
///
/// The sort is stable and urls are placed first, so at an equal start the url is considered
/// before the mention.
pub fn merge(urls: Vec<Candidate>, mentions: Vec<Candidate>) -> Vec<Candidate> {
    let mut merged = urls;
    merged.extend(mentions);
    merged.sort_by_key(|candidate| candidate.span.start);
    merged
}

/// First-claim overlap pass over start-ordered candidates.
pub fn resolve_overlaps(ordered: Vec<Candidate>) -> Vec<Candidate> {
    let mut accepted: Vec<Candidate> = Vec::with_capacity(ordered.len());
    for candidate in ordered {
        let blocked = accepted
            .iter()
            .any(|claimed| candidate.span.conflicts_with(&claimed.span));
        if !blocked {
            accepted.push(candidate);
        }
    }
    accepted
}

/// Full resolution: priority pre-filter, merge, then first-claim.
pub fn resolve(urls: Vec<Candidate>, mentions: Vec<Candidate>) -> Vec<Candidate> {
    let mentions = drop_shadowed_mentions(&urls, mentions);
    resolve_overlaps(merge(urls, mentions))
}
