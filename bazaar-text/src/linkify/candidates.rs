//! Pattern scanners producing link candidates.
//!
//! Two scanners run independently over the whole input:
//! - urls: `http://` or `https://` followed by non-whitespace (ECMAScript whitespace)
//! - mentions: `@handle` or bare `t.me/handle`
//!
//! Neither scanner knows about the other. Priority between them is decided later by
//! [`resolve`](super::resolve).

use super::span::Span;
use once_cell::sync::Lazy;
use regex::Regex;

/// A url body runs up to the first whitespace character. Whitespace is the ECMAScript set, which
/// differs from Unicode `\s`: U+FEFF ends a url here, U+0085 does not.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https?://[^\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("url pattern compiles")
});

static MENTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@[a-zA-Z0-9_]+|t\.me/[a-zA-Z0-9_]+").expect("mention pattern compiles")
});

/// Which scanner produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Url,
    Mention,
}

/// A raw pattern match, before priority and overlap resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub span: Span,
    pub kind: CandidateKind,
    pub raw: String,
}

impl Candidate {
    pub fn new(span: Span, kind: CandidateKind, raw: impl Into<String>) -> Self {
        Self {
            span,
            kind,
            raw: raw.into(),
        }
    }

    /// Destination the rendered link points to.
    pub fn target(&self) -> String {
        match self.kind {
            CandidateKind::Url => self.raw.clone(),
            CandidateKind::Mention => telegram_target(&self.raw),
        }
    }
}

/// Scan for web links.
pub fn scan_urls(text: &str) -> Vec<Candidate> {
    scan(&URL_REGEX, text, CandidateKind::Url)
}

/// Scan for Telegram handles and bare `t.me/` links.
pub fn scan_mentions(text: &str) -> Vec<Candidate> {
    scan(&MENTION_REGEX, text, CandidateKind::Mention)
}

fn scan(regex: &Regex, text: &str, kind: CandidateKind) -> Vec<Candidate> {
    regex
        .find_iter(text)
        .map(|m| Candidate::new(Span::new(m.start(), m.end()), kind, m.as_str()))
        .collect()
}

/// Fully-qualified Telegram URL for a handle or bare `t.me/` link.
///
/// - `@name` → `https://t.me/name`
/// - `t.me/name` → `https://t.me/name`
pub fn telegram_target(raw: &str) -> String {
    match raw.strip_prefix('@') {
        Some(handle) => format!("https://t.me/{}", handle),
        None => format!("https://{}", raw),
    }
}
