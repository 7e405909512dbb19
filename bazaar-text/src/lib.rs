//! # bazaar-text
//!
//! Text annotation for marketplace listings.
//!
//! Listing titles and descriptions are free-form text typed by sellers. Before they are shown,
//! the text is split into plain runs and links so that web addresses and Telegram handles become
//! clickable while every other character is rendered untouched.
//!
//! Layout
//!
//!     src/linkify
//!       ├── span.rs        Byte spans and the overlap rule used by the resolver
//!       ├── candidates.rs  The two independent pattern scanners (urls, mentions)
//!       ├── resolve.rs     Priority pre-filter and first-claim overlap pass
//!       ├── segments.rs    Output segments and gap-filling assembly
//!       └── mod.rs         `annotate` and friends
//!
//! The crate is pure: no I/O, no shared mutable state. Rendering lives in `bazaar-render`.

pub mod linkify;

pub use linkify::{annotate, links, reconstruct, LinkKind, LinkSegment, Segment, Span};
