//! Output formats for annotated text and listings
//!
//!     This crate turns the segments produced by `bazaar-text` and the listings prepared by
//!     `bazaar-market` into something a front end can show: HTML fragments, plain text, JSON or
//!     an XML-like tag dump for debugging.
//!
//!     This is a pure lib: it powers the bazaar cli but is shell agnostic, no code here prints,
//!     reads env vars or touches files.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── escape.rs               # Markup escaping shared by html and tag
//!     ├── formats
//!     │   ├── <format>
//!     │   │   └── mod.rs
//!     ├── lib.rs

pub mod error;
pub mod escape;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::RenderError;
pub use format::Format;
pub use formats::html::{HtmlFormat, LinkAttributes};
pub use registry::FormatRegistry;
