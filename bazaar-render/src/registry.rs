//! Format registry for format discovery and selection
//!
//! Formats are registered under their [`Format::name`] and looked up by the cli's `--to` flag.

use crate::error::RenderError;
use crate::format::Format;
use crate::formats::html::{HtmlFormat, LinkAttributes};
use bazaar_market::{Listing, Theme};
use bazaar_text::Segment;
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults(LinkAttributes::default(), Theme::Light);
/// let html = registry.render_segments(&annotate("ping @bob"), "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, RenderError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| RenderError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of the formats that can render listings (sorted)
    pub fn list_listing_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .formats
            .values()
            .filter(|f| f.supports_listings())
            .map(|f| f.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Render annotated text using the specified format
    pub fn render_segments(
        &self,
        segments: &[Segment],
        format: &str,
    ) -> Result<String, RenderError> {
        self.get(format)?.render_segments(segments)
    }

    /// Render listings using the specified format
    pub fn render_listings(
        &self,
        listings: &[Listing],
        format: &str,
    ) -> Result<String, RenderError> {
        let fmt = self.get(format)?;
        if !fmt.supports_listings() {
            return Err(RenderError::NotSupported(format!(
                "Format '{}' does not support listings",
                format
            )));
        }
        fmt.render_listings(listings)
    }

    /// Create a registry with the built-in formats
    ///
    /// `theme` only affects html; the other formats carry no styling.
    pub fn with_defaults(links: LinkAttributes, theme: Theme) -> Self {
        let mut registry = Self::new();

        registry.register(HtmlFormat::new(links).with_theme(theme));
        registry.register(crate::formats::plain::PlainFormat);
        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::tag::TagFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults(LinkAttributes::default(), Theme::Light)
    }
}
