//! Format trait definition
//!
//! Every output format renders annotated text. Formats that know how to lay out listing cards
//! also override [`Format::render_listings`].

use crate::error::RenderError;
use bazaar_market::Listing;
use bazaar_text::Segment;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn render_segments(&self, segments: &[Segment]) -> Result<String, RenderError> {
///         Ok(segments.iter().map(|s| s.text().to_uppercase()).collect())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "plain", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Render annotated text
    fn render_segments(&self, segments: &[Segment]) -> Result<String, RenderError>;

    /// Whether this format can lay out listing cards
    fn supports_listings(&self) -> bool {
        false
    }

    /// Render a list of listings
    ///
    /// Default implementation returns NotSupported error.
    fn render_listings(&self, _listings: &[Listing]) -> Result<String, RenderError> {
        Err(RenderError::NotSupported(format!(
            "Format '{}' does not support listings",
            self.name()
        )))
    }
}
