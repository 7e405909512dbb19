//! XML-like tag serialization
//!
//! A debugging view of the segment structure, one element per segment with its byte span.
//!
//! ## Example
//!
//! ```text
//! <text>
//!   <plain span="0..8">contact </plain>
//!   <link span="8..12" kind="telegram" target="https://t.me/bar">@bar</link>
//!   <plain span="12..16"> now</plain>
//! </text>
//! ```

use crate::error::RenderError;
use crate::escape::escape_markup;
use crate::format::Format;
use bazaar_text::{LinkKind, Segment};

/// Serialize segments to the tag format
pub fn serialize_segments(segments: &[Segment]) -> String {
    let mut result = String::from("<text>\n");
    for segment in segments {
        match segment {
            Segment::Plain { text, source_span } => {
                result.push_str(&format!(
                    "  <plain span=\"{}\">{}</plain>\n",
                    source_span,
                    escape_markup(text)
                ));
            }
            Segment::Link(link) => {
                let kind = match link.kind {
                    LinkKind::Url => "url",
                    LinkKind::Telegram => "telegram",
                };
                result.push_str(&format!(
                    "  <link span=\"{}\" kind=\"{}\" target=\"{}\">{}</link>\n",
                    link.source_span,
                    kind,
                    escape_markup(&link.target_url),
                    escape_markup(&link.display_text)
                ));
            }
        }
    }
    result.push_str("</text>");
    result
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag dump of segments and spans"
    }

    fn render_segments(&self, segments: &[Segment]) -> Result<String, RenderError> {
        Ok(serialize_segments(segments))
    }
}
