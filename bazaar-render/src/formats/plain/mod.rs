//! Plain text format
//!
//! Text is reproduced exactly. Links whose target differs from what is shown get the target
//! appended in angle brackets, so `@bob` becomes `@bob <https://t.me/bob>` while a url is left
//! as typed.

use crate::error::RenderError;
use crate::format::Format;
use bazaar_market::Listing;
use bazaar_text::{annotate, Segment};

pub struct PlainFormat;

fn inline(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push_str(segment.text());
        if let Some(link) = segment.as_link() {
            if link.target_url != link.display_text {
                out.push_str(&format!(" <{}>", link.target_url));
            }
        }
    }
    out
}

impl Format for PlainFormat {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Plain text with link targets spelled out"
    }

    fn render_segments(&self, segments: &[Segment]) -> Result<String, RenderError> {
        Ok(inline(segments))
    }

    fn supports_listings(&self) -> bool {
        true
    }

    fn render_listings(&self, listings: &[Listing]) -> Result<String, RenderError> {
        if listings.is_empty() {
            return Ok("No listings found\n".to_string());
        }
        let mut out = String::new();
        for listing in listings {
            let marker = if listing.is_premium { "[premium] " } else { "" };
            out.push_str(&format!("#{} {}{}\n", listing.id, marker, listing.title));
            if !listing.description.is_empty() {
                out.push_str(&format!("    {}\n", inline(&annotate(&listing.description))));
            }
            out.push_str(&format!(
                "    {} <{}>\n",
                listing.username,
                listing.contact_url()
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spells_out_mention_targets_only() {
        let text = PlainFormat
            .render_segments(&annotate("@bob or https://x.io"))
            .unwrap();
        assert_eq!(text, "@bob <https://t.me/bob> or https://x.io");
    }

    #[test]
    fn empty_listing_list_has_message() {
        assert_eq!(
            PlainFormat.render_listings(&[]).unwrap(),
            "No listings found\n"
        );
    }
}
