//! JSON format
//!
//! Segments serialize as tagged objects (`{"type": "plain", ...}` / `{"type": "link", ...}`).
//! Listings serialize with their description annotated alongside the raw text.

use crate::error::RenderError;
use crate::format::Format;
use bazaar_market::Listing;
use bazaar_text::{annotate, Segment};
use serde::Serialize;

pub struct JsonFormat;

#[derive(Serialize)]
struct ListingView<'a> {
    #[serde(flatten)]
    listing: &'a Listing,
    contact_url: String,
    description_segments: Vec<Segment>,
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Segments and listings as pretty-printed JSON"
    }

    fn render_segments(&self, segments: &[Segment]) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(segments)?)
    }

    fn supports_listings(&self) -> bool {
        true
    }

    fn render_listings(&self, listings: &[Listing]) -> Result<String, RenderError> {
        let views: Vec<_> = listings
            .iter()
            .map(|listing| ListingView {
                listing,
                contact_url: listing.contact_url(),
                description_segments: annotate(&listing.description),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&views)?)
    }
}
