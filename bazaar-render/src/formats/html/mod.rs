//! HTML format implementation
//!
//! # Data Model
//!
//! | Input            | HTML                                                  |
//! |------------------|-------------------------------------------------------|
//! | Segment sequence | `<span>` wrapping the parts, nothing for empty input  |
//! | Plain segment    | escaped text                                          |
//! | Link segment     | `<a href target rel class>` with the display text     |
//! | Listing          | `<article class="listing">` card                      |
//!
//! Link attributes come from [`LinkAttributes`]; empty values are left out. With the dark theme
//! the `<span>` and `<article>` wrappers also carry a `theme-dark` class.

use crate::error::RenderError;
use crate::escape::escape_markup;
use crate::format::Format;
use bazaar_market::{Listing, Theme};
use bazaar_text::{annotate, Segment};

/// Attributes placed on every `<a>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttributes {
    pub target: String,
    pub rel: String,
    pub class: String,
}

impl Default for LinkAttributes {
    fn default() -> Self {
        Self {
            target: "_blank".to_string(),
            rel: "noopener noreferrer".to_string(),
            class: String::new(),
        }
    }
}

/// HTML fragments for annotated text and listing cards
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    links: LinkAttributes,
    theme: Theme,
}

impl HtmlFormat {
    pub fn new(links: LinkAttributes) -> Self {
        Self {
            links,
            theme: Theme::Light,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn theme_class(&self) -> Option<&'static str> {
        match self.theme {
            Theme::Light => None,
            Theme::Dark => Some("theme-dark"),
        }
    }

    fn anchor(&self, out: &mut String, href: &str, text: &str) {
        out.push_str("<a href=\"");
        out.push_str(&escape_markup(href));
        out.push('"');
        push_attr(out, "target", &self.links.target);
        push_attr(out, "rel", &self.links.rel);
        push_attr(out, "class", &self.links.class);
        out.push('>');
        out.push_str(&escape_markup(text));
        out.push_str("</a>");
    }

    fn inline(&self, out: &mut String, segments: &[Segment]) {
        for segment in segments {
            match segment {
                Segment::Plain { text, .. } => out.push_str(&escape_markup(text)),
                Segment::Link(link) => self.anchor(out, &link.target_url, &link.display_text),
            }
        }
    }

    fn card(&self, out: &mut String, listing: &Listing) {
        out.push_str("<article class=\"listing");
        if listing.is_premium {
            out.push_str(" listing-premium");
        }
        if let Some(class) = self.theme_class() {
            out.push(' ');
            out.push_str(class);
        }
        out.push_str("\">\n");
        out.push_str(&format!(
            "  <img src=\"{}\" alt=\"{}\">\n",
            escape_markup(&listing.image),
            escape_markup(&listing.title)
        ));
        if listing.is_premium {
            out.push_str("  <span class=\"badge\">premium</span>\n");
        }
        out.push_str(&format!("  <h3>{}</h3>\n", escape_markup(&listing.title)));
        out.push_str("  <p>");
        self.inline(out, &annotate(&listing.description));
        out.push_str("</p>\n  ");
        self.anchor(out, &listing.contact_url(), &listing.username);
        out.push_str("\n</article>\n");
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_markup(value));
    out.push('"');
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragments with clickable links"
    }

    fn render_segments(&self, segments: &[Segment]) -> Result<String, RenderError> {
        if segments.is_empty() {
            return Ok(String::new());
        }
        let mut out = match self.theme_class() {
            Some(class) => format!("<span class=\"{}\">", class),
            None => String::from("<span>"),
        };
        self.inline(&mut out, segments);
        out.push_str("</span>");
        Ok(out)
    }

    fn supports_listings(&self) -> bool {
        true
    }

    fn render_listings(&self, listings: &[Listing]) -> Result<String, RenderError> {
        if listings.is_empty() {
            return Ok(match self.theme_class() {
                Some(class) => format!("<p class=\"empty {}\">No listings found</p>\n", class),
                None => "<p class=\"empty\">No listings found</p>\n".to_string(),
            });
        }
        let mut out = String::new();
        for listing in listings {
            self.card(&mut out, listing);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_format_name() {
        let format = HtmlFormat::default();
        assert_eq!(format.name(), "html");
        assert!(format.supports_listings());
    }

    #[test]
    fn empty_text_renders_nothing() {
        let html = HtmlFormat::default().render_segments(&[]).unwrap();
        assert_eq!(html, "");
    }

    #[test]
    fn omits_empty_attributes() {
        let html = HtmlFormat::new(LinkAttributes {
            target: String::new(),
            rel: String::new(),
            class: String::new(),
        })
        .render_segments(&annotate("@bob"))
        .unwrap();
        assert_eq!(html, "<span><a href=\"https://t.me/bob\">@bob</a></span>");
    }

    #[test]
    fn escapes_plain_text_and_urls() {
        let html = HtmlFormat::default()
            .render_segments(&annotate("<b> https://x.io/?a=1&b=\"2\""))
            .unwrap();
        assert_eq!(
            html,
            "<span>&lt;b&gt; <a href=\"https://x.io/?a=1&amp;b=&quot;2&quot;\" target=\"_blank\" \
             rel=\"noopener noreferrer\">https://x.io/?a=1&amp;b=&quot;2&quot;</a></span>"
        );
    }

    #[test]
    fn dark_theme_marks_wrappers() {
        let format = HtmlFormat::default().with_theme(Theme::Dark);
        let html = format.render_segments(&annotate("hi")).unwrap();
        assert_eq!(html, "<span class=\"theme-dark\">hi</span>");
        assert_eq!(
            format.render_listings(&[]).unwrap(),
            "<p class=\"empty theme-dark\">No listings found</p>\n"
        );
    }
}
