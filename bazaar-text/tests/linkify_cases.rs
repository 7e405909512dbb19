//! Case table for link annotation
//!
//! Each case lists the expected segments as `(text, Some(target))` for links and
//! `(text, None)` for plain runs.

use bazaar_text::linkify::{
    annotate, drop_shadowed_mentions, merge, resolve_overlaps, scan_mentions, scan_urls,
    LinkKind, Segment,
};
use rstest::rstest;

fn shape(text: &str) -> Vec<(String, Option<String>)> {
    annotate(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain { text, .. } => (text, None),
            Segment::Link(link) => (link.display_text, Some(link.target_url)),
        })
        .collect()
}

fn plain(text: &str) -> (String, Option<String>) {
    (text.to_string(), None)
}

fn link(text: &str, target: &str) -> (String, Option<String>) {
    (text.to_string(), Some(target.to_string()))
}

#[rstest]
#[case::empty("", vec![])]
#[case::no_matches("just plain text", vec![plain("just plain text")])]
#[case::mention("contact @bar now", vec![plain("contact "), link("@bar", "https://t.me/bar"), plain(" now")])]
#[case::bare_tme("see t.me/baz", vec![plain("see "), link("t.me/baz", "https://t.me/baz")])]
#[case::url_priority("https://t.me/foo", vec![link("https://t.me/foo", "https://t.me/foo")])]
#[case::http_url("old http://site.ru page", vec![plain("old "), link("http://site.ru", "http://site.ru"), plain(" page")])]
#[case::url_swallows_handle("https://x.io/@me", vec![link("https://x.io/@me", "https://x.io/@me")])]
#[case::adjacent_mentions("@a@b", vec![link("@a", "https://t.me/a"), link("@b", "https://t.me/b")])]
#[case::handle_then_url("@shop https://shop.io", vec![
    link("@shop", "https://t.me/shop"),
    plain(" "),
    link("https://shop.io", "https://shop.io"),
])]
#[case::cyrillic_context("Пишите @manager_1, быстро", vec![
    plain("Пишите "),
    link("@manager_1", "https://t.me/manager_1"),
    plain(", быстро"),
])]
#[case::email_like("mail user@host.com", vec![plain("mail user"), link("@host", "https://t.me/host"), plain(".com")])]
#[case::lone_markers("@ and https:// and t.me/", vec![plain("@ and https:// and t.me/")])]
#[case::bom_ends_url("x\u{feff}https://a.io\u{feff}b", vec![
    plain("x\u{feff}"),
    link("https://a.io", "https://a.io"),
    plain("\u{feff}b"),
])]
#[case::no_break_space_ends_url("https://a.io\u{a0}@b", vec![
    link("https://a.io", "https://a.io"),
    plain("\u{a0}"),
    link("@b", "https://t.me/b"),
])]
fn annotates_listing_text(#[case] input: &str, #[case] expected: Vec<(String, Option<String>)>) {
    assert_eq!(shape(input), expected);
}

#[rstest]
#[case("https://t.me/foo")]
#[case("go https://t.me/foo?start=1 now")]
#[case("http://t.me/x")]
fn telegram_link_inside_url_is_not_emitted_twice(#[case] input: &str) {
    let segments = annotate(input);
    let links: Vec<_> = segments.iter().filter_map(Segment::as_link).collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].kind, LinkKind::Url);
}

#[test]
fn bare_tme_display_and_target() {
    let segments = annotate("see t.me/baz");
    let link = segments[1].as_link().expect("second segment is a link");
    assert_eq!(link.display_text, "t.me/baz");
    assert_eq!(link.target_url, "https://t.me/baz");
    assert_eq!(link.kind, LinkKind::Telegram);
}

#[test]
fn mention_prefix_of_url_blocks_the_url() {
    // "t.me/https" is a mention candidate starting before the url at offset 5, and the url's
    // start falls inside it, so the first claim wins and the url is dropped.
    let text = "t.me/https://example.com";
    let urls = scan_urls(text);
    let mentions = scan_mentions(text);
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].span.start, 5);
    assert_eq!(mentions[0].raw, "t.me/https");

    let survivors = drop_shadowed_mentions(&urls, mentions);
    let accepted = resolve_overlaps(merge(urls, survivors));
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].raw, "t.me/https");

    let segments = annotate(text);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text(), "t.me/https");
    assert_eq!(segments[1].text(), "://example.com");
    assert!(!segments[1].is_link());
}

#[test]
fn contained_candidate_is_rejected() {
    // A url claimed first fully contains a later candidate; the inner one is never emitted even
    // though it would be a valid link on its own.
    let text = "https://a.io/@inner";
    let mut candidates = scan_urls(text);
    candidates.extend(scan_mentions(text));
    let accepted = resolve_overlaps(merge(candidates, Vec::new()));
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].raw, "https://a.io/@inner");
}
