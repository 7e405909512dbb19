//! Subcommand implementations
//!
//! Every command returns the text to print on stdout or a message for stderr.

use bazaar_config::BazaarConfig;
use bazaar_market::{
    category_feed, Ad, AdsQuery, HttpMarketApi, Listing, MainCategory, Market, MarketError,
    MyListings, TypeFilter, Verdict,
};
use bazaar_render::{FormatRegistry, LinkAttributes};
use bazaar_text::annotate as annotate_text;
use std::fs;
use std::future::Future;
use std::io::Read;
use std::path::Path;

/// Linkify a file (or stdin when `path` is absent or `-`).
pub fn annotate(config: &BazaarConfig, path: Option<&Path>, to: &str) -> Result<String, String> {
    let source = read_source(path)?;
    let segments = annotate_text(&source);
    tracing::debug!(segments = segments.len(), "annotated input");
    let output = registry(config)
        .render_segments(&segments, to)
        .map_err(|e| e.to_string())?;
    Ok(with_newline(output))
}

/// Listings of a category, from the API or from a JSON dump of ads.
pub fn listings(
    config: &BazaarConfig,
    cat: &str,
    type_filter: &str,
    from_file: Option<&Path>,
    to: &str,
) -> Result<String, String> {
    let category: MainCategory = cat.parse().map_err(|e: MarketError| e.to_string())?;
    let type_filter = TypeFilter::parse(category, type_filter).map_err(|e| e.to_string())?;
    let registry = registry(config);
    ensure_listing_format(&registry, to)?;

    let listings = match from_file {
        Some(path) => {
            let ads = read_ads(path)?;
            let placeholder = &config.listings.placeholder_image;
            // the type filter is applied by the server, a dump is taken as already filtered
            if let Some(filter) = type_filter.as_param() {
                tracing::warn!(filter, "type filter ignored for ads read from a file");
            }
            let listings = ads
                .into_iter()
                .map(|ad| Listing::from_ad(ad, placeholder))
                .collect();
            category_feed(listings, category)
        }
        None => {
            let query = AdsQuery::new(category).with_type(type_filter);
            let market = market(config)?;
            block_on(market.listings(&query))?
        }
    };
    tracing::info!(count = listings.len(), %category, "loaded listings");

    let output = registry
        .render_listings(&listings, to)
        .map_err(|e| e.to_string())?;
    Ok(with_newline(output))
}

/// The session user's own listings. Without a user id nothing is requested.
pub fn my_ads(config: &BazaarConfig, user_id: Option<&str>, to: &str) -> Result<String, String> {
    let mut session = config.session.to_session();
    if let Some(user_id) = user_id {
        session = session.with_user_id(user_id);
    }
    let registry = registry(config);
    ensure_listing_format(&registry, to)?;

    let mine = match session.user_id() {
        None => MyListings::Anonymous,
        Some(_) => {
            let market = market(config)?;
            block_on(market.my_listings(&session))?
        }
    };

    match mine {
        MyListings::Anonymous => {
            Ok("No user id configured; set session.user_id or pass --user-id\n".to_string())
        }
        MyListings::Loaded(listings) => {
            let output = registry
                .render_listings(&listings, to)
                .map_err(|e| e.to_string())?;
            Ok(with_newline(output))
        }
    }
}

/// Blacklist verdict for a username.
pub fn check(config: &BazaarConfig, username: &str) -> Result<String, String> {
    if username.trim().is_empty() {
        return Err("Enter a username to check".to_string());
    }
    let market = market(config)?;
    match block_on(market.check(username))? {
        Some(Verdict::Scammer) => Ok(format!("{}: scammer\n", username.trim())),
        Some(Verdict::Clean) => Ok(format!("{}: clean\n", username.trim())),
        None => Err("Enter a username to check".to_string()),
    }
}

/// The effective configuration as pretty JSON.
pub fn show_config(config: &BazaarConfig) -> Result<String, String> {
    serde_json::to_string_pretty(config)
        .map(with_newline)
        .map_err(|e| format!("JSON serialization failed: {}", e))
}

/// Format names with their descriptions; listing-capable formats are marked.
pub fn list_formats(config: &BazaarConfig) -> String {
    let registry = registry(config);
    let listing_formats = registry.list_listing_formats();
    let mut out = String::from("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|format| format.description().to_string())
            .unwrap_or_default();
        let marker = if listing_formats.contains(&name) {
            " [listings]"
        } else {
            ""
        };
        out.push_str(&format!("  {:<6} {}{}\n", name, description, marker));
    }
    out
}

fn registry(config: &BazaarConfig) -> FormatRegistry {
    let links = LinkAttributes {
        target: config.links.target.clone(),
        rel: config.links.rel.clone(),
        class: config.links.class.clone(),
    };
    FormatRegistry::with_defaults(links, config.session.to_session().theme())
}

fn ensure_listing_format(registry: &FormatRegistry, to: &str) -> Result<(), String> {
    let format = registry.get(to).map_err(|e| e.to_string())?;
    if format.supports_listings() {
        Ok(())
    } else {
        Err(format!("Format '{}' does not support listings", to))
    }
}

fn market(config: &BazaarConfig) -> Result<Market<HttpMarketApi>, String> {
    let api = HttpMarketApi::new(&config.api.base_url).map_err(|e| e.to_string())?;
    Ok(Market::new(api, config.listings.placeholder_image.clone()))
}

fn block_on<F: Future>(future: F) -> Result<F::Output, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {}", e))?;
    Ok(runtime.block_on(future))
}

fn read_source(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e)),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(source)
        }
    }
}

fn read_ads(path: &Path) -> Result<Vec<Ad>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid ads in '{}': {}", path.display(), e))
}

fn with_newline(mut output: String) -> String {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
