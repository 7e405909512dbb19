//! API paths and query strings
//!
//! | Screen    | Request                                  |
//! |-----------|------------------------------------------|
//! | Listings  | `GET /api/ads?cat=<category>[&f1=<type>]` |
//! | Profile   | `GET /api/myads?user_id=<id>`            |
//! | Blacklist | `GET /api/scammer/<username>`            |

use crate::category::{MainCategory, TypeFilter};
use crate::error::MarketError;
use url::Url;

/// Selection on the listings screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdsQuery {
    pub category: MainCategory,
    pub type_filter: TypeFilter,
}

impl AdsQuery {
    pub fn new(category: MainCategory) -> Self {
        Self {
            category,
            type_filter: TypeFilter::All,
        }
    }

    pub fn with_type(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    /// Query pairs in the order they are sent.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("cat", self.category.as_str().to_string())];
        if let Some(filter) = self.type_filter.as_param() {
            pairs.push(("f1", filter.to_string()));
        }
        pairs
    }

    pub fn url(&self, base: &Url) -> Url {
        let mut url = endpoint(base, &["api", "ads"]);
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in self.pairs() {
                query.append_pair(key, &value);
            }
        }
        url
    }
}

pub fn my_ads_url(base: &Url, user_id: &str) -> Url {
    let mut url = endpoint(base, &["api", "myads"]);
    url.query_pairs_mut().append_pair("user_id", user_id);
    url
}

/// `username` must already be normalized; it is percent-encoded as a path segment.
pub fn scammer_url(base: &Url, username: &str) -> Url {
    endpoint(base, &["api", "scammer", username])
}

/// Parse a configured base url, rejecting ones that cannot carry a path.
pub fn parse_base_url(raw: &str) -> Result<Url, MarketError> {
    let url = Url::parse(raw).map_err(|e| MarketError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(MarketError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "not a hierarchical url".to_string(),
        });
    }
    Ok(url)
}

fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
