//! Screen-level operations with the fallback policy applied
//!
//! [`Market`] never returns an error: API failures turn into the documented fallbacks.
//!
//! | Operation    | On failure                          |
//! |--------------|-------------------------------------|
//! | `listings`   | empty list                          |
//! | `my_listings`| empty list                          |
//! | `check`      | [`Verdict::Clean`] (fail-open)      |

use crate::ad::Listing;
use crate::api::MarketApi;
use crate::blacklist::{normalize_username, Verdict};
use crate::feed::category_feed;
use crate::query::AdsQuery;
use crate::session::Session;

/// Result of the profile screen's "my ads" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MyListings {
    /// No user id is known, so nothing was requested.
    Anonymous,
    Loaded(Vec<Listing>),
}

impl MyListings {
    pub fn listings(&self) -> &[Listing] {
        match self {
            MyListings::Anonymous => &[],
            MyListings::Loaded(listings) => listings,
        }
    }
}

pub struct Market<A> {
    api: A,
    placeholder_image: String,
}

impl<A: MarketApi> Market<A> {
    pub fn new(api: A, placeholder_image: impl Into<String>) -> Self {
        Self {
            api,
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Listings for the selected tab and type filter, premium first.
    pub async fn listings(&self, query: &AdsQuery) -> Vec<Listing> {
        let ads = match self.api.ads(query).await {
            Ok(ads) => ads,
            Err(error) => {
                tracing::warn!(%error, category = %query.category, "failed to fetch listings");
                Vec::new()
            }
        };
        let listings = self.to_listings(ads);
        category_feed(listings, query.category)
    }

    /// The session user's own listings, in server order.
    pub async fn my_listings(&self, session: &Session) -> MyListings {
        let Some(user_id) = session.user_id() else {
            return MyListings::Anonymous;
        };
        match self.api.my_ads(user_id).await {
            Ok(ads) => MyListings::Loaded(self.to_listings(ads)),
            Err(error) => {
                tracing::warn!(%error, user_id, "failed to fetch own listings");
                MyListings::Loaded(Vec::new())
            }
        }
    }

    /// Blacklist verdict for what the user typed; `None` when the input is blank.
    ///
    /// A failed lookup reports [`Verdict::Clean`]. This keeps the screen usable during an outage
    /// but means a real scammer is shown as clean whenever the API is down.
    pub async fn check(&self, input: &str) -> Option<Verdict> {
        let username = normalize_username(input)?;
        let verdict = match self.api.scammer_status(&username).await {
            Ok(status) => Verdict::from(status),
            Err(error) => {
                tracing::warn!(%error, %username, "blacklist lookup failed, reporting clean");
                Verdict::Clean
            }
        };
        Some(verdict)
    }

    fn to_listings(&self, ads: Vec<crate::ad::Ad>) -> Vec<Listing> {
        ads.into_iter()
            .map(|ad| Listing::from_ad(ad, &self.placeholder_image))
            .collect()
    }
}
