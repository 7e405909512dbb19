//! Marketplace view model
//!
//!     Everything the listing screens do besides drawing: turning API ads into listings, building
//!     API queries, filtering and ordering the fetched list, classifying blacklist lookups and
//!     holding the per-user session (theme, identity).
//!
//!     The REST API itself is an external collaborator. It is reached through the [`MarketApi`]
//!     trait; [`HttpMarketApi`] is the real client and tests substitute their own.
//!
//!     The file structure :
//!     .
//!     ├── ad.rs          # Wire `Ad` and display `Listing`
//!     ├── category.rs    # Main categories and their type filters
//!     ├── query.rs       # API paths and query strings
//!     ├── feed.rs        # Client-side filtering and premium-first ordering
//!     ├── blacklist.rs   # Username normalization and verdicts
//!     ├── session.rs     # Theme and user identity
//!     ├── api.rs         # MarketApi trait
//!     ├── http.rs        # reqwest implementation
//!     ├── market.rs      # Fallback policy on top of any MarketApi
//!     └── error.rs
//!
//! Fallbacks
//!
//!     A failed listings fetch shows an empty list. A failed blacklist lookup reports the user as
//!     clean. The second one is fail-open: an outage makes every scammer look safe. Both are logged
//!     at warn level so the outage is at least visible.

pub mod ad;
pub mod api;
pub mod blacklist;
pub mod category;
pub mod error;
pub mod feed;
pub mod http;
pub mod market;
pub mod query;
pub mod session;

pub use ad::{Ad, Listing};
pub use api::MarketApi;
pub use blacklist::{normalize_username, ScammerStatus, Verdict};
pub use category::{MainCategory, TypeFilter};
pub use error::{ApiError, MarketError};
pub use feed::category_feed;
pub use http::HttpMarketApi;
pub use market::{Market, MyListings};
pub use query::AdsQuery;
pub use session::{Session, Theme};
