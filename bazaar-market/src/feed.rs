//! Client-side shaping of a fetched listing list

use crate::ad::Listing;
use crate::category::MainCategory;

/// Listings of `category`, premium first.
///
/// The API is asked for one category already, but the list is filtered again on the client so a
/// stale or mixed response never shows ads from another tab. The sort is stable: within the
/// premium and regular groups the server's order is kept.
pub fn category_feed(listings: Vec<Listing>, category: MainCategory) -> Vec<Listing> {
    let mut feed: Vec<Listing> = listings
        .into_iter()
        .filter(|listing| listing.category == category.as_str())
        .collect();
    feed.sort_by_key(|listing| !listing.is_premium);
    feed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u64, category: &str, is_premium: bool) -> Listing {
        Listing {
            id,
            image: String::new(),
            title: format!("ad {}", id),
            description: String::new(),
            username: "@seller".to_string(),
            is_premium,
            category: category.to_string(),
        }
    }

    #[test]
    fn drops_other_categories() {
        let feed = category_feed(
            vec![listing(1, "services", false), listing(2, "other", false)],
            MainCategory::Services,
        );
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, 1);
    }

    #[test]
    fn premium_first_keeping_server_order() {
        let feed = category_feed(
            vec![
                listing(1, "other", false),
                listing(2, "other", true),
                listing(3, "other", false),
                listing(4, "other", true),
            ],
            MainCategory::Other,
        );
        let ids: Vec<_> = feed.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }
}
