//! Market fallback policy over a scripted API

use bazaar_market::{
    Ad, AdsQuery, ApiError, MainCategory, Market, MarketApi, MyListings, ScammerStatus, Session,
    Verdict,
};
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers every request from fixed data and counts calls.
#[derive(Default)]
struct ScriptedApi {
    ads: Option<Vec<Ad>>,
    status: Option<ScammerStatus>,
    calls: AtomicUsize,
}

fn unavailable(path: &str) -> ApiError {
    ApiError::Status {
        path: path.to_string(),
        status: 503,
    }
}

impl MarketApi for ScriptedApi {
    async fn ads(&self, _query: &AdsQuery) -> Result<Vec<Ad>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.ads.clone().ok_or_else(|| unavailable("/api/ads"))
    }

    async fn my_ads(&self, _user_id: &str) -> Result<Vec<Ad>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.ads.clone().ok_or_else(|| unavailable("/api/myads"))
    }

    async fn scammer_status(&self, _username: &str) -> Result<ScammerStatus, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.status.ok_or_else(|| unavailable("/api/scammer"))
    }
}

fn ad(id: u64, category: &str, is_premium: bool) -> Ad {
    Ad {
        id,
        photo_id: None,
        title: format!("ad {}", id),
        desc: String::new(),
        username: "seller".to_string(),
        is_premium,
        category: category.to_string(),
    }
}

fn market(api: ScriptedApi) -> Market<ScriptedApi> {
    Market::new(api, "placeholder.png")
}

#[tokio::test]
async fn listings_are_filtered_and_premium_first() {
    let market = market(ScriptedApi {
        ads: Some(vec![
            ad(1, "other", false),
            ad(2, "services", false),
            ad(3, "other", true),
        ]),
        ..Default::default()
    });
    let listings = market.listings(&AdsQuery::new(MainCategory::Other)).await;
    let ids: Vec<_> = listings.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[tokio::test]
async fn failed_listings_fetch_is_empty() {
    let market = market(ScriptedApi::default());
    assert!(market
        .listings(&AdsQuery::new(MainCategory::Services))
        .await
        .is_empty());
}

#[tokio::test]
async fn anonymous_session_makes_no_request() {
    let market = market(ScriptedApi::default());
    let mine = market.my_listings(&Session::default()).await;
    assert_eq!(mine, MyListings::Anonymous);
    assert!(mine.listings().is_empty());
    assert_eq!(market.api().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_own_listings_fetch_is_empty() {
    let market = market(ScriptedApi::default());
    let mine = market
        .my_listings(&Session::default().with_user_id("7"))
        .await;
    assert_eq!(mine, MyListings::Loaded(Vec::new()));
}

#[rstest]
#[case::flagged(Some(ScammerStatus { safe: Some(false) }), Verdict::Scammer)]
#[case::safe(Some(ScammerStatus { safe: Some(true) }), Verdict::Clean)]
#[case::no_field(Some(ScammerStatus { safe: None }), Verdict::Clean)]
#[case::outage(None, Verdict::Clean)]
#[tokio::test]
async fn blacklist_verdicts(#[case] status: Option<ScammerStatus>, #[case] expected: Verdict) {
    let market = market(ScriptedApi {
        status,
        ..Default::default()
    });
    assert_eq!(market.check("@someone").await, Some(expected));
}

#[tokio::test]
async fn blank_search_makes_no_request() {
    let market = market(ScriptedApi::default());
    assert_eq!(market.check("   ").await, None);
    assert_eq!(market.api().calls.load(Ordering::SeqCst), 0);
}
