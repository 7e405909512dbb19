//! Seam to the marketplace REST API

use crate::ad::Ad;
use crate::blacklist::ScammerStatus;
use crate::error::ApiError;
use crate::query::AdsQuery;
use std::future::Future;

/// The three requests the screens make. Each is a single request/response with no retry.
pub trait MarketApi: Send + Sync {
    /// `GET /api/ads`
    fn ads(&self, query: &AdsQuery) -> impl Future<Output = Result<Vec<Ad>, ApiError>> + Send;

    /// `GET /api/myads`
    fn my_ads(&self, user_id: &str) -> impl Future<Output = Result<Vec<Ad>, ApiError>> + Send;

    /// `GET /api/scammer/<username>`; `username` is already normalized.
    fn scammer_status(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<ScammerStatus, ApiError>> + Send;
}
