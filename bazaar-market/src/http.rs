//! reqwest-backed [`MarketApi`]

use crate::ad::Ad;
use crate::api::MarketApi;
use crate::blacklist::ScammerStatus;
use crate::error::{ApiError, MarketError};
use crate::query::{my_ads_url, parse_base_url, scammer_url, AdsQuery};
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpMarketApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpMarketApi {
    pub fn new(base_url: &str) -> Result<Self, MarketError> {
        Ok(Self::with_client(reqwest::Client::new(), parse_base_url(base_url)?))
    }

    pub fn with_client(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let path = url.path().to_string();
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            path,
            reason: e.to_string(),
        })
    }
}

impl MarketApi for HttpMarketApi {
    async fn ads(&self, query: &AdsQuery) -> Result<Vec<Ad>, ApiError> {
        self.get_json(query.url(&self.base)).await
    }

    async fn my_ads(&self, user_id: &str) -> Result<Vec<Ad>, ApiError> {
        self.get_json(my_ads_url(&self.base, user_id)).await
    }

    async fn scammer_status(&self, username: &str) -> Result<ScammerStatus, ApiError> {
        self.get_json(scammer_url(&self.base, username)).await
    }
}
