//! Ads as served by the API and listings as shown to the user

use bazaar_text::linkify::telegram_target;
use serde::{Deserialize, Serialize};

/// An ad object from `/api/ads` or `/api/myads`.
///
/// Only the fields the listing screens read are modelled; anything else in the payload is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ad {
    pub id: u64,
    #[serde(default)]
    pub photo_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    pub username: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub category: String,
}

/// An ad prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub id: u64,
    pub image: String,
    pub title: String,
    pub description: String,
    /// Seller handle with a leading `@`.
    pub username: String,
    pub is_premium: bool,
    pub category: String,
}

impl Listing {
    /// Convert an API ad. A missing or empty `photo_id` falls back to `placeholder_image`.
    pub fn from_ad(ad: Ad, placeholder_image: &str) -> Self {
        let image = ad
            .photo_id
            .filter(|photo| !photo.is_empty())
            .unwrap_or_else(|| placeholder_image.to_string());
        Self {
            id: ad.id,
            image,
            title: ad.title,
            description: ad.desc,
            username: format!("@{}", ad.username),
            is_premium: ad.is_premium,
            category: ad.category,
        }
    }

    /// Telegram link for contacting the seller.
    pub fn contact_url(&self) -> String {
        telegram_target(&self.username)
    }
}
