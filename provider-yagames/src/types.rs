//! Host JSON documents
//!
//! Data structures for deserializing the payloads the games portal SDK
//! hands to the completion callbacks.

use bridge_traits::{
    FailReviewReason, LeaderboardDescription, LeaderboardEntries, LeaderboardPlayer,
    LeaderboardPlayerData, LeaderboardRange, LeaderboardScoreType, PlatformId, Product,
    ProductPurchase, SignInType,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YaEnvironment {
    pub app: YaApp,
    pub i18n: YaI18n,
    #[serde(default)]
    pub payload: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YaApp {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YaI18n {
    pub lang: String,
    #[serde(default)]
    pub tld: String,
}

/// Player object; `mode == "lite"` is an unauthorized (guest) player.
#[derive(Debug, Clone, Deserialize)]
pub struct YaPlayer {
    #[serde(default)]
    pub mode: String,
}

impl YaPlayer {
    pub fn sign_in_type(&self) -> SignInType {
        if self.mode == "lite" {
            SignInType::Guest
        } else {
            SignInType::Account
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YaProduct {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub price_currency_code: String,
    pub price_value: String,
}

impl From<YaProduct> for Product {
    fn from(product: YaProduct) -> Self {
        Product {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            price_currency_code: product.price_currency_code,
            price_value: product.price_value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YaCatalog {
    pub products: Vec<YaProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YaProductPurchase {
    #[serde(rename = "productID")]
    pub product_id: String,
    pub purchase_token: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub developer_payload: String,
}

impl YaProductPurchase {
    pub fn into_purchase(self) -> ProductPurchase {
        ProductPurchase {
            product_id: self.product_id,
            token: self.purchase_token,
            signature: self.signature,
            developer_payload: self.developer_payload,
            platform: PlatformId::YaGames,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YaPurchases {
    #[serde(default)]
    pub purchases: Vec<YaProductPurchase>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YaLeaderboardDescription {
    #[serde(rename = "appID")]
    pub app_id: String,
    pub name: String,
    #[serde(rename = "default", default)]
    pub is_default: bool,
    #[serde(default)]
    pub description: YaLeaderboardOptions,
    /// Localized titles keyed by language.
    #[serde(default)]
    pub title: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct YaLeaderboardOptions {
    #[serde(default)]
    pub invert_sort_order: bool,
    #[serde(default)]
    pub score_format: YaScoreFormat,
    #[serde(rename = "type", default)]
    pub score_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YaScoreFormat {
    #[serde(default)]
    pub options: YaScoreFormatOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YaScoreFormatOptions {
    #[serde(default)]
    pub decimal_offset: u32,
}

impl YaLeaderboardDescription {
    /// Title in `lang`, falling back to English and then the id.
    pub fn into_description(self, lang: &str) -> LeaderboardDescription {
        let title = self
            .title
            .get(lang)
            .or_else(|| self.title.get("en"))
            .cloned()
            .unwrap_or_else(|| self.name.clone());
        LeaderboardDescription {
            app_id: self.app_id,
            id: self.name,
            title,
            is_default: self.is_default,
            invert_sort_order: self.description.invert_sort_order,
            decimal_offset: self.description.score_format.options.decimal_offset,
            score_type: match self.description.score_type.as_str() {
                "time" => LeaderboardScoreType::Time,
                _ => LeaderboardScoreType::Numeric,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YaLeaderboardEntry {
    pub score: i64,
    #[serde(default)]
    pub extra_data: Option<String>,
    pub rank: u32,
    pub player: YaLeaderboardPlayer,
    #[serde(default)]
    pub formatted_score: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YaLeaderboardPlayer {
    #[serde(rename = "uniqueID")]
    pub unique_id: String,
    #[serde(default)]
    pub public_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl YaLeaderboardEntry {
    pub fn into_player_data(self, leaderboard_id: &str) -> LeaderboardPlayerData {
        LeaderboardPlayerData {
            leaderboard_id: leaderboard_id.to_string(),
            rank: self.rank,
            score: self.score,
            formatted_score: self.formatted_score,
            extra_data: self.extra_data,
            player: LeaderboardPlayer {
                id: self.player.unique_id,
                public_name: self.player.public_name,
                avatar_url: self.player.avatar_url,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YaLeaderboardEntries {
    pub leaderboard: YaLeaderboardDescription,
    #[serde(default)]
    pub ranges: Vec<YaRange>,
    #[serde(default)]
    pub user_rank: u32,
    #[serde(default)]
    pub entries: Vec<YaLeaderboardEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct YaRange {
    pub start: u32,
    pub size: u32,
}

impl YaLeaderboardEntries {
    pub fn into_entries(self, lang: &str) -> LeaderboardEntries {
        let leaderboard = self.leaderboard.into_description(lang);
        let entries = self
            .entries
            .into_iter()
            .map(|entry| entry.into_player_data(&leaderboard.id))
            .collect();
        LeaderboardEntries {
            leaderboard,
            ranges: self
                .ranges
                .into_iter()
                .map(|range| LeaderboardRange {
                    start: range.start,
                    size: range.size,
                })
                .collect(),
            user_rank: self.user_rank,
            entries,
        }
    }
}

/// Answer of `can_review` / `request_review`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct YaReviewReply {
    pub value: bool,
    #[serde(default)]
    pub reason: i32,
}

/// Host review refusal codes.
pub fn review_reason(code: i32) -> FailReviewReason {
    match code {
        1 => FailReviewReason::NoAuth,
        2 => FailReviewReason::GameRated,
        // 3: already requested, 4: requested this session
        5 => FailReviewReason::Canceled,
        _ => FailReviewReason::Unknown,
    }
}
