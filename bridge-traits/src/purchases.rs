//! In-app purchases capability and data types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::{PlatformId, PlatformService};

/// Completion status an adapter reports for a purchases call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PurchaseStatus {
    #[default]
    None,
    Waiting,
    Success,
    Error,
}

impl PurchaseStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, PurchaseStatus::Success)
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Localized, display-ready price ("0.01 YAN").
    pub price: String,
    pub price_currency_code: String,
    pub price_value: String,
}

/// A completed purchase awaiting (or past) consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPurchase {
    pub product_id: String,
    pub token: String,
    pub signature: String,
    pub developer_payload: String,
    /// Backend that processed the purchase; consumption routes back to it.
    pub platform: PlatformId,
}

#[async_trait]
pub trait PurchasesApp: PlatformService {
    async fn get_catalog(&self) -> Result<(PurchaseStatus, Vec<Product>)>;

    async fn purchase(
        &self,
        product_id: &str,
        developer_payload: &str,
    ) -> Result<(PurchaseStatus, Option<ProductPurchase>)>;

    /// Unconsumed purchases the backend still knows about.
    async fn get_purchases(&self) -> Result<(PurchaseStatus, Vec<ProductPurchase>)>;

    async fn consume(&self, purchase: &ProductPurchase) -> Result<PurchaseStatus>;
}
