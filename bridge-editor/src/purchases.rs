//! Editor store

use async_trait::async_trait;
use bridge_traits::{
    error::Result, synthetic, PlatformId, PlatformService, Product, ProductPurchase,
    PurchaseStatus, PurchasesApp,
};
use parking_lot::Mutex;
use tracing::debug;

fn catalog() -> Vec<Product> {
    [("test_pack_1", "+100 Coins"), ("test_pack_2", "NoAds")]
        .into_iter()
        .map(|(id, title)| Product {
            id: id.to_string(),
            title: title.to_string(),
            description: title.to_string(),
            price: "0.01 YAN".to_string(),
            price_currency_code: "YAN".to_string(),
            price_value: "0.01".to_string(),
        })
        .collect()
}

/// Store selling the two test packs for free.
///
/// Purchases stay owned until consumed.
pub struct EditorPurchases {
    owned: Mutex<Vec<ProductPurchase>>,
}

impl EditorPurchases {
    pub fn new() -> Self {
        Self {
            owned: Mutex::new(Vec::new()),
        }
    }
}

impl Default for EditorPurchases {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformService for EditorPurchases {
    fn platform(&self) -> PlatformId {
        PlatformId::Editor
    }
}

#[async_trait]
impl PurchasesApp for EditorPurchases {
    async fn get_catalog(&self) -> Result<(PurchaseStatus, Vec<Product>)> {
        let products = synthetic("purchases.catalog", catalog()).await?;
        Ok((PurchaseStatus::Success, products))
    }

    async fn purchase(
        &self,
        product_id: &str,
        developer_payload: &str,
    ) -> Result<(PurchaseStatus, Option<ProductPurchase>)> {
        if !catalog().iter().any(|product| product.id == product_id) {
            debug!(product_id, "Unknown editor product");
            return Ok((PurchaseStatus::Error, None));
        }

        let purchase = ProductPurchase {
            product_id: product_id.to_string(),
            token: format!("{product_id}_token"),
            signature: String::new(),
            developer_payload: developer_payload.to_string(),
            platform: PlatformId::Editor,
        };
        let purchase = synthetic("purchases.purchase", purchase).await?;
        self.owned.lock().push(purchase.clone());
        Ok((PurchaseStatus::Success, Some(purchase)))
    }

    async fn get_purchases(&self) -> Result<(PurchaseStatus, Vec<ProductPurchase>)> {
        let owned = self.owned.lock().clone();
        let owned = synthetic("purchases.owned", owned).await?;
        Ok((PurchaseStatus::Success, owned))
    }

    async fn consume(&self, purchase: &ProductPurchase) -> Result<PurchaseStatus> {
        synthetic("purchases.consume", ()).await?;
        let mut owned = self.owned.lock();
        match owned.iter().position(|p| p.token == purchase.token) {
            Some(index) => {
                owned.remove(index);
                Ok(PurchaseStatus::Success)
            }
            None => Ok(PurchaseStatus::Error),
        }
    }
}
