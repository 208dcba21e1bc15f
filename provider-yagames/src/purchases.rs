use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{
    bridge, InitializationStatus, PlatformId, PlatformService, Product, ProductPurchase,
    PurchaseStatus, PurchasesApp,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use crate::error::decode;
use crate::host::YaGamesHost;
use crate::reported;
use crate::types::{YaCatalog, YaProductPurchase, YaPurchases};

/// Portal payments. Purchases must be consumed with their token.
pub struct YaGamesPurchases {
    host: Arc<dyn YaGamesHost>,
    status: Mutex<InitializationStatus>,
}

impl YaGamesPurchases {
    pub fn new(host: Arc<dyn YaGamesHost>) -> Self {
        Self {
            host,
            status: Mutex::new(InitializationStatus::None),
        }
    }
}

#[async_trait]
impl PlatformService for YaGamesPurchases {
    fn platform(&self) -> PlatformId {
        PlatformId::YaGames
    }

    fn initialization_status(&self) -> InitializationStatus {
        *self.status.lock()
    }

    async fn initialize(&self) -> Result<()> {
        *self.status.lock() = InitializationStatus::Waiting;
        let call = bridge("purchases.initialize", |done| self.host.purchases_initialize(done));
        let status = match reported("purchases.initialize", call.await) {
            Ok(Some(())) => InitializationStatus::Initialized,
            Ok(None) => InitializationStatus::Error,
            Err(err) => {
                *self.status.lock() = InitializationStatus::Error;
                return Err(err);
            }
        };
        *self.status.lock() = status;
        Ok(())
    }
}

#[async_trait]
impl PurchasesApp for YaGamesPurchases {
    async fn get_catalog(&self) -> Result<(PurchaseStatus, Vec<Product>)> {
        let call = bridge("purchases.catalog", |done| self.host.purchases_catalog(done));
        let Some(json) = reported("purchases.catalog", call.await)? else {
            return Ok((PurchaseStatus::Error, Vec::new()));
        };
        let catalog = decode::<YaCatalog>("catalog", &json)?;
        debug!(products = catalog.products.len(), "Catalog received");
        Ok((
            PurchaseStatus::Success,
            catalog.products.into_iter().map(Product::from).collect(),
        ))
    }

    async fn purchase(
        &self,
        product_id: &str,
        developer_payload: &str,
    ) -> Result<(PurchaseStatus, Option<ProductPurchase>)> {
        let call = bridge("purchases.purchase", |done| {
            self.host.purchase(product_id, developer_payload, done)
        });
        let Some(json) = reported("purchases.purchase", call.await)? else {
            return Ok((PurchaseStatus::Error, None));
        };
        let purchase = decode::<YaProductPurchase>("purchase", &json)?;
        Ok((PurchaseStatus::Success, Some(purchase.into_purchase())))
    }

    async fn get_purchases(&self) -> Result<(PurchaseStatus, Vec<ProductPurchase>)> {
        let call = bridge("purchases.owned", |done| self.host.purchases_owned(done));
        let Some(json) = reported("purchases.owned", call.await)? else {
            return Ok((PurchaseStatus::Error, Vec::new()));
        };
        let owned = decode::<YaPurchases>("purchases", &json)?;
        Ok((
            PurchaseStatus::Success,
            owned
                .purchases
                .into_iter()
                .map(YaProductPurchase::into_purchase)
                .collect(),
        ))
    }

    async fn consume(&self, purchase: &ProductPurchase) -> Result<PurchaseStatus> {
        let call = bridge("purchases.consume", |done| {
            self.host.purchases_consume(&purchase.token, done)
        });
        Ok(match reported("purchases.consume", call.await)? {
            Some(()) => PurchaseStatus::Success,
            None => PurchaseStatus::Error,
        })
    }
}
