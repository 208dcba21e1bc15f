use bridge_traits::{
    InitializationStatus, PlatformId, Product, ProductPurchase, PurchasesApp,
};
use core_runtime::bootstrap::Prerequisite;
use core_runtime::events::{Domain, EventBus, EventStream, PurchaseEvent, SdkEvent};
use core_runtime::facade::Facade;
use core_runtime::logging::redact_if_sensitive;
use core_runtime::orchestrate::{best_of_many, first_success, QueryOutcome};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct Purchases {
    facade: Facade<dyn PurchasesApp>,
}

impl Purchases {
    pub fn new(events: EventBus, app: Arc<dyn Prerequisite>) -> Self {
        Self {
            facade: Facade::new(Domain::Purchases, events).with_upstream(app),
        }
    }

    pub fn register(&self, adapter: Arc<dyn PurchasesApp>) -> bool {
        self.facade.register(adapter)
    }

    pub fn platforms(&self) -> Vec<PlatformId> {
        self.facade.registry().platforms()
    }

    pub fn subscribe(&self) -> EventStream {
        self.facade.subscribe()
    }

    pub fn status(&self) -> InitializationStatus {
        self.facade.status()
    }

    pub fn is_initialized(&self) -> bool {
        self.facade.is_initialized()
    }

    pub async fn initialize(&self) -> InitializationStatus {
        self.facade.initialize_adapters().await
    }

    pub async fn get_catalog(&self) -> Option<Vec<Product>> {
        if !self.facade.ensure_initialized("get catalog").await {
            return None;
        }

        best_of_many(
            Domain::Purchases,
            "get catalog",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .get_catalog()
                    .await
                    .map(|(status, products)| status.is_success().then_some(products))
            },
        )
        .await
        .into_option()
    }

    /// Buy `product_id` on the first host that accepts the purchase.
    #[instrument(skip(self, developer_payload))]
    pub async fn purchase(
        &self,
        product_id: &str,
        developer_payload: &str,
    ) -> Option<ProductPurchase> {
        if !self.facade.ensure_initialized("purchase").await {
            return None;
        }

        let outcome = first_success(
            Domain::Purchases,
            "purchase",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .purchase(product_id, developer_payload)
                    .await
                    .map(|(status, purchase)| purchase.filter(|_| status.is_success()))
            },
        )
        .await;

        match outcome {
            QueryOutcome::Found { platform, value } => {
                info!(
                    facade = %Domain::Purchases,
                    %platform,
                    product_id,
                    token = %redact_if_sensitive("token", &value.token),
                    "Product purchased"
                );
                self.facade
                    .events()
                    .emit(SdkEvent::Purchases(PurchaseEvent::Purchased {
                        product_id: value.product_id.clone(),
                        platform,
                    }));
                Some(value)
            }
            QueryOutcome::NotFound | QueryOutcome::Aborted { .. } => None,
        }
    }

    /// Purchases the player owns but has not consumed yet.
    pub async fn get_purchases(&self) -> Vec<ProductPurchase> {
        if !self.facade.ensure_initialized("get purchases").await {
            return Vec::new();
        }

        best_of_many(
            Domain::Purchases,
            "get purchases",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .get_purchases()
                    .await
                    .map(|(status, purchases)| status.is_success().then_some(purchases))
            },
        )
        .await
        .into_option()
        .unwrap_or_default()
    }

    /// Consume `purchase` on the host that produced it.
    #[instrument(skip(self, purchase), fields(product_id = %purchase.product_id, platform = %purchase.platform))]
    pub async fn consume(&self, purchase: &ProductPurchase) -> bool {
        if !self.facade.ensure_initialized("consume").await {
            return false;
        }

        let Some(adapter) = self.facade.resolve(purchase.platform) else {
            warn!(
                facade = %Domain::Purchases,
                platform = %purchase.platform,
                "No adapter registered for the purchase's platform"
            );
            return false;
        };

        match adapter.consume(purchase).await {
            Ok(status) if status.is_success() => {
                self.facade
                    .events()
                    .emit(SdkEvent::Purchases(PurchaseEvent::Consumed {
                        product_id: purchase.product_id.clone(),
                        platform: purchase.platform,
                    }));
                true
            }
            Ok(status) => {
                warn!(facade = %Domain::Purchases, ?status, "Purchase was not consumed");
                false
            }
            Err(err) => {
                error!(facade = %Domain::Purchases, error = %err, "Adapter error during consume");
                false
            }
        }
    }
}

impl std::fmt::Debug for Purchases {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Purchases")
            .field("facade", &self.facade)
            .finish()
    }
}
