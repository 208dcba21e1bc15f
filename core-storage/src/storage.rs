use bridge_traits::{InitializationStatus, PlatformId, StorageApp, StorageStatus};
use core_runtime::bootstrap::Prerequisite;
use core_runtime::events::{Domain, EventBus, EventStream};
use core_runtime::facade::Facade;
use core_runtime::orchestrate::{best_of_many, submit_each};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct GameStorage {
    facade: Facade<dyn StorageApp>,
}

impl GameStorage {
    pub fn new(events: EventBus, app: Arc<dyn Prerequisite>) -> Self {
        Self {
            facade: Facade::new(Domain::Storage, events).with_upstream(app),
        }
    }

    pub fn register(&self, adapter: Arc<dyn StorageApp>) -> bool {
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

    /// Write `value` under `key` on every backend.
    ///
    /// `Success` only when every backend stored the value. `None` when
    /// nothing was attempted.
    #[instrument(skip(self, value))]
    pub async fn save(&self, key: &str, value: &str) -> StorageStatus {
        if !self.facade.ensure_initialized("save").await {
            return StorageStatus::None;
        }

        let outcome = submit_each(
            Domain::Storage,
            "save",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .save(key, value)
                    .await
                    .map(|status| status.is_success())
            },
        )
        .await;

        if outcome.attempted() == 0 {
            debug!(facade = %Domain::Storage, key, "No storage backend registered");
            return StorageStatus::None;
        }
        if outcome.is_success() {
            StorageStatus::Success
        } else {
            StorageStatus::Error
        }
    }

    #[instrument(skip(self))]
    pub async fn load(&self, key: &str) -> Option<String> {
        if !self.facade.ensure_initialized("load").await {
            return None;
        }

        best_of_many(
            Domain::Storage,
            "load",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .load(key)
                    .await
                    .map(|(status, value)| value.filter(|_| status.is_success()))
            },
        )
        .await
        .into_option()
    }
}

impl std::fmt::Debug for GameStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStorage")
            .field("facade", &self.facade)
            .finish()
    }
}
