use bridge_traits::{InitializationStatus, PlatformId, RemoteConfigValue, RemoteConfigsApp};
use core_runtime::bootstrap::Prerequisite;
use core_runtime::events::{Domain, EventBus, EventStream};
use core_runtime::facade::{initialized_step, Facade};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct RemoteConfigs {
    facade: Facade<dyn RemoteConfigsApp>,
}

impl RemoteConfigs {
    pub fn new(events: EventBus, app: Arc<dyn Prerequisite>) -> Self {
        Self {
            facade: Facade::new(Domain::RemoteConfig, events).with_upstream(app),
        }
    }

    pub fn register(&self, adapter: Arc<dyn RemoteConfigsApp>) -> bool {
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

    /// Initialize every backend with targeting parameters.
    #[instrument(skip(self, parameters), fields(parameters = parameters.len()))]
    pub async fn initialize_with_user_parameters(
        &self,
        parameters: &[(String, String)],
    ) -> InitializationStatus {
        self.facade
            .initialize_with(|adapter| async move {
                adapter
                    .initialize_with_user_parameters(parameters)
                    .await
                    .map(|()| initialized_step(adapter.initialization_status()))
            })
            .await
    }

    /// Every known value; earlier-registered backends win key conflicts.
    ///
    /// Empty until the facade is initialized.
    pub fn values(&self) -> IndexMap<String, RemoteConfigValue> {
        let mut merged = IndexMap::new();
        if !self.is_initialized() {
            debug!(facade = %Domain::RemoteConfig, "Remote values read before initialization");
            return merged;
        }

        for (platform, adapter) in self.facade.adapters().iter() {
            let mut values: Vec<_> = adapter.remote_values().into_iter().collect();
            values.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (key, value) in values {
                if merged.contains_key(&key) {
                    debug!(facade = %Domain::RemoteConfig, %platform, key, "Shadowed remote value");
                    continue;
                }
                merged.insert(key, value);
            }
        }
        merged
    }

    pub fn get(&self, key: &str) -> Option<RemoteConfigValue> {
        if !self.is_initialized() {
            return None;
        }
        self.facade
            .adapters()
            .iter()
            .find_map(|(_, adapter)| adapter.remote_values().remove(key))
    }
}

impl std::fmt::Debug for RemoteConfigs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfigs")
            .field("facade", &self.facade)
            .finish()
    }
}
