use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{
    BridgeError, ConfigValueSource, InitializationStatus, PlatformId, PlatformService,
    RemoteConfigValue, RemoteConfigsApp,
};
use core_remote_config::RemoteConfigs;
use core_runtime::bootstrap::Prerequisite;
use core_runtime::events::{Domain, EventBus, LifecycleEvent, SdkEvent};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

struct AppUp;

#[async_trait]
impl Prerequisite for AppUp {
    fn describe(&self) -> &'static str {
        "core app initialization"
    }

    fn is_satisfied(&self) -> bool {
        true
    }

    async fn satisfy(&self) {}
}

/// Backend serving a fixed table once initialized.
struct Flags {
    platform: PlatformId,
    table: Vec<(&'static str, &'static str)>,
    faults: bool,
    status: Mutex<InitializationStatus>,
    received: Mutex<Vec<(String, String)>>,
}

impl Flags {
    fn new(platform: PlatformId, table: Vec<(&'static str, &'static str)>) -> Arc<Self> {
        Arc::new(Self {
            platform,
            table,
            faults: false,
            status: Mutex::new(InitializationStatus::None),
            received: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PlatformService for Flags {
    fn platform(&self) -> PlatformId {
        self.platform
    }

    fn initialization_status(&self) -> InitializationStatus {
        *self.status.lock().unwrap()
    }

    async fn initialize(&self) -> Result<()> {
        self.initialize_with_user_parameters(&[]).await
    }
}

#[async_trait]
impl RemoteConfigsApp for Flags {
    fn remote_values(&self) -> HashMap<String, RemoteConfigValue> {
        if *self.status.lock().unwrap() != InitializationStatus::Initialized {
            return HashMap::new();
        }
        self.table
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    RemoteConfigValue::new(*key, *value, ConfigValueSource::Remote),
                )
            })
            .collect()
    }

    async fn initialize_with_user_parameters(
        &self,
        parameters: &[(String, String)],
    ) -> Result<()> {
        if self.faults {
            return Err(BridgeError::OperationFailed("flags endpoint".to_string()));
        }
        self.received.lock().unwrap().extend_from_slice(parameters);
        *self.status.lock().unwrap() = InitializationStatus::Initialized;
        Ok(())
    }
}

fn configs() -> (RemoteConfigs, EventBus) {
    let bus = EventBus::new(16);
    (RemoteConfigs::new(bus.clone(), Arc::new(AppUp)), bus)
}

#[tokio::test]
async fn test_values_empty_before_initialization() {
    let (configs, _) = configs();
    configs.register(Flags::new(PlatformId::Editor, vec![("lives", "3")]));

    assert!(configs.values().is_empty());
    assert!(configs.get("lives").is_none());
}

#[tokio::test]
async fn test_user_parameters_reach_every_backend() {
    let (configs, _) = configs();
    let editor = Flags::new(PlatformId::Editor, vec![("lives", "3")]);
    let host = Flags::new(PlatformId::YaGames, vec![("ads_enabled", "true")]);
    configs.register(editor.clone());
    configs.register(host.clone());

    let parameters = vec![("segment".to_string(), "new_players".to_string())];
    assert_eq!(
        configs.initialize_with_user_parameters(&parameters).await,
        InitializationStatus::Initialized
    );
    assert_eq!(*editor.received.lock().unwrap(), parameters);
    assert_eq!(*host.received.lock().unwrap(), parameters);

    assert_eq!(configs.get("lives").and_then(|v| v.as_i64()), Some(3));
    assert_eq!(configs.get("ads_enabled").and_then(|v| v.as_bool()), Some(true));
}

#[tokio::test]
async fn test_earlier_backend_wins_conflicts() {
    let (configs, _) = configs();
    configs.register(Flags::new(PlatformId::YaGames, vec![("lives", "5"), ("speed", "1.5")]));
    configs.register(Flags::new(PlatformId::Editor, vec![("lives", "3"), ("theme", "dark")]));
    configs.initialize().await;

    let values = configs.values();
    assert_eq!(values.len(), 3);
    assert_eq!(values["lives"].as_str(), "5");
    assert_eq!(values["theme"].as_str(), "dark");
    assert_eq!(configs.get("lives").unwrap().as_str(), "5");
}

#[tokio::test]
async fn test_fault_fails_initialization() {
    let (configs, bus) = configs();
    let mut events = bus.subscribe_domain(Domain::RemoteConfig);
    configs.register(Arc::new(Flags {
        platform: PlatformId::YaGames,
        table: vec![],
        faults: true,
        status: Mutex::new(InitializationStatus::None),
        received: Mutex::new(Vec::new()),
    }));

    assert_eq!(
        configs.initialize_with_user_parameters(&[]).await,
        InitializationStatus::Error
    );
    assert_eq!(
        events.drain(),
        vec![SdkEvent::Lifecycle(LifecycleEvent::InitializeError {
            domain: Domain::RemoteConfig,
            platform: Some(PlatformId::YaGames),
            status: InitializationStatus::Error,
        })]
    );
}
