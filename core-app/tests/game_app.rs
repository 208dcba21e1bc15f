use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{BridgeError, CoreApp, DeviceType, InitializationStatus, PlatformId, PlatformService};
use core_app::GameApp;
use core_runtime::config::QueryDefaults;
use core_runtime::events::{EventBus, GameEvent, LifecycleEvent, SdkEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

type Journal = Arc<Mutex<Vec<String>>>;

struct FakeHost {
    platform: PlatformId,
    device: DeviceType,
    lang: &'static str,
    fail_initialize: bool,
    acknowledges_ready: bool,
    status: Mutex<InitializationStatus>,
    ready: AtomicBool,
    journal: Journal,
}

impl FakeHost {
    fn new(platform: PlatformId, journal: &Journal) -> Self {
        Self {
            platform,
            device: DeviceType::Desktop,
            lang: "en",
            fail_initialize: false,
            acknowledges_ready: true,
            status: Mutex::new(InitializationStatus::None),
            ready: AtomicBool::new(false),
            journal: Arc::clone(journal),
        }
    }

    fn record(&self, call: &str) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.platform, call));
    }
}

#[async_trait]
impl PlatformService for FakeHost {
    fn platform(&self) -> PlatformId {
        self.platform
    }

    fn initialization_status(&self) -> InitializationStatus {
        *self.status.lock().unwrap()
    }

    async fn initialize(&self) -> Result<()> {
        self.record("initialize");
        if self.fail_initialize {
            return Err(BridgeError::OperationFailed("sdk script missing".to_string()));
        }
        *self.status.lock().unwrap() = InitializationStatus::Initialized;
        Ok(())
    }
}

#[async_trait]
impl CoreApp for FakeHost {
    fn device_type(&self) -> DeviceType {
        self.device
    }

    fn app_id(&self) -> String {
        format!("{}-app", self.platform)
    }

    fn lang(&self) -> String {
        self.lang.to_string()
    }

    fn payload(&self) -> String {
        String::new()
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    async fn ready(&self) -> Result<()> {
        self.record("ready");
        self.ready.store(self.acknowledges_ready, Ordering::SeqCst);
        Ok(())
    }

    async fn start(&self) -> Result<bool> {
        self.record("start");
        Ok(true)
    }

    async fn stop(&self) -> Result<bool> {
        self.record("stop");
        Ok(true)
    }
}

fn app() -> (GameApp, EventBus) {
    let bus = EventBus::new(32);
    (GameApp::new(bus.clone(), QueryDefaults::default()), bus)
}

fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

#[test]
fn test_empty_registry_uses_defaults() {
    let (app, _) = app();

    assert_eq!(app.device_type(), DeviceType::Undefined);
    assert_eq!(app.lang(), "en");
    assert_eq!(app.app_id(), "-1");
    assert_eq!(app.payload(), "");
}

#[test]
fn test_first_registered_adapter_is_authoritative() {
    let (app, _) = app();
    let journal = journal();

    let mut ya = FakeHost::new(PlatformId::YaGames, &journal);
    ya.device = DeviceType::Mobile;
    ya.lang = "ru";
    let mut editor = FakeHost::new(PlatformId::Editor, &journal);
    editor.device = DeviceType::Tv;
    editor.lang = "tr";

    assert!(app.register(Arc::new(ya)));
    assert!(app.register(Arc::new(editor)));
    assert!(!app.register(Arc::new(FakeHost::new(PlatformId::YaGames, &journal))));

    assert_eq!(app.device_type(), DeviceType::Mobile);
    assert_eq!(app.lang(), "ru");
    assert_eq!(app.app_id(), "yagames-app");
    assert_eq!(app.platforms(), vec![PlatformId::YaGames, PlatformId::Editor]);
}

#[tokio::test]
async fn test_initialize_twice_fires_once() {
    let (app, bus) = app();
    let mut events = bus.subscribe();
    let journal = journal();
    app.register(Arc::new(FakeHost::new(PlatformId::Editor, &journal)));

    assert_eq!(app.initialize().await, InitializationStatus::Initialized);
    assert_eq!(app.initialize().await, InitializationStatus::Initialized);

    assert_eq!(*journal.lock().unwrap(), vec!["editor:initialize"]);
    assert_eq!(events.drain().len(), 1);
}

#[tokio::test]
async fn test_failing_adapter_skips_the_rest() {
    let (app, _bus) = app();
    let mut events = app.subscribe();
    let journal = journal();

    let mut broken = FakeHost::new(PlatformId::YaGames, &journal);
    broken.fail_initialize = true;
    app.register(Arc::new(FakeHost::new(PlatformId::Editor, &journal)));
    app.register(Arc::new(broken));
    app.register(Arc::new(FakeHost::new(PlatformId::VkPlay, &journal)));

    assert_eq!(app.initialize().await, InitializationStatus::Error);
    assert_eq!(
        *journal.lock().unwrap(),
        vec!["editor:initialize", "yagames:initialize"]
    );
    assert_eq!(
        events.drain(),
        vec![SdkEvent::Lifecycle(LifecycleEvent::InitializeError {
            domain: core_runtime::Domain::App,
            platform: Some(PlatformId::YaGames),
            status: InitializationStatus::Error,
        })]
    );
}

#[tokio::test]
async fn test_ready_bootstraps_initialization() {
    let (app, _) = app();
    let journal = journal();
    app.register(Arc::new(FakeHost::new(PlatformId::Editor, &journal)));

    assert!(app.ready().await);
    assert!(app.is_initialized());
    assert!(app.is_ready());
    assert_eq!(
        *journal.lock().unwrap(),
        vec!["editor:initialize", "editor:ready"]
    );

    // Already ready: no further adapter calls.
    assert!(app.ready().await);
    assert_eq!(journal.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_ready_requires_every_adapter() {
    let (app, _) = app();
    let journal = journal();
    let mut stubborn = FakeHost::new(PlatformId::Editor, &journal);
    stubborn.acknowledges_ready = false;
    app.register(Arc::new(stubborn));
    app.register(Arc::new(FakeHost::new(PlatformId::YaGames, &journal)));

    assert!(!app.ready().await);
    assert!(app.is_initialized());
    assert!(!app.is_ready());
    assert!(!journal.lock().unwrap().contains(&"yagames:ready".to_string()));
}

#[tokio::test]
async fn test_ready_never_set_when_initialization_fails() {
    let (app, _) = app();
    let journal = journal();
    let mut broken = FakeHost::new(PlatformId::Editor, &journal);
    broken.fail_initialize = true;
    app.register(Arc::new(broken));

    assert!(!app.ready().await);
    assert!(!app.is_ready());
    assert_eq!(app.status(), InitializationStatus::Error);
}

#[tokio::test]
async fn test_gameplay_markers() {
    let (app, bus) = app();
    let mut events = bus.subscribe();
    let journal = journal();
    app.register(Arc::new(FakeHost::new(PlatformId::Editor, &journal)));

    assert!(app.start().await.is_success());
    assert!(app.is_started());
    // Repeated start reaches the host but does not re-announce.
    assert!(app.start().await.is_success());
    assert!(app.stop().await.is_success());
    assert!(!app.is_started());

    let game_events: Vec<_> = events
        .drain()
        .into_iter()
        .filter(|event| matches!(event, SdkEvent::Game(_)))
        .collect();
    assert_eq!(
        game_events,
        vec![SdkEvent::Game(GameEvent::Started), SdkEvent::Game(GameEvent::Stopped)]
    );
}
