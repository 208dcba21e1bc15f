use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{AuthApp, BridgeError, InitializationStatus, PlatformId, PlatformService, SignInType};
use core_app::GameApp;
use core_auth::{Auth, SessionRequirement};
use core_runtime::bootstrap::{ensure, Prerequisite};
use core_runtime::config::QueryDefaults;
use core_runtime::events::{AuthEvent, Domain, EventBus, EventStream, SdkEvent};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Host whose account login either works or is refused by the player.
struct FakeLogin {
    platform: PlatformId,
    level: Mutex<SignInType>,
    account_available: bool,
    faults: bool,
    sign_in_calls: AtomicUsize,
}

impl FakeLogin {
    fn new(platform: PlatformId, level: SignInType, account_available: bool) -> Self {
        Self {
            platform,
            level: Mutex::new(level),
            account_available,
            faults: false,
            sign_in_calls: AtomicUsize::new(0),
        }
    }
}

impl PlatformService for FakeLogin {
    fn platform(&self) -> PlatformId {
        self.platform
    }
}

#[async_trait]
impl AuthApp for FakeLogin {
    fn sign_in_type(&self) -> SignInType {
        *self.level.lock().unwrap()
    }

    async fn sign_in(&self) -> Result<()> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        if self.faults {
            return Err(BridgeError::CallbackDropped);
        }
        if self.account_available {
            *self.level.lock().unwrap() = SignInType::Account;
        }
        Ok(())
    }

    async fn sign_in_guest(&self) -> Result<()> {
        let mut level = self.level.lock().unwrap();
        if *level == SignInType::None {
            *level = SignInType::Guest;
        }
        Ok(())
    }
}

fn auth() -> (Arc<Auth>, Arc<GameApp>, EventBus) {
    let bus = EventBus::new(32);
    let app = Arc::new(GameApp::new(bus.clone(), QueryDefaults::default()));
    let auth = Arc::new(Auth::new(bus.clone(), app.clone()));
    (auth, app, bus)
}

#[test]
fn test_empty_registry_has_no_session() {
    let (auth, _, _) = auth();
    assert_eq!(auth.sign_in_type(), SignInType::None);
    assert!(!auth.is_authorized());
}

#[tokio::test]
async fn test_sign_in_bootstraps_app_and_auth() {
    let (auth, app, bus) = auth();
    let mut events = bus.subscribe_domain(Domain::Auth);
    auth.register(Arc::new(FakeLogin::new(PlatformId::Editor, SignInType::Guest, true)));

    assert_eq!(auth.sign_in().await, SignInType::Account);
    assert!(app.is_initialized());
    assert_eq!(auth.status(), InitializationStatus::Initialized);

    let events = events.drain();
    assert!(events.contains(&SdkEvent::Auth(AuthEvent::SignedIn {
        level: SignInType::Account
    })));
}

#[tokio::test]
async fn test_guest_sign_in_does_not_elevate() {
    let (auth, _, _) = auth();
    auth.register(Arc::new(FakeLogin::new(PlatformId::Editor, SignInType::None, true)));

    assert_eq!(auth.sign_in_guest().await, SignInType::Guest);
    assert!(auth.is_authorized());
}

#[tokio::test]
async fn test_account_requirement_upgrades_once() {
    let (auth, _, _) = auth();
    let host = Arc::new(FakeLogin::new(PlatformId::YaGames, SignInType::Guest, true));
    auth.register(host.clone());

    let requirement = SessionRequirement::account(auth.clone());
    assert!(!requirement.is_satisfied());
    assert!(ensure(&requirement, Domain::Leaderboard, "set score").await);
    assert_eq!(host.sign_in_calls.load(Ordering::SeqCst), 1);

    // Already satisfied: no second sign-in.
    assert!(ensure(&requirement, Domain::Leaderboard, "set score").await);
    assert_eq!(host.sign_in_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_refused_upgrade_fails_requirement() {
    let (auth, _, _) = auth();
    let host = Arc::new(FakeLogin::new(PlatformId::YaGames, SignInType::Guest, false));
    auth.register(host.clone());

    let requirement = SessionRequirement::account(auth.clone());
    assert!(!ensure(&requirement, Domain::Leaderboard, "get player data").await);
    assert_eq!(host.sign_in_calls.load(Ordering::SeqCst), 1);
    assert_eq!(auth.sign_in_type(), SignInType::Guest);
}

#[tokio::test]
async fn test_faulting_host_emits_failure() {
    let (auth, _, bus) = auth();
    let mut events = bus.subscribe_domain(Domain::Auth);
    let mut host = FakeLogin::new(PlatformId::YaGames, SignInType::Guest, true);
    host.faults = true;
    auth.register(Arc::new(host));

    assert_eq!(auth.sign_in().await, SignInType::Guest);
    let auth_events: Vec<_> = events
        .drain()
        .into_iter()
        .filter(|event| matches!(event, SdkEvent::Auth(_)))
        .collect();
    assert_eq!(
        auth_events,
        vec![SdkEvent::Auth(AuthEvent::SignInFailed {
            platform: Some(PlatformId::YaGames)
        })]
    );
}

fn auth_events(events: &mut EventStream) -> Vec<SdkEvent> {
    events
        .drain()
        .into_iter()
        .filter(|event| matches!(event, SdkEvent::Auth(_)))
        .collect()
}

#[tokio::test]
async fn test_declined_login_reports_failure() {
    let (auth, _, bus) = auth();
    let mut events = bus.subscribe_domain(Domain::Auth);
    auth.register(Arc::new(FakeLogin::new(PlatformId::YaGames, SignInType::Guest, false)));

    assert_eq!(auth.sign_in().await, SignInType::Guest);
    assert_eq!(
        auth_events(&mut events),
        vec![SdkEvent::Auth(AuthEvent::SignInFailed {
            platform: Some(PlatformId::YaGames)
        })]
    );

    // A guest request is already met by the held session.
    assert_eq!(auth.sign_in_guest().await, SignInType::Guest);
    assert_eq!(
        auth_events(&mut events),
        vec![SdkEvent::Auth(AuthEvent::SignedIn {
            level: SignInType::Guest
        })]
    );
}

#[tokio::test]
async fn test_empty_registry_sign_in_fails() {
    let (auth, _, bus) = auth();
    let mut events = bus.subscribe_domain(Domain::Auth);

    assert_eq!(auth.sign_in_guest().await, SignInType::None);
    assert_eq!(
        auth_events(&mut events),
        vec![SdkEvent::Auth(AuthEvent::SignInFailed { platform: None })]
    );
}
