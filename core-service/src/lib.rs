//! # GameSDK Service
//!
//! Wires every domain facade onto one event bus and hands adapters from
//! each supplier to the facades in supply order.
//!
//! ```ignore
//! use core_service::{AdapterSet, GameSdk};
//!
//! let sdk = GameSdk::builder()
//!     .adapters(bridge_editor::editor_adapters())
//!     .build()?;
//!
//! sdk.initialize().await?;
//! sdk.leaderboard().set_score("best_time", 42).await;
//! ```

pub mod adapters;
pub mod error;

pub use adapters::AdapterSet;
pub use error::{Result, SdkError};

use bridge_traits::InitializationStatus;
use core_app::GameApp;
use core_auth::{Auth, SessionRequirement};
use core_feedback::Feedback;
use core_leaderboard::Leaderboard;
use core_purchases::Purchases;
use core_remote_config::RemoteConfigs;
use core_runtime::bootstrap::Prerequisite;
use core_runtime::config::SdkConfig;
use core_runtime::events::{EventBus, EventStream};
use core_runtime::logging::init_logging;
use core_storage::GameStorage;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// All facades of one game session.
pub struct GameSdk {
    config: SdkConfig,
    events: EventBus,
    app: Arc<GameApp>,
    auth: Arc<Auth>,
    leaderboard: Arc<Leaderboard>,
    purchases: Arc<Purchases>,
    storage: Arc<GameStorage>,
    feedback: Arc<Feedback>,
    remote_configs: Arc<RemoteConfigs>,
}

impl GameSdk {
    pub fn builder() -> GameSdkBuilder {
        GameSdkBuilder::default()
    }

    fn assemble(config: SdkConfig) -> Self {
        let events = EventBus::new(config.event_buffer_size);

        let app = Arc::new(GameApp::new(events.clone(), config.defaults.clone()));
        let app_gate: Arc<dyn Prerequisite> = app.clone();

        let auth = Arc::new(Auth::new(events.clone(), Arc::clone(&app_gate)));
        let account: Arc<dyn Prerequisite> = Arc::new(SessionRequirement::account(auth.clone()));

        Self {
            leaderboard: Arc::new(Leaderboard::new(
                events.clone(),
                Arc::clone(&app_gate),
                Arc::clone(&account),
            )),
            purchases: Arc::new(Purchases::new(events.clone(), Arc::clone(&app_gate))),
            storage: Arc::new(GameStorage::new(events.clone(), Arc::clone(&app_gate))),
            feedback: Arc::new(Feedback::new(events.clone(), Arc::clone(&app_gate), account)),
            remote_configs: Arc::new(RemoteConfigs::new(events.clone(), app_gate)),
            config,
            events,
            app,
            auth,
        }
    }

    /// Hand one supplier's adapters to the facades. Returns how many were
    /// accepted; duplicates of an already registered platform are skipped.
    pub fn register(&self, set: AdapterSet) -> usize {
        let offered = set.len();
        let mut accepted = 0;

        accepted += set.app.into_iter().filter(|a| self.app.register(Arc::clone(a))).count();
        accepted += set.auth.into_iter().filter(|a| self.auth.register(Arc::clone(a))).count();
        accepted += set
            .leaderboard
            .into_iter()
            .filter(|a| self.leaderboard.register(Arc::clone(a)))
            .count();
        accepted += set
            .purchases
            .into_iter()
            .filter(|a| self.purchases.register(Arc::clone(a)))
            .count();
        accepted += set
            .storage
            .into_iter()
            .filter(|a| self.storage.register(Arc::clone(a)))
            .count();
        accepted += set
            .feedback
            .into_iter()
            .filter(|a| self.feedback.register(Arc::clone(a)))
            .count();
        accepted += set
            .remote_configs
            .into_iter()
            .filter(|a| self.remote_configs.register(Arc::clone(a)))
            .count();

        if accepted < offered {
            warn!(offered, accepted, "Some adapters were already registered");
        }
        debug!(accepted, "Adapters registered");
        accepted
    }

    /// Initialize the app facade, then every domain facade.
    ///
    /// Only an app failure is an error; a domain that fails to initialize
    /// reports through its own status and events.
    pub async fn initialize(&self) -> Result<()> {
        let status = self.app.initialize().await;
        if status != InitializationStatus::Initialized {
            return Err(SdkError::InitializationFailed(format!(
                "app facade finished with status {status}"
            )));
        }

        let auth = self.auth.initialize().await;
        let leaderboard = self.leaderboard.initialize().await;
        let purchases = self.purchases.initialize().await;
        let storage = self.storage.initialize().await;
        let feedback = self.feedback.initialize().await;
        let remote_configs = self.remote_configs.initialize().await;

        info!(
            %auth,
            %leaderboard,
            %purchases,
            %storage,
            %feedback,
            %remote_configs,
            "GameSDK initialized"
        );
        Ok(())
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self) -> EventStream {
        self.events.subscribe()
    }

    pub fn app(&self) -> Arc<GameApp> {
        Arc::clone(&self.app)
    }

    pub fn auth(&self) -> Arc<Auth> {
        Arc::clone(&self.auth)
    }

    pub fn leaderboard(&self) -> Arc<Leaderboard> {
        Arc::clone(&self.leaderboard)
    }

    pub fn purchases(&self) -> Arc<Purchases> {
        Arc::clone(&self.purchases)
    }

    pub fn storage(&self) -> Arc<GameStorage> {
        Arc::clone(&self.storage)
    }

    pub fn feedback(&self) -> Arc<Feedback> {
        Arc::clone(&self.feedback)
    }

    pub fn remote_configs(&self) -> Arc<RemoteConfigs> {
        Arc::clone(&self.remote_configs)
    }
}

#[derive(Default)]
pub struct GameSdkBuilder {
    config: Option<SdkConfig>,
    suppliers: Vec<AdapterSet>,
    install_logging: bool,
}

impl GameSdkBuilder {
    pub fn config(mut self, config: SdkConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Suppliers are registered in the order they are added; earlier
    /// adapters win queries that take the first answer.
    pub fn adapters(mut self, set: impl Into<AdapterSet>) -> Self {
        self.suppliers.push(set.into());
        self
    }

    /// Install the global tracing subscriber from the config's logging section.
    pub fn with_logging(mut self) -> Self {
        self.install_logging = true;
        self
    }

    pub fn build(self) -> Result<GameSdk> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        if self.install_logging {
            init_logging(config.logging.clone())?;
        }

        let sdk = GameSdk::assemble(config);
        for set in self.suppliers {
            sdk.register(set);
        }

        info!(
            debug_mode = sdk.config.debug_mode,
            app = ?sdk.app.platforms(),
            "GameSDK assembled"
        );
        Ok(sdk)
    }
}
