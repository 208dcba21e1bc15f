use async_trait::async_trait;
use bridge_traits::{CoreApp, DeviceType, InitializationStatus, PlatformId};
use core_runtime::bootstrap::Prerequisite;
use core_runtime::config::QueryDefaults;
use core_runtime::events::{Domain, EventBus, EventStream, GameEvent, SdkEvent};
use core_runtime::facade::Facade;
use core_runtime::orchestrate::{all_required, submit_each, PassOutcome, Step, SubmitOutcome};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Core app facade.
///
/// Every other facade bootstraps through this one: it must be initialized
/// before any domain facade initializes its own adapters.
pub struct GameApp {
    facade: Facade<dyn CoreApp>,
    defaults: QueryDefaults,
    started: AtomicBool,
}

impl GameApp {
    pub fn new(events: EventBus, defaults: QueryDefaults) -> Self {
        Self {
            facade: Facade::new(Domain::App, events),
            defaults,
            started: AtomicBool::new(false),
        }
    }

    pub fn register(&self, adapter: Arc<dyn CoreApp>) -> bool {
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

    pub fn is_ready(&self) -> bool {
        self.facade.lifecycle().is_ready()
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    pub fn device_type(&self) -> DeviceType {
        self.facade
            .primary()
            .map(|adapter| adapter.device_type())
            .unwrap_or(self.defaults.device_type)
    }

    pub fn lang(&self) -> String {
        self.facade
            .primary()
            .map(|adapter| adapter.lang())
            .unwrap_or_else(|| self.defaults.lang.clone())
    }

    pub fn app_id(&self) -> String {
        self.facade
            .primary()
            .map(|adapter| adapter.app_id())
            .unwrap_or_else(|| self.defaults.app_id.clone())
    }

    pub fn payload(&self) -> String {
        self.facade
            .primary()
            .map(|adapter| adapter.payload())
            .unwrap_or_else(|| self.defaults.payload.clone())
    }

    /// Initialize every registered adapter. Idempotent.
    pub async fn initialize(&self) -> InitializationStatus {
        self.facade.initialize_adapters().await
    }

    /// Tell every host the game finished loading.
    ///
    /// Initializes first when needed. Returns whether the ready flag is set
    /// afterwards.
    pub async fn ready(&self) -> bool {
        if self.is_ready() {
            debug!(facade = %Domain::App, "SDK has already been ready");
            return true;
        }

        if !self.facade.ensure_initialized("game ready").await {
            return false;
        }

        let outcome = all_required(Domain::App, "game ready", &self.facade.adapters(), |adapter| {
            async move {
                adapter.ready().await.map(|()| {
                    if adapter.is_ready() {
                        Step::Proceed
                    } else {
                        Step::Halt(())
                    }
                })
            }
        })
        .await;

        match outcome {
            PassOutcome::Completed => self.facade.lifecycle().mark_ready(),
            PassOutcome::Halted { .. } | PassOutcome::Aborted { .. } => {
                self.facade.lifecycle().clear_ready();
                false
            }
        }
    }

    /// Gameplay started marker.
    pub async fn start(&self) -> SubmitOutcome {
        self.mark_gameplay(true).await
    }

    /// Gameplay stopped marker.
    pub async fn stop(&self) -> SubmitOutcome {
        self.mark_gameplay(false).await
    }

    async fn mark_gameplay(&self, start: bool) -> SubmitOutcome {
        let operation = if start { "start" } else { "stop" };

        if !self.facade.ensure_initialized(operation).await {
            return SubmitOutcome::skipped();
        }

        let outcome = submit_each(Domain::App, operation, &self.facade.adapters(), |adapter| {
            async move {
                if start {
                    adapter.start().await
                } else {
                    adapter.stop().await
                }
            }
        })
        .await;

        if outcome.aborted.is_some() {
            warn!(facade = %Domain::App, operation, "Gameplay marker aborted");
            return outcome;
        }

        if self.started.swap(start, Ordering::AcqRel) != start {
            info!(facade = %Domain::App, operation, "Gameplay marker sent");
            let event = if start {
                GameEvent::Started
            } else {
                GameEvent::Stopped
            };
            self.facade.events().emit(SdkEvent::Game(event));
        }
        outcome
    }
}

#[async_trait]
impl Prerequisite for GameApp {
    fn describe(&self) -> &'static str {
        "core app initialization"
    }

    fn is_satisfied(&self) -> bool {
        self.is_initialized()
    }

    async fn satisfy(&self) {
        self.initialize().await;
    }
}

impl std::fmt::Debug for GameApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameApp")
            .field("facade", &self.facade)
            .field("started", &self.is_started())
            .finish()
    }
}
