//! Portal environment and gameplay markers.

use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{bridge, CoreApp, DeviceType, InitializationStatus, PlatformId, PlatformService};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::decode;
use crate::host::YaGamesHost;
use crate::reported;
use crate::types::YaEnvironment;

pub struct YaGamesApp {
    host: Arc<dyn YaGamesHost>,
    status: Mutex<InitializationStatus>,
    environment: Mutex<YaEnvironment>,
    ready: AtomicBool,
}

impl YaGamesApp {
    pub fn new(host: Arc<dyn YaGamesHost>) -> Self {
        Self {
            host,
            status: Mutex::new(InitializationStatus::None),
            environment: Mutex::new(YaEnvironment::default()),
            ready: AtomicBool::new(false),
        }
    }

    fn is_initialized(&self) -> bool {
        *self.status.lock() == InitializationStatus::Initialized
    }
}

#[async_trait]
impl PlatformService for YaGamesApp {
    fn platform(&self) -> PlatformId {
        PlatformId::YaGames
    }

    fn initialization_status(&self) -> InitializationStatus {
        *self.status.lock()
    }

    async fn initialize(&self) -> Result<()> {
        if matches!(
            self.initialization_status(),
            InitializationStatus::Initialized | InitializationStatus::Waiting
        ) {
            return Ok(());
        }
        *self.status.lock() = InitializationStatus::Waiting;

        let call = bridge("app.initialize", |done| self.host.initialize(done));
        let completed = match reported("app.initialize", call.await) {
            Ok(completed) => completed,
            Err(err) => {
                *self.status.lock() = InitializationStatus::Error;
                return Err(err);
            }
        };
        if completed.is_none() {
            *self.status.lock() = InitializationStatus::Error;
            return Ok(());
        }

        match decode::<YaEnvironment>("environment", &self.host.environment()) {
            Ok(environment) => {
                info!(app_id = %environment.app.id, lang = %environment.i18n.lang, "Portal SDK initialized");
                *self.environment.lock() = environment;
                *self.status.lock() = InitializationStatus::Initialized;
                Ok(())
            }
            Err(err) => {
                *self.status.lock() = InitializationStatus::Error;
                Err(err.into())
            }
        }
    }
}

#[async_trait]
impl CoreApp for YaGamesApp {
    fn device_type(&self) -> DeviceType {
        if !self.is_initialized() {
            debug!("Device type requested before initialization");
            return DeviceType::Undefined;
        }
        DeviceType::from_host_name(&self.host.device_type())
    }

    fn app_id(&self) -> String {
        self.environment.lock().app.id.clone()
    }

    fn lang(&self) -> String {
        self.environment.lock().i18n.lang.clone()
    }

    fn payload(&self) -> String {
        self.environment.lock().payload.clone().unwrap_or_default()
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    async fn ready(&self) -> Result<()> {
        if self.is_ready() {
            return Ok(());
        }
        let call = bridge("app.ready", |done| self.host.ready(done));
        if reported("app.ready", call.await)?.is_some() {
            self.ready.store(true, Ordering::Release);
        }
        Ok(())
    }

    async fn start(&self) -> Result<bool> {
        let call = bridge("app.start", |done| self.host.gameplay_start(done));
        Ok(reported("app.start", call.await)?.is_some())
    }

    async fn stop(&self) -> Result<bool> {
        let call = bridge("app.stop", |done| self.host.gameplay_stop(done));
        Ok(reported("app.stop", call.await)?.is_some())
    }
}
