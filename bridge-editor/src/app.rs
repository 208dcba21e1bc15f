//! Editor environment

use async_trait::async_trait;
use bridge_traits::{
    error::Result, synthetic, CoreApp, DeviceType, InitializationStatus, PlatformId,
    PlatformService,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

pub const EDITOR_APP_ID: &str = "-1";
pub const EDITOR_LANG: &str = "en";

/// Environment a desktop editor session reports.
pub struct EditorApp {
    status: Mutex<InitializationStatus>,
    ready: AtomicBool,
    payload: Mutex<String>,
}

impl EditorApp {
    pub fn new() -> Self {
        Self {
            status: Mutex::new(InitializationStatus::None),
            ready: AtomicBool::new(false),
            payload: Mutex::new(String::new()),
        }
    }

    /// Simulate a launch payload (deep link data).
    pub fn with_payload(self, payload: impl Into<String>) -> Self {
        *self.payload.lock() = payload.into();
        self
    }
}

impl Default for EditorApp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformService for EditorApp {
    fn platform(&self) -> PlatformId {
        PlatformId::Editor
    }

    fn initialization_status(&self) -> InitializationStatus {
        *self.status.lock()
    }

    async fn initialize(&self) -> Result<()> {
        *self.status.lock() = InitializationStatus::Waiting;
        synthetic("app.initialize", ()).await?;
        *self.status.lock() = InitializationStatus::Initialized;
        debug!("Editor app initialized");
        Ok(())
    }
}

#[async_trait]
impl CoreApp for EditorApp {
    fn device_type(&self) -> DeviceType {
        DeviceType::Desktop
    }

    fn app_id(&self) -> String {
        EDITOR_APP_ID.to_string()
    }

    fn lang(&self) -> String {
        EDITOR_LANG.to_string()
    }

    fn payload(&self) -> String {
        self.payload.lock().clone()
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    async fn ready(&self) -> Result<()> {
        synthetic("app.ready", ()).await?;
        self.ready.store(true, Ordering::Release);
        Ok(())
    }

    async fn start(&self) -> Result<bool> {
        synthetic("app.start", true).await
    }

    async fn stop(&self) -> Result<bool> {
        synthetic("app.stop", true).await
    }
}
