//! Core app capability: environment queries and the game lifecycle markers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::PlatformService;

/// Device class reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    #[default]
    Undefined,
    Mobile,
    Tablet,
    Desktop,
    Console,
    Tv,
}

impl DeviceType {
    /// Parse the lowercase names web hosts use (`"mobile"`, `"tv"`, ...).
    pub fn from_host_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "mobile" => DeviceType::Mobile,
            "tablet" => DeviceType::Tablet,
            "desktop" => DeviceType::Desktop,
            "console" => DeviceType::Console,
            "tv" => DeviceType::Tv,
            _ => DeviceType::Undefined,
        }
    }
}

/// Adapter contract for the core app facade.
///
/// Accessors are synchronous reads of what the adapter learned during
/// `initialize`; they must not block.
#[async_trait]
pub trait CoreApp: PlatformService {
    fn device_type(&self) -> DeviceType;

    fn app_id(&self) -> String;

    fn lang(&self) -> String;

    /// Launch payload passed to the game by the host (deep link data).
    fn payload(&self) -> String;

    /// Whether the last `ready` call was acknowledged by the host.
    fn is_ready(&self) -> bool;

    /// Tell the host the game finished loading.
    async fn ready(&self) -> Result<()>;

    /// Gameplay started (player is actively playing).
    ///
    /// Returns `false` when the host declined the marker.
    async fn start(&self) -> Result<bool>;

    /// Gameplay paused or stopped.
    async fn stop(&self) -> Result<bool>;
}
