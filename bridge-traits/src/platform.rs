//! Platform identity and the lifecycle vocabulary shared by every adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Tag identifying the backend platform an adapter talks to.
///
/// A facade holds at most one adapter per identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlatformId {
    /// Synthetic in-process backend used when no native host is attached.
    Editor,
    /// Yandex Games web host.
    YaGames,
    /// VK Play web host.
    VkPlay,
    /// Google Play services.
    GooglePlay,
    /// Apple Game Center / StoreKit.
    AppStore,
}

impl PlatformId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Editor => "editor",
            PlatformId::YaGames => "yagames",
            PlatformId::VkPlay => "vkplay",
            PlatformId::GooglePlay => "google_play",
            PlatformId::AppStore => "app_store",
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of one initialization attempt.
///
/// Within an attempt the value moves `None -> Waiting -> Initialized | Error`.
/// A new attempt may only begin from `None` or `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InitializationStatus {
    #[default]
    None,
    Waiting,
    Initialized,
    Error,
}

impl InitializationStatus {
    /// Whether a fresh attempt is allowed to start from this state.
    pub fn can_begin(&self) -> bool {
        matches!(self, Self::None | Self::Error)
    }
}

impl fmt::Display for InitializationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Waiting => "waiting",
            Self::Initialized => "initialized",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Base contract every domain adapter extends.
///
/// Adapters own no facade state; they only delegate to a backend. Domains
/// without an explicit setup phase (storage, feedback) keep the defaults.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Platform this adapter is registered under.
    fn platform(&self) -> PlatformId;

    /// Status the adapter reached after its last `initialize` call.
    fn initialization_status(&self) -> InitializationStatus {
        InitializationStatus::Initialized
    }

    /// Prepare the backend. `Err` aborts the facade's initialization pass;
    /// a non-`Initialized` status afterwards halts it without an error.
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        assert!(InitializationStatus::None.can_begin());
        assert!(InitializationStatus::Error.can_begin());
        assert!(!InitializationStatus::Waiting.can_begin());
        assert!(!InitializationStatus::Initialized.can_begin());
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(PlatformId::YaGames.to_string(), "yagames");
        assert_eq!(PlatformId::Editor.as_str(), "editor");
    }
}
