//! Game storage capability.
//!
//! Key/value save data kept by the platform (cloud saves, local prefs). How
//! a backend persists values is its own business; the facade only routes
//! reads and writes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::PlatformService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StorageStatus {
    #[default]
    None,
    Waiting,
    Success,
    Error,
}

impl StorageStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, StorageStatus::Success)
    }
}

/// Key/value storage backend
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::{StorageApp, StorageStatus};
///
/// async fn save_level(store: &dyn StorageApp) -> Result<()> {
///     if store.save("level", "12").await? != StorageStatus::Success {
///         tracing::warn!("level not saved");
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait StorageApp: PlatformService {
    async fn save(&self, key: &str, value: &str) -> Result<StorageStatus>;

    /// `(Success, None)` means the key is known to be absent.
    async fn load(&self, key: &str) -> Result<(StorageStatus, Option<String>)>;
}
