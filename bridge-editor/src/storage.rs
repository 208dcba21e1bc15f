use async_trait::async_trait;
use bridge_traits::{
    error::Result, synthetic, PlatformId, PlatformService, StorageApp, StorageStatus,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Save data kept for the lifetime of the process.
pub struct EditorStorage {
    values: Mutex<HashMap<String, String>>,
}

impl EditorStorage {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for EditorStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformService for EditorStorage {
    fn platform(&self) -> PlatformId {
        PlatformId::Editor
    }
}

#[async_trait]
impl StorageApp for EditorStorage {
    async fn save(&self, key: &str, value: &str) -> Result<StorageStatus> {
        synthetic("storage.save", ()).await?;
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(StorageStatus::Success)
    }

    async fn load(&self, key: &str) -> Result<(StorageStatus, Option<String>)> {
        let value = self.values.lock().get(key).cloned();
        let value = synthetic("storage.load", value).await?;
        Ok((StorageStatus::Success, value))
    }
}
