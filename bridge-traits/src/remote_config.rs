//! Remote configuration capability (feature flags and tuning values).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;
use crate::platform::PlatformService;

/// Where a config value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigValueSource {
    /// Baked-in default shipped with the game.
    #[default]
    Default,
    /// Value fetched from the backend.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfigValue {
    pub key: String,
    pub value: String,
    pub source: ConfigValueSource,
}

impl RemoteConfigValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>, source: ConfigValueSource) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            source,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Accepts `true`/`false` and `1`/`0`.
    pub fn as_bool(&self) -> Option<bool> {
        match self.value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.trim().parse().ok()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }
}

#[async_trait]
pub trait RemoteConfigsApp: PlatformService {
    /// Values fetched by the last successful initialization.
    fn remote_values(&self) -> HashMap<String, RemoteConfigValue>;

    /// Initialize with targeting parameters (player segment, build flavor).
    async fn initialize_with_user_parameters(&self, parameters: &[(String, String)])
        -> Result<()>;
}
