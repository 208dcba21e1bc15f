use async_trait::async_trait;
use bridge_traits::{
    error::Result, synthetic, ConfigValueSource, InitializationStatus, PlatformId,
    PlatformService, RemoteConfigValue, RemoteConfigsApp,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

/// Remote config backed by the game's own defaults.
///
/// Values become visible once initialized and are reported with
/// [`ConfigValueSource::Default`].
#[derive(Default)]
pub struct EditorRemoteConfigs {
    defaults: HashMap<String, String>,
    status: Mutex<InitializationStatus>,
}

impl EditorRemoteConfigs {
    pub fn with_defaults<I, K, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            defaults: defaults
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            status: Mutex::new(InitializationStatus::None),
        }
    }
}

#[async_trait]
impl PlatformService for EditorRemoteConfigs {
    fn platform(&self) -> PlatformId {
        PlatformId::Editor
    }

    fn initialization_status(&self) -> InitializationStatus {
        *self.status.lock()
    }

    async fn initialize(&self) -> Result<()> {
        self.initialize_with_user_parameters(&[]).await
    }
}

#[async_trait]
impl RemoteConfigsApp for EditorRemoteConfigs {
    fn remote_values(&self) -> HashMap<String, RemoteConfigValue> {
        if *self.status.lock() != InitializationStatus::Initialized {
            return HashMap::new();
        }
        self.defaults
            .iter()
            .map(|(key, value)| {
                (
                    key.clone(),
                    RemoteConfigValue::new(key.as_str(), value.as_str(), ConfigValueSource::Default),
                )
            })
            .collect()
    }

    async fn initialize_with_user_parameters(
        &self,
        parameters: &[(String, String)],
    ) -> Result<()> {
        *self.status.lock() = InitializationStatus::Waiting;
        synthetic("remote_config.initialize", ()).await?;
        debug!(
            parameters = parameters.len(),
            values = self.defaults.len(),
            "Editor remote config initialized"
        );
        *self.status.lock() = InitializationStatus::Initialized;
        Ok(())
    }
}
