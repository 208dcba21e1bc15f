//! Adapter bundles handed to [`GameSdkBuilder::adapters`](crate::GameSdkBuilder::adapters).

use bridge_traits::{
    AuthApp, CoreApp, FeedbackApp, LeaderboardApp, PurchasesApp, RemoteConfigsApp, StorageApp,
};
use std::sync::Arc;

/// Adapters of one supplier, grouped by domain.
///
/// A supplier leaves the domains it does not cover empty.
#[derive(Clone, Default)]
pub struct AdapterSet {
    pub app: Vec<Arc<dyn CoreApp>>,
    pub auth: Vec<Arc<dyn AuthApp>>,
    pub leaderboard: Vec<Arc<dyn LeaderboardApp>>,
    pub purchases: Vec<Arc<dyn PurchasesApp>>,
    pub storage: Vec<Arc<dyn StorageApp>>,
    pub feedback: Vec<Arc<dyn FeedbackApp>>,
    pub remote_configs: Vec<Arc<dyn RemoteConfigsApp>>,
}

impl AdapterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(mut self, adapter: Arc<dyn CoreApp>) -> Self {
        self.app.push(adapter);
        self
    }

    pub fn with_auth(mut self, adapter: Arc<dyn AuthApp>) -> Self {
        self.auth.push(adapter);
        self
    }

    pub fn with_leaderboard(mut self, adapter: Arc<dyn LeaderboardApp>) -> Self {
        self.leaderboard.push(adapter);
        self
    }

    pub fn with_purchases(mut self, adapter: Arc<dyn PurchasesApp>) -> Self {
        self.purchases.push(adapter);
        self
    }

    pub fn with_storage(mut self, adapter: Arc<dyn StorageApp>) -> Self {
        self.storage.push(adapter);
        self
    }

    pub fn with_feedback(mut self, adapter: Arc<dyn FeedbackApp>) -> Self {
        self.feedback.push(adapter);
        self
    }

    pub fn with_remote_configs(mut self, adapter: Arc<dyn RemoteConfigsApp>) -> Self {
        self.remote_configs.push(adapter);
        self
    }

    pub fn len(&self) -> usize {
        self.app.len()
            + self.auth.len()
            + self.leaderboard.len()
            + self.purchases.len()
            + self.storage.len()
            + self.feedback.len()
            + self.remote_configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for AdapterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterSet")
            .field("app", &self.app.len())
            .field("auth", &self.auth.len())
            .field("leaderboard", &self.leaderboard.len())
            .field("purchases", &self.purchases.len())
            .field("storage", &self.storage.len())
            .field("feedback", &self.feedback.len())
            .field("remote_configs", &self.remote_configs.len())
            .finish()
    }
}

#[cfg(feature = "editor-shims")]
impl From<bridge_editor::EditorAdapters> for AdapterSet {
    fn from(set: bridge_editor::EditorAdapters) -> Self {
        Self {
            app: vec![set.app as Arc<dyn CoreApp>],
            auth: vec![set.auth as Arc<dyn AuthApp>],
            leaderboard: vec![set.leaderboard as Arc<dyn LeaderboardApp>],
            purchases: vec![set.purchases as Arc<dyn PurchasesApp>],
            storage: vec![set.storage as Arc<dyn StorageApp>],
            feedback: vec![set.feedback as Arc<dyn FeedbackApp>],
            remote_configs: vec![set.remote_configs as Arc<dyn RemoteConfigsApp>],
        }
    }
}

#[cfg(feature = "yagames")]
impl From<provider_yagames::YaGamesAdapters> for AdapterSet {
    fn from(set: provider_yagames::YaGamesAdapters) -> Self {
        Self {
            app: vec![set.app as Arc<dyn CoreApp>],
            auth: vec![set.auth as Arc<dyn AuthApp>],
            leaderboard: vec![set.leaderboard as Arc<dyn LeaderboardApp>],
            purchases: vec![set.purchases as Arc<dyn PurchasesApp>],
            feedback: vec![set.feedback as Arc<dyn FeedbackApp>],
            ..Self::default()
        }
    }
}
