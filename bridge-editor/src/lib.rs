//! # Editor Bridge Implementations
//!
//! Synthetic adapters for every domain, registered under
//! [`PlatformId::Editor`](bridge_traits::PlatformId).
//!
//! ## Overview
//!
//! Without a native host the SDK still has to run end to end: during local
//! development, in tests, and in headless builds. Every adapter here issues
//! its calls through [`bridge_traits::synthetic`], so the callback bridge and
//! the facade orchestration above it behave exactly as with a real host,
//! while the answers are deterministic:
//!
//! - `EditorApp`: app id `"-1"`, language `"en"`, desktop device
//! - `EditorAuth`: guest session upgraded to an account on `sign_in`
//! - `EditorLeaderboard`: one fixed player, scores kept in memory
//! - `EditorPurchases`: catalog `test_pack_1` / `test_pack_2`, tokens `<id>_token`
//! - `EditorStorage`: in-memory key/value map
//! - `EditorFeedback`: reviews always possible
//! - `EditorRemoteConfigs`: values supplied by the game as local defaults
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_editor::editor_adapters;
//! use core_service::GameSdk;
//!
//! let sdk = GameSdk::builder().adapters(editor_adapters()).build()?;
//! ```

mod app;
mod auth;
mod feedback;
mod leaderboard;
mod purchases;
mod remote_config;
mod storage;

use std::sync::Arc;

pub use app::EditorApp;
pub use auth::EditorAuth;
pub use feedback::EditorFeedback;
pub use leaderboard::EditorLeaderboard;
pub use purchases::EditorPurchases;
pub use remote_config::EditorRemoteConfigs;
pub use storage::EditorStorage;

/// One editor adapter per domain.
#[derive(Clone)]
pub struct EditorAdapters {
    pub app: Arc<EditorApp>,
    pub auth: Arc<EditorAuth>,
    pub leaderboard: Arc<EditorLeaderboard>,
    pub purchases: Arc<EditorPurchases>,
    pub storage: Arc<EditorStorage>,
    pub feedback: Arc<EditorFeedback>,
    pub remote_configs: Arc<EditorRemoteConfigs>,
}

impl EditorAdapters {
    /// Use `remote_configs` instead of an empty remote config table.
    pub fn with_remote_configs(mut self, remote_configs: EditorRemoteConfigs) -> Self {
        self.remote_configs = Arc::new(remote_configs);
        self
    }
}

impl std::fmt::Debug for EditorAdapters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorAdapters").finish_non_exhaustive()
    }
}

/// Fresh editor adapters with empty in-memory state.
pub fn editor_adapters() -> EditorAdapters {
    EditorAdapters {
        app: Arc::new(EditorApp::new()),
        auth: Arc::new(EditorAuth::new()),
        leaderboard: Arc::new(EditorLeaderboard::new()),
        purchases: Arc::new(EditorPurchases::new()),
        storage: Arc::new(EditorStorage::new()),
        feedback: Arc::new(EditorFeedback),
        remote_configs: Arc::new(EditorRemoteConfigs::default()),
    }
}
