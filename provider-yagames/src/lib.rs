//! # Web Games Host Provider
//!
//! Adapters for a games portal that exposes its SDK through
//! completion-callback functions (the [`YaGamesHost`] contract).
//!
//! ## Overview
//!
//! Each adapter issues host calls through [`bridge_traits::bridge`] and
//! awaits the single completion:
//! - a host `fail` completion is a reported failure and becomes the
//!   domain's non-success status
//! - a dropped completion handle or an undecodable JSON payload is a fault
//!   (`Err`) and aborts the facade pass
//!
//! Covered domains: core app, auth, leaderboard, purchases and feedback.

pub mod app;
pub mod auth;
pub mod error;
pub mod feedback;
pub mod host;
pub mod leaderboard;
pub mod purchases;
pub mod types;

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::PlatformId;
use std::sync::Arc;
use tracing::warn;

pub use app::YaGamesApp;
pub use auth::YaGamesAuth;
pub use error::YaGamesError;
pub use feedback::YaGamesFeedback;
pub use host::YaGamesHost;
pub use leaderboard::YaGamesLeaderboard;
pub use purchases::YaGamesPurchases;

/// One adapter per supported domain, all sharing the same host.
#[derive(Clone)]
pub struct YaGamesAdapters {
    pub app: Arc<YaGamesApp>,
    pub auth: Arc<YaGamesAuth>,
    pub leaderboard: Arc<YaGamesLeaderboard>,
    pub purchases: Arc<YaGamesPurchases>,
    pub feedback: Arc<YaGamesFeedback>,
}

impl YaGamesAdapters {
    pub fn new(host: Arc<dyn YaGamesHost>) -> Self {
        let app = Arc::new(YaGamesApp::new(Arc::clone(&host)));
        Self {
            auth: Arc::new(YaGamesAuth::new(Arc::clone(&host))),
            leaderboard: Arc::new(YaGamesLeaderboard::new(Arc::clone(&host), Arc::clone(&app))),
            purchases: Arc::new(YaGamesPurchases::new(Arc::clone(&host))),
            feedback: Arc::new(YaGamesFeedback::new(host)),
            app,
        }
    }
}

impl std::fmt::Debug for YaGamesAdapters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YaGamesAdapters").finish_non_exhaustive()
    }
}

/// Split a bridged result into reported failure (`Ok(None)`) and fault.
pub(crate) fn reported<T>(operation: &'static str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(BridgeError::Rejected(reason)) => {
            warn!(platform = %PlatformId::YaGames, operation, %reason, "Host reported failure");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
