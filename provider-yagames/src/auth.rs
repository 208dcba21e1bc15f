use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{bridge, AuthApp, PlatformId, PlatformService, SignInType};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::decode;
use crate::host::YaGamesHost;
use crate::reported;
use crate::types::YaPlayer;

/// Portal player session. `lite` players are guests.
pub struct YaGamesAuth {
    host: Arc<dyn YaGamesHost>,
    level: Mutex<SignInType>,
}

impl YaGamesAuth {
    pub fn new(host: Arc<dyn YaGamesHost>) -> Self {
        Self {
            host,
            level: Mutex::new(SignInType::None),
        }
    }

    /// Fetch the player and raise the session level to what the host reports.
    async fn refresh_player(&self, scopes: bool) -> Result<()> {
        let call = bridge("auth.player", |done| self.host.get_player(scopes, done));
        let Some(json) = reported("auth.player", call.await)? else {
            return Ok(());
        };
        let reported_level = decode::<YaPlayer>("player", &json)?.sign_in_type();

        let mut level = self.level.lock();
        if reported_level > *level {
            *level = reported_level;
        }
        let session = *level;
        debug!(%session, "Player session refreshed");
        Ok(())
    }
}

impl PlatformService for YaGamesAuth {
    fn platform(&self) -> PlatformId {
        PlatformId::YaGames
    }
}

#[async_trait]
impl AuthApp for YaGamesAuth {
    fn sign_in_type(&self) -> SignInType {
        *self.level.lock()
    }

    async fn sign_in(&self) -> Result<()> {
        if self.sign_in_type() == SignInType::Account {
            return Ok(());
        }

        let dialog = bridge("auth.dialog", |done| self.host.open_auth_dialog(done));
        if reported("auth.dialog", dialog.await)?.is_none() {
            info!("Player closed the login dialog");
            return Ok(());
        }
        self.refresh_player(true).await
    }

    async fn sign_in_guest(&self) -> Result<()> {
        if self.sign_in_type() != SignInType::None {
            return Ok(());
        }
        self.refresh_player(false).await
    }
}
