use async_trait::async_trait;
use bridge_traits::{error::Result, synthetic, AuthApp, PlatformId, PlatformService, SignInType};
use parking_lot::Mutex;
use tracing::debug;

/// Session that starts signed out and upgrades on request.
pub struct EditorAuth {
    level: Mutex<SignInType>,
}

impl EditorAuth {
    pub fn new() -> Self {
        Self {
            level: Mutex::new(SignInType::None),
        }
    }
}

impl Default for EditorAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformService for EditorAuth {
    fn platform(&self) -> PlatformId {
        PlatformId::Editor
    }
}

#[async_trait]
impl AuthApp for EditorAuth {
    fn sign_in_type(&self) -> SignInType {
        *self.level.lock()
    }

    async fn sign_in(&self) -> Result<()> {
        let level = synthetic("auth.sign_in", SignInType::Account).await?;
        *self.level.lock() = level;
        debug!(%level, "Editor player signed in");
        Ok(())
    }

    async fn sign_in_guest(&self) -> Result<()> {
        synthetic("auth.sign_in_guest", ()).await?;
        let mut level = self.level.lock();
        if *level == SignInType::None {
            *level = SignInType::Guest;
        }
        Ok(())
    }
}
