//! # Authentication Facade
//!
//! Tracks the player's session level across every registered host and
//! upgrades it on demand.
//!
//! ## Overview
//!
//! - `sign_in_type()` answers from the first registered adapter; with no
//!   adapter the player is `SignInType::None`.
//! - `sign_in()` / `sign_in_guest()` send the request to every adapter in
//!   registration order. A host that declines is logged and skipped; a host
//!   that faults aborts the pass.
//! - Both emit an [`AuthEvent`] with the outcome.
//!
//! Initialization bootstraps the core app first.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_traits::SignInType;
//!
//! if auth.sign_in_type() != SignInType::Account {
//!     auth.sign_in().await;
//! }
//! ```

use bridge_traits::{AuthApp, InitializationStatus, PlatformId, SignInType};
use core_runtime::bootstrap::Prerequisite;
use core_runtime::events::{AuthEvent, Domain, EventBus, EventStream, SdkEvent};
use core_runtime::facade::Facade;
use core_runtime::orchestrate::submit_each;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct Auth {
    facade: Facade<dyn AuthApp>,
}

impl Auth {
    /// `app` is the core app prerequisite this facade initializes behind.
    pub fn new(events: EventBus, app: Arc<dyn Prerequisite>) -> Self {
        Self {
            facade: Facade::new(Domain::Auth, events).with_upstream(app),
        }
    }

    pub fn register(&self, adapter: Arc<dyn AuthApp>) -> bool {
        self.facade.register(adapter)
    }

    pub fn platforms(&self) -> Vec<PlatformId> {
        self.facade.registry().platforms()
    }

    pub fn subscribe(&self) -> EventStream {
        self.facade.subscribe()
    }

    pub fn status(&self) -> InitializationStatus {
        self.facade.status()
    }

    pub fn is_initialized(&self) -> bool {
        self.facade.is_initialized()
    }

    pub async fn initialize(&self) -> InitializationStatus {
        self.facade.initialize_adapters().await
    }

    /// Current session level as reported by the first registered adapter.
    pub fn sign_in_type(&self) -> SignInType {
        self.facade
            .primary()
            .map(|adapter| adapter.sign_in_type())
            .unwrap_or_default()
    }

    /// Whether the player holds any session, guest or account.
    pub fn is_authorized(&self) -> bool {
        self.sign_in_type() != SignInType::None
    }

    /// Request an account session. Returns the level held afterwards.
    #[instrument(skip(self))]
    pub async fn sign_in(&self) -> SignInType {
        self.sign_in_with(SignInType::Account).await
    }

    /// Request a guest session. Returns the level held afterwards.
    #[instrument(skip(self))]
    pub async fn sign_in_guest(&self) -> SignInType {
        self.sign_in_with(SignInType::Guest).await
    }

    async fn sign_in_with(&self, wanted: SignInType) -> SignInType {
        let operation = match wanted {
            SignInType::Guest => "sign in guest",
            _ => "sign in",
        };

        if !self.facade.ensure_initialized(operation).await {
            return self.sign_in_type();
        }

        let outcome = submit_each(Domain::Auth, operation, &self.facade.adapters(), |adapter| {
            async move {
                let request = match wanted {
                    SignInType::Guest => adapter.sign_in_guest().await,
                    _ => adapter.sign_in().await,
                };
                request.map(|()| adapter.sign_in_type() >= wanted)
            }
        })
        .await;

        if let Some((platform, error)) = &outcome.aborted {
            warn!(facade = %Domain::Auth, %platform, %error, "Sign in aborted");
            self.facade
                .events()
                .emit(SdkEvent::Auth(AuthEvent::SignInFailed {
                    platform: Some(*platform),
                }));
            return self.sign_in_type();
        }

        let level = self.sign_in_type();
        if level < wanted {
            warn!(facade = %Domain::Auth, %level, %wanted, "Sign in declined");
            self.facade
                .events()
                .emit(SdkEvent::Auth(AuthEvent::SignInFailed {
                    platform: outcome.rejected.first().copied(),
                }));
            return level;
        }

        info!(facade = %Domain::Auth, %level, "Signed in");
        self.facade
            .events()
            .emit(SdkEvent::Auth(AuthEvent::SignedIn { level }));
        level
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("facade", &self.facade)
            .field("sign_in_type", &self.sign_in_type())
            .finish()
    }
}
