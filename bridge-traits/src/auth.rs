//! Authentication capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::platform::PlatformService;

/// Session level a player currently holds.
///
/// Ordered: `None < Guest < Account`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum SignInType {
    #[default]
    None,
    /// Anonymous/guest session; enough for reads, not for account-scoped data.
    Guest,
    /// Elevated session bound to a real account.
    Account,
}

impl fmt::Display for SignInType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignInType::None => "none",
            SignInType::Guest => "guest",
            SignInType::Account => "account",
        };
        f.write_str(name)
    }
}

#[async_trait]
pub trait AuthApp: PlatformService {
    fn sign_in_type(&self) -> SignInType;

    /// Ask the host for an account session (may show a login dialog).
    async fn sign_in(&self) -> Result<()>;

    /// Open (or keep) a guest session.
    async fn sign_in_guest(&self) -> Result<()>;
}
