//! Session-level prerequisites.
//!
//! Account-scoped operations (score submission, personal leaderboard rows)
//! wrap the [`Auth`] facade in a [`SessionRequirement`] and hand it to
//! `core_runtime::bootstrap::ensure`. An unmet requirement triggers exactly
//! one `sign_in()` before the re-check.

use async_trait::async_trait;
use bridge_traits::SignInType;
use core_runtime::bootstrap::Prerequisite;
use std::sync::Arc;

use crate::manager::Auth;

#[derive(Debug, Clone)]
pub struct SessionRequirement {
    auth: Arc<Auth>,
}

impl SessionRequirement {
    /// Satisfied only by a real account session.
    pub fn account(auth: Arc<Auth>) -> Self {
        Self { auth }
    }
}

#[async_trait]
impl Prerequisite for SessionRequirement {
    fn describe(&self) -> &'static str {
        "account session"
    }

    fn is_satisfied(&self) -> bool {
        self.auth.sign_in_type() == SignInType::Account
    }

    async fn satisfy(&self) {
        self.auth.sign_in().await;
    }
}
