//! Dependency bootstrapping.
//!
//! Facades that need another facade to be in some state (e.g. leaderboard
//! needs the core app initialized, score submission needs an account
//! session) describe the dependency as a [`Prerequisite`]. [`ensure`]
//! checks it, tries to satisfy it once, and re-checks. The result is only
//! ever a boolean; the dependency's own errors stay inside the dependency.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::events::Domain;

#[async_trait]
pub trait Prerequisite: Send + Sync {
    /// Short label used in logs, e.g. `"core app initialization"`.
    fn describe(&self) -> &'static str;

    fn is_satisfied(&self) -> bool;

    /// Attempt to bring the dependency into the required state.
    ///
    /// Must not fail loudly; [`ensure`] re-checks afterwards.
    async fn satisfy(&self);
}

/// Make sure `prerequisite` holds before `action` runs on `domain`.
///
/// Returns `false` (after logging) when the dependency still does not hold.
pub async fn ensure<P>(prerequisite: &P, domain: Domain, action: &str) -> bool
where
    P: Prerequisite + ?Sized,
{
    if prerequisite.is_satisfied() {
        return true;
    }

    debug!(
        facade = %domain,
        action,
        prerequisite = prerequisite.describe(),
        "Satisfying prerequisite"
    );
    prerequisite.satisfy().await;

    if prerequisite.is_satisfied() {
        return true;
    }

    warn!(
        facade = %domain,
        action,
        prerequisite = prerequisite.describe(),
        "Prerequisite not met; skipping"
    );
    false
}
