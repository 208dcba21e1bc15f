//! Orchestration policies over a registry snapshot.
//!
//! Adapters are always visited sequentially in registration order; no two
//! adapter calls of one pass overlap.
//!
//! | Policy | Used for | Non-success report | Adapter fault |
//! |--------|----------|--------------------|---------------|
//! | [`all_required`] | initialize, ready | halt the pass | abort the pass |
//! | [`best_of_many`] | reads after initialization | keep going | abort, neutral result |
//! | [`first_success`] | side-effecting single-backend calls | try the next adapter | abort, neutral result |
//! | [`submit_each`] | writes fanned out to every backend | log, keep going | abort the pass |
//!
//! Closures receive an owned `Arc` of the adapter so the returned future does
//! not borrow the snapshot.

use bridge_traits::{BridgeError, PlatformId};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::events::Domain;
use crate::registry::AdapterSnapshot;

/// How one adapter finished a step of an all-required pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<S> {
    Proceed,
    /// Completed without error but reported `S`; stop the pass here.
    Halt(S),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome<S> {
    /// Every adapter proceeded (vacuously true for an empty registry).
    Completed,
    Halted { platform: PlatformId, status: S },
    Aborted {
        platform: PlatformId,
        error: BridgeError,
    },
}

impl<S> PassOutcome<S> {
    pub fn is_completed(&self) -> bool {
        matches!(self, PassOutcome::Completed)
    }
}

/// Fail-fast sequence: every adapter must proceed.
pub async fn all_required<A, S, F, Fut>(
    domain: Domain,
    operation: &str,
    adapters: &AdapterSnapshot<A>,
    mut step: F,
) -> PassOutcome<S>
where
    A: ?Sized,
    S: std::fmt::Debug,
    F: FnMut(Arc<A>) -> Fut,
    Fut: Future<Output = Result<Step<S>, BridgeError>>,
{
    for (platform, adapter) in adapters.iter() {
        match step(Arc::clone(adapter)).await {
            Ok(Step::Proceed) => {
                debug!(facade = %domain, %platform, operation, "Adapter step succeeded");
            }
            Ok(Step::Halt(status)) => {
                warn!(facade = %domain, %platform, operation, ?status, "Adapter reported failure");
                return PassOutcome::Halted { platform, status };
            }
            Err(err) => {
                error!(facade = %domain, %platform, operation, error = %err, "Adapter error during {operation}");
                return PassOutcome::Aborted {
                    platform,
                    error: err,
                };
            }
        }
    }
    PassOutcome::Completed
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<T> {
    Found { platform: PlatformId, value: T },
    /// No adapter reported success.
    NotFound,
    Aborted {
        platform: PlatformId,
        error: BridgeError,
    },
}

impl<T> QueryOutcome<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            QueryOutcome::Found { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn platform(&self) -> Option<PlatformId> {
        match self {
            QueryOutcome::Found { platform, .. } | QueryOutcome::Aborted { platform, .. } => {
                Some(*platform)
            }
            QueryOutcome::NotFound => None,
        }
    }
}

/// Ask every adapter, then return the first success in registration order.
///
/// `Ok(None)` from the closure is a reported non-success; the pass continues.
pub async fn best_of_many<A, T, F, Fut>(
    domain: Domain,
    operation: &str,
    adapters: &AdapterSnapshot<A>,
    mut query: F,
) -> QueryOutcome<T>
where
    A: ?Sized,
    F: FnMut(Arc<A>) -> Fut,
    Fut: Future<Output = Result<Option<T>, BridgeError>>,
{
    let mut results = Vec::with_capacity(adapters.len());

    for (platform, adapter) in adapters.iter() {
        match query(Arc::clone(adapter)).await {
            Ok(value) => {
                if value.is_none() {
                    warn!(facade = %domain, %platform, operation, "Adapter reported failure");
                }
                results.push((platform, value));
            }
            Err(err) => {
                error!(facade = %domain, %platform, operation, error = %err, "Adapter error during {operation}");
                return QueryOutcome::Aborted {
                    platform,
                    error: err,
                };
            }
        }
    }

    let found = results
        .into_iter()
        .find_map(|(platform, value)| value.map(|value| QueryOutcome::Found { platform, value }));

    match found {
        Some(outcome) => outcome,
        None => {
            warn!(facade = %domain, operation, "No adapter returned a result");
            QueryOutcome::NotFound
        }
    }
}

/// Try adapters in order and stop at the first success.
///
/// Same selection as [`best_of_many`] but later adapters are not invoked once
/// one succeeds, so a side effect happens on at most one backend.
pub async fn first_success<A, T, F, Fut>(
    domain: Domain,
    operation: &str,
    adapters: &AdapterSnapshot<A>,
    mut attempt: F,
) -> QueryOutcome<T>
where
    A: ?Sized,
    F: FnMut(Arc<A>) -> Fut,
    Fut: Future<Output = Result<Option<T>, BridgeError>>,
{
    for (platform, adapter) in adapters.iter() {
        match attempt(Arc::clone(adapter)).await {
            Ok(Some(value)) => return QueryOutcome::Found { platform, value },
            Ok(None) => {
                warn!(facade = %domain, %platform, operation, "Adapter reported failure");
            }
            Err(err) => {
                error!(facade = %domain, %platform, operation, error = %err, "Adapter error during {operation}");
                return QueryOutcome::Aborted {
                    platform,
                    error: err,
                };
            }
        }
    }
    warn!(facade = %domain, operation, "No adapter accepted the request");
    QueryOutcome::NotFound
}

/// Report of a [`submit_each`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Nothing was attempted because a prerequisite did not hold.
    pub skipped: bool,
    pub accepted: Vec<PlatformId>,
    pub rejected: Vec<PlatformId>,
    pub aborted: Option<(PlatformId, BridgeError)>,
}

impl SubmitOutcome {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    /// Every adapter accepted and none faulted.
    pub fn is_success(&self) -> bool {
        !self.skipped && self.rejected.is_empty() && self.aborted.is_none()
    }

    pub fn attempted(&self) -> usize {
        self.accepted.len() + self.rejected.len() + usize::from(self.aborted.is_some())
    }
}

/// Send a write to every adapter; rejections are logged, faults abort.
pub async fn submit_each<A, F, Fut>(
    domain: Domain,
    operation: &str,
    adapters: &AdapterSnapshot<A>,
    mut submit: F,
) -> SubmitOutcome
where
    A: ?Sized,
    F: FnMut(Arc<A>) -> Fut,
    Fut: Future<Output = Result<bool, BridgeError>>,
{
    let mut outcome = SubmitOutcome::default();

    for (platform, adapter) in adapters.iter() {
        match submit(Arc::clone(adapter)).await {
            Ok(true) => outcome.accepted.push(platform),
            Ok(false) => {
                error!(facade = %domain, %platform, operation, "Adapter rejected {operation}");
                outcome.rejected.push(platform);
            }
            Err(err) => {
                error!(facade = %domain, %platform, operation, error = %err, "Adapter error during {operation}");
                outcome.aborted = Some((platform, err));
                break;
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AdapterRegistry;
    use bridge_traits::PlatformService;
    use std::sync::Mutex;

    /// Adapter whose behavior per call is scripted.
    struct Scripted {
        platform: PlatformId,
        reply: Reply,
        journal: Arc<Mutex<Vec<PlatformId>>>,
    }

    #[derive(Clone, Copy)]
    enum Reply {
        Success(u32),
        Report,
        Fault,
    }

    impl PlatformService for Scripted {
        fn platform(&self) -> PlatformId {
            self.platform
        }
    }

    impl Scripted {
        async fn call(&self) -> Result<Option<u32>, BridgeError> {
            self.journal.lock().unwrap().push(self.platform);
            match self.reply {
                Reply::Success(value) => Ok(Some(value)),
                Reply::Report => Ok(None),
                Reply::Fault => Err(BridgeError::OperationFailed("scripted".to_string())),
            }
        }
    }

    fn registry(
        replies: &[(PlatformId, Reply)],
    ) -> (AdapterRegistry<Scripted>, Arc<Mutex<Vec<PlatformId>>>) {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let registry = AdapterRegistry::new(Domain::Leaderboard);
        for (platform, reply) in replies {
            registry.register(Arc::new(Scripted {
                platform: *platform,
                reply: *reply,
                journal: Arc::clone(&journal),
            }));
        }
        (registry, journal)
    }

    fn calls(journal: &Arc<Mutex<Vec<PlatformId>>>) -> Vec<PlatformId> {
        journal.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn test_all_required_stops_at_fault() {
        let (registry, journal) = registry(&[
            (PlatformId::Editor, Reply::Success(1)),
            (PlatformId::YaGames, Reply::Fault),
            (PlatformId::VkPlay, Reply::Success(3)),
        ]);

        let outcome: PassOutcome<()> = all_required(
            Domain::Leaderboard,
            "initialize",
            &registry.all(),
            |adapter| async move { adapter.call().await.map(|_| Step::Proceed) },
        )
        .await;

        assert!(matches!(
            outcome,
            PassOutcome::Aborted {
                platform: PlatformId::YaGames,
                ..
            }
        ));
        assert_eq!(calls(&journal), vec![PlatformId::Editor, PlatformId::YaGames]);
    }

    #[tokio::test]
    async fn test_all_required_halts_on_report() {
        let (registry, journal) = registry(&[
            (PlatformId::Editor, Reply::Report),
            (PlatformId::YaGames, Reply::Success(2)),
        ]);

        let outcome = all_required(
            Domain::Leaderboard,
            "ready",
            &registry.all(),
            |adapter| async move {
                adapter.call().await.map(|value| match value {
                    Some(_) => Step::Proceed,
                    None => Step::Halt("not ready"),
                })
            },
        )
        .await;

        assert_eq!(
            outcome,
            PassOutcome::Halted {
                platform: PlatformId::Editor,
                status: "not ready"
            }
        );
        assert_eq!(calls(&journal), vec![PlatformId::Editor]);
    }

    #[tokio::test]
    async fn test_all_required_empty_registry_completes() {
        let (registry, _) = registry(&[]);
        let outcome: PassOutcome<()> =
            all_required(Domain::App, "initialize", &registry.all(), |adapter| async move {
                adapter.call().await.map(|_| Step::Proceed)
            })
            .await;
        assert!(outcome.is_completed());
    }

    #[tokio::test]
    async fn test_best_of_many_visits_all_and_picks_first_success() {
        let (registry, journal) = registry(&[
            (PlatformId::Editor, Reply::Report),
            (PlatformId::YaGames, Reply::Success(20)),
            (PlatformId::VkPlay, Reply::Success(30)),
        ]);

        let outcome = best_of_many(Domain::Leaderboard, "get entries", &registry.all(), |a| {
            async move { a.call().await }
        })
        .await;

        assert_eq!(
            outcome,
            QueryOutcome::Found {
                platform: PlatformId::YaGames,
                value: 20
            }
        );
        assert_eq!(
            calls(&journal),
            vec![PlatformId::Editor, PlatformId::YaGames, PlatformId::VkPlay]
        );
    }

    #[tokio::test]
    async fn test_best_of_many_fault_discards_earlier_success() {
        let (registry, _) = registry(&[
            (PlatformId::Editor, Reply::Success(1)),
            (PlatformId::YaGames, Reply::Fault),
        ]);

        let outcome = best_of_many(Domain::Storage, "load", &registry.all(), |a| async move {
            a.call().await
        })
        .await;

        assert_eq!(outcome.platform(), Some(PlatformId::YaGames));
        assert_eq!(outcome.into_option(), None);
    }

    #[tokio::test]
    async fn test_best_of_many_none_succeeded() {
        let (registry, _) = registry(&[
            (PlatformId::Editor, Reply::Report),
            (PlatformId::YaGames, Reply::Report),
        ]);

        let outcome = best_of_many(Domain::Storage, "load", &registry.all(), |a| async move {
            a.call().await
        })
        .await;
        assert_eq!(outcome, QueryOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let (registry, journal) = registry(&[
            (PlatformId::Editor, Reply::Report),
            (PlatformId::YaGames, Reply::Success(5)),
            (PlatformId::VkPlay, Reply::Success(6)),
        ]);

        let outcome = first_success(Domain::Purchases, "purchase", &registry.all(), |a| {
            async move { a.call().await }
        })
        .await;

        assert_eq!(outcome.into_option(), Some(5));
        assert_eq!(calls(&journal), vec![PlatformId::Editor, PlatformId::YaGames]);
    }

    #[tokio::test]
    async fn test_submit_each_continues_past_rejection() {
        let (registry, journal) = registry(&[
            (PlatformId::Editor, Reply::Report),
            (PlatformId::YaGames, Reply::Success(1)),
            (PlatformId::VkPlay, Reply::Fault),
            (PlatformId::AppStore, Reply::Success(1)),
        ]);

        let outcome = submit_each(Domain::Leaderboard, "set score", &registry.all(), |a| {
            async move { a.call().await.map(|value| value.is_some()) }
        })
        .await;

        assert_eq!(outcome.rejected, vec![PlatformId::Editor]);
        assert_eq!(outcome.accepted, vec![PlatformId::YaGames]);
        assert_eq!(outcome.aborted.as_ref().map(|(p, _)| *p), Some(PlatformId::VkPlay));
        assert_eq!(outcome.attempted(), 3);
        assert!(!outcome.is_success());
        assert_eq!(
            calls(&journal),
            vec![PlatformId::Editor, PlatformId::YaGames, PlatformId::VkPlay]
        );
    }

    #[test]
    fn test_skipped_submit_is_not_success() {
        let outcome = SubmitOutcome::skipped();
        assert!(!outcome.is_success());
        assert_eq!(outcome.attempted(), 0);
        assert!(SubmitOutcome::default().is_success());
    }
}
