use bridge_traits::{
    InitializationStatus, LeaderboardApp, LeaderboardDescription, LeaderboardEntries,
    LeaderboardParameters, LeaderboardPlayerData, PlatformId,
};
use core_runtime::bootstrap::{ensure, Prerequisite};
use core_runtime::events::{Domain, EventBus, EventStream};
use core_runtime::facade::Facade;
use core_runtime::orchestrate::{best_of_many, submit_each, SubmitOutcome};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Leaderboard facade.
///
/// Reads go to every backend and the first success in registration order
/// wins. Score submission goes to every backend and needs an account
/// session, as does reading the player's own row.
pub struct Leaderboard {
    facade: Facade<dyn LeaderboardApp>,
    account: Arc<dyn Prerequisite>,
}

impl Leaderboard {
    /// `app` gates initialization; `account` gates account-scoped calls.
    pub fn new(
        events: EventBus,
        app: Arc<dyn Prerequisite>,
        account: Arc<dyn Prerequisite>,
    ) -> Self {
        Self {
            facade: Facade::new(Domain::Leaderboard, events).with_upstream(app),
            account,
        }
    }

    pub fn register(&self, adapter: Arc<dyn LeaderboardApp>) -> bool {
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

    #[instrument(skip(self))]
    pub async fn get_description(&self, id: &str) -> Option<LeaderboardDescription> {
        if !self.facade.ensure_initialized("get leaderboard description").await {
            return None;
        }

        best_of_many(
            Domain::Leaderboard,
            "get leaderboard description",
            &self.facade.adapters(),
            |adapter| async move { adapter.get_description(id).await },
        )
        .await
        .into_option()
    }

    /// Submit `score` to every backend.
    #[instrument(skip(self))]
    pub async fn set_score(&self, id: &str, score: i64) -> SubmitOutcome {
        if !self.facade.ensure_initialized("set score").await {
            return SubmitOutcome::skipped();
        }
        if !ensure(self.account.as_ref(), Domain::Leaderboard, "set score").await {
            return SubmitOutcome::skipped();
        }

        let outcome = submit_each(
            Domain::Leaderboard,
            "set score",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .set_score(id, score)
                    .await
                    .map(|status| status.is_success())
            },
        )
        .await;

        debug!(
            facade = %Domain::Leaderboard,
            leaderboard = id,
            accepted = outcome.accepted.len(),
            "Score submitted"
        );
        outcome
    }

    /// The signed-in player's own row.
    #[instrument(skip(self))]
    pub async fn get_player_data(&self, id: &str) -> Option<LeaderboardPlayerData> {
        if !self.facade.ensure_initialized("get player data").await {
            return None;
        }
        if !ensure(self.account.as_ref(), Domain::Leaderboard, "get player data").await {
            return None;
        }

        best_of_many(
            Domain::Leaderboard,
            "get player data",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .get_player_data(id)
                    .await
                    .map(|(status, data)| data.filter(|_| status.is_success()))
            },
        )
        .await
        .into_option()
    }

    #[instrument(skip(self, parameters), fields(leaderboard = %parameters.id))]
    pub async fn get_entries(
        &self,
        parameters: &LeaderboardParameters,
    ) -> Option<LeaderboardEntries> {
        if !self.facade.ensure_initialized("get entries").await {
            return None;
        }

        best_of_many(
            Domain::Leaderboard,
            "get entries",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .get_entries(parameters)
                    .await
                    .map(|(status, entries)| entries.filter(|_| status.is_success()))
            },
        )
        .await
        .into_option()
    }
}

impl std::fmt::Debug for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Leaderboard")
            .field("facade", &self.facade)
            .finish()
    }
}
