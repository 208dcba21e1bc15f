use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{
    AuthApp, BridgeError, LeaderboardApp, LeaderboardDescription, LeaderboardEntries,
    LeaderboardParameters, LeaderboardPlayer, LeaderboardPlayerData, LeaderboardStatus,
    PlatformId, PlatformService, SignInType,
};
use core_app::GameApp;
use core_auth::{Auth, SessionRequirement};
use core_leaderboard::Leaderboard;
use core_runtime::config::QueryDefaults;
use core_runtime::events::EventBus;
use std::sync::{Arc, Mutex};

type Journal = Arc<Mutex<Vec<String>>>;

#[derive(Clone, Copy)]
enum Reply {
    Success,
    Report,
    Fault,
}

struct FakeBoard {
    platform: PlatformId,
    reply: Reply,
    journal: Journal,
}

impl FakeBoard {
    fn new(platform: PlatformId, reply: Reply, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            platform,
            reply,
            journal: Arc::clone(journal),
        })
    }

    fn record(&self, call: &str) -> Result<LeaderboardStatus> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.platform, call));
        match self.reply {
            Reply::Success => Ok(LeaderboardStatus::Success),
            Reply::Report => Ok(LeaderboardStatus::Error),
            Reply::Fault => Err(BridgeError::OperationFailed("leaderboard offline".to_string())),
        }
    }

    fn row(&self, id: &str) -> LeaderboardPlayerData {
        LeaderboardPlayerData {
            leaderboard_id: id.to_string(),
            rank: 1,
            score: 100,
            formatted_score: "100".to_string(),
            extra_data: None,
            player: LeaderboardPlayer {
                id: format!("{}-player", self.platform),
                public_name: "Player".to_string(),
                avatar_url: None,
            },
        }
    }
}

impl PlatformService for FakeBoard {
    fn platform(&self) -> PlatformId {
        self.platform
    }
}

#[async_trait]
impl LeaderboardApp for FakeBoard {
    async fn get_description(&self, id: &str) -> Result<Option<LeaderboardDescription>> {
        let status = self.record("description")?;
        Ok(status.is_success().then(|| LeaderboardDescription {
            app_id: self.platform.to_string(),
            id: id.to_string(),
            title: "Best times".to_string(),
            ..LeaderboardDescription::default()
        }))
    }

    async fn set_score(&self, _id: &str, _score: i64) -> Result<LeaderboardStatus> {
        self.record("set_score")
    }

    async fn get_player_data(
        &self,
        id: &str,
    ) -> Result<(LeaderboardStatus, Option<LeaderboardPlayerData>)> {
        let status = self.record("player_data")?;
        Ok((status, Some(self.row(id))))
    }

    async fn get_entries(
        &self,
        parameters: &LeaderboardParameters,
    ) -> Result<(LeaderboardStatus, Option<LeaderboardEntries>)> {
        let status = self.record("entries")?;
        let entries = LeaderboardEntries {
            entries: vec![self.row(&parameters.id)],
            ..LeaderboardEntries::default()
        };
        Ok((status, Some(entries)))
    }
}

/// Host session whose account upgrade can be switched off.
struct FakeSession {
    level: Mutex<SignInType>,
    upgrade_available: bool,
}

impl PlatformService for FakeSession {
    fn platform(&self) -> PlatformId {
        PlatformId::Editor
    }
}

#[async_trait]
impl AuthApp for FakeSession {
    fn sign_in_type(&self) -> SignInType {
        *self.level.lock().unwrap()
    }

    async fn sign_in(&self) -> Result<()> {
        if self.upgrade_available {
            *self.level.lock().unwrap() = SignInType::Account;
        }
        Ok(())
    }

    async fn sign_in_guest(&self) -> Result<()> {
        Ok(())
    }
}

fn leaderboard(level: SignInType, upgrade_available: bool) -> (Leaderboard, Arc<GameApp>) {
    let bus = EventBus::new(32);
    let app = Arc::new(GameApp::new(bus.clone(), QueryDefaults::default()));
    let auth = Arc::new(Auth::new(bus.clone(), app.clone()));
    auth.register(Arc::new(FakeSession {
        level: Mutex::new(level),
        upgrade_available,
    }));
    let account = Arc::new(SessionRequirement::account(auth));
    (Leaderboard::new(bus, app.clone(), account), app)
}

fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

fn calls(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

#[tokio::test]
async fn test_description_bootstraps_core_app() {
    let (board, app) = leaderboard(SignInType::Account, true);
    let journal = journal();
    board.register(FakeBoard::new(PlatformId::Editor, Reply::Success, &journal));

    let description = board.get_description("best_times").await.unwrap();
    assert_eq!(description.id, "best_times");
    assert!(app.is_initialized());
    assert!(board.is_initialized());
}

#[tokio::test]
async fn test_best_of_many_returns_first_success_after_visiting_all() {
    let (board, _) = leaderboard(SignInType::Account, true);
    let journal = journal();
    board.register(FakeBoard::new(PlatformId::Editor, Reply::Report, &journal));
    board.register(FakeBoard::new(PlatformId::YaGames, Reply::Success, &journal));

    let entries = board
        .get_entries(&LeaderboardParameters::new("best_times"))
        .await
        .unwrap();

    assert_eq!(entries.entries[0].player.id, "yagames-player");
    assert_eq!(calls(&journal), vec!["editor:entries", "yagames:entries"]);
}

#[tokio::test]
async fn test_fault_during_query_returns_nothing() {
    let (board, _) = leaderboard(SignInType::Account, true);
    let journal = journal();
    board.register(FakeBoard::new(PlatformId::Editor, Reply::Success, &journal));
    board.register(FakeBoard::new(PlatformId::YaGames, Reply::Fault, &journal));
    board.register(FakeBoard::new(PlatformId::VkPlay, Reply::Success, &journal));

    assert!(board.get_description("best_times").await.is_none());
    assert_eq!(calls(&journal), vec!["editor:description", "yagames:description"]);
}

#[tokio::test]
async fn test_player_data_upgrades_guest_session() {
    let (board, _) = leaderboard(SignInType::Guest, true);
    let journal = journal();
    board.register(FakeBoard::new(PlatformId::Editor, Reply::Success, &journal));

    let row = board.get_player_data("best_times").await.unwrap();
    assert_eq!(row.leaderboard_id, "best_times");
}

#[tokio::test]
async fn test_failed_upgrade_makes_no_adapter_call() {
    let (board, _) = leaderboard(SignInType::Guest, false);
    let journal = journal();
    board.register(FakeBoard::new(PlatformId::Editor, Reply::Success, &journal));

    assert!(board.get_player_data("best_times").await.is_none());
    let outcome = board.set_score("best_times", 42).await;
    assert!(outcome.skipped);
    assert!(calls(&journal).is_empty());
}

#[tokio::test]
async fn test_set_score_continues_past_rejection() {
    let (board, _) = leaderboard(SignInType::Account, true);
    let journal = journal();
    board.register(FakeBoard::new(PlatformId::Editor, Reply::Report, &journal));
    board.register(FakeBoard::new(PlatformId::YaGames, Reply::Success, &journal));

    let outcome = board.set_score("best_times", 42).await;
    assert_eq!(outcome.rejected, vec![PlatformId::Editor]);
    assert_eq!(outcome.accepted, vec![PlatformId::YaGames]);
    assert_eq!(calls(&journal), vec!["editor:set_score", "yagames:set_score"]);
}

#[tokio::test]
async fn test_set_score_aborts_on_fault() {
    let (board, _) = leaderboard(SignInType::Account, true);
    let journal = journal();
    board.register(FakeBoard::new(PlatformId::Editor, Reply::Fault, &journal));
    board.register(FakeBoard::new(PlatformId::YaGames, Reply::Success, &journal));

    let outcome = board.set_score("best_times", 42).await;
    assert!(!outcome.is_success());
    assert_eq!(calls(&journal), vec!["editor:set_score"]);
}
