use async_trait::async_trait;
use bridge_traits::{
    error::Result, synthetic, LeaderboardApp, LeaderboardDescription, LeaderboardEntries,
    LeaderboardParameters, LeaderboardPlayer, LeaderboardPlayerData, LeaderboardRange,
    LeaderboardStatus, PlatformId, PlatformService,
};
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::app::EDITOR_APP_ID;

pub const EDITOR_PLAYER_ID: &str = "editor-player";
pub const EDITOR_PLAYER_NAME: &str = "Editor";

/// Leaderboards with a single local player.
///
/// Every id is a valid leaderboard. Scores only ever go up.
pub struct EditorLeaderboard {
    scores: Mutex<HashMap<String, i64>>,
}

impl EditorLeaderboard {
    pub fn new() -> Self {
        Self {
            scores: Mutex::new(HashMap::new()),
        }
    }

    fn player_row(&self, id: &str) -> LeaderboardPlayerData {
        let score = self.scores.lock().get(id).copied().unwrap_or(0);
        LeaderboardPlayerData {
            leaderboard_id: id.to_string(),
            rank: 1,
            score,
            formatted_score: score.to_string(),
            extra_data: None,
            player: LeaderboardPlayer {
                id: EDITOR_PLAYER_ID.to_string(),
                public_name: EDITOR_PLAYER_NAME.to_string(),
                avatar_url: None,
            },
        }
    }
}

impl Default for EditorLeaderboard {
    fn default() -> Self {
        Self::new()
    }
}

fn description(id: &str) -> LeaderboardDescription {
    LeaderboardDescription {
        app_id: EDITOR_APP_ID.to_string(),
        id: id.to_string(),
        title: id.to_string(),
        is_default: true,
        ..LeaderboardDescription::default()
    }
}

impl PlatformService for EditorLeaderboard {
    fn platform(&self) -> PlatformId {
        PlatformId::Editor
    }
}

#[async_trait]
impl LeaderboardApp for EditorLeaderboard {
    async fn get_description(&self, id: &str) -> Result<Option<LeaderboardDescription>> {
        synthetic("leaderboard.description", Some(description(id))).await
    }

    async fn set_score(&self, id: &str, score: i64) -> Result<LeaderboardStatus> {
        synthetic("leaderboard.set_score", ()).await?;
        let mut scores = self.scores.lock();
        let best = scores.entry(id.to_string()).or_insert(score);
        *best = (*best).max(score);
        Ok(LeaderboardStatus::Success)
    }

    async fn get_player_data(
        &self,
        id: &str,
    ) -> Result<(LeaderboardStatus, Option<LeaderboardPlayerData>)> {
        let row = synthetic("leaderboard.player_data", self.player_row(id)).await?;
        Ok((LeaderboardStatus::Success, Some(row)))
    }

    async fn get_entries(
        &self,
        parameters: &LeaderboardParameters,
    ) -> Result<(LeaderboardStatus, Option<LeaderboardEntries>)> {
        let entries = LeaderboardEntries {
            leaderboard: description(&parameters.id),
            ranges: vec![LeaderboardRange { start: 0, size: 1 }],
            user_rank: if parameters.include_user { 1 } else { 0 },
            entries: vec![self.player_row(&parameters.id)],
        };
        let entries = synthetic("leaderboard.entries", entries).await?;
        Ok((LeaderboardStatus::Success, Some(entries)))
    }
}
