//! Leaderboard capability and data types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::PlatformService;

/// Completion status an adapter reports for a leaderboard call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeaderboardStatus {
    #[default]
    None,
    Waiting,
    Success,
    Error,
}

impl LeaderboardStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, LeaderboardStatus::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardScoreType {
    #[default]
    Numeric,
    /// Score is a duration in milliseconds.
    Time,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaderboardDescription {
    pub app_id: String,
    pub id: String,
    pub title: String,
    pub is_default: bool,
    /// Lower scores rank higher.
    pub invert_sort_order: bool,
    /// Digits after the decimal point when displaying scores.
    pub decimal_offset: u32,
    pub score_type: LeaderboardScoreType,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaderboardPlayer {
    pub id: String,
    pub public_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaderboardPlayerData {
    pub leaderboard_id: String,
    pub rank: u32,
    pub score: i64,
    pub formatted_score: String,
    pub extra_data: Option<String>,
    pub player: LeaderboardPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaderboardRange {
    pub start: u32,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaderboardEntries {
    pub leaderboard: LeaderboardDescription,
    pub ranges: Vec<LeaderboardRange>,
    /// Rank of the signed-in player, 0 when not ranked or not requested.
    pub user_rank: u32,
    pub entries: Vec<LeaderboardPlayerData>,
}

/// Query window for [`LeaderboardApp::get_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardParameters {
    pub id: String,
    pub include_user: bool,
    pub quantity_around: u32,
    pub quantity_top: u32,
}

impl LeaderboardParameters {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            include_user: false,
            quantity_around: 5,
            quantity_top: 5,
        }
    }

    pub fn with_user(mut self, include: bool) -> Self {
        self.include_user = include;
        self
    }

    pub fn with_top(mut self, quantity: u32) -> Self {
        self.quantity_top = quantity;
        self
    }

    pub fn with_around(mut self, quantity: u32) -> Self {
        self.quantity_around = quantity;
        self
    }
}

#[async_trait]
pub trait LeaderboardApp: PlatformService {
    /// `Ok(None)` means the backend has no such leaderboard.
    async fn get_description(&self, id: &str) -> Result<Option<LeaderboardDescription>>;

    async fn set_score(&self, id: &str, score: i64) -> Result<LeaderboardStatus>;

    async fn get_player_data(
        &self,
        id: &str,
    ) -> Result<(LeaderboardStatus, Option<LeaderboardPlayerData>)>;

    async fn get_entries(
        &self,
        parameters: &LeaderboardParameters,
    ) -> Result<(LeaderboardStatus, Option<LeaderboardEntries>)>;
}
