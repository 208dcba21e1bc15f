use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{
    bridge, CoreApp, LeaderboardApp, LeaderboardDescription, LeaderboardEntries,
    LeaderboardParameters, LeaderboardPlayerData, LeaderboardStatus, PlatformId, PlatformService,
};
use std::sync::Arc;

use crate::app::YaGamesApp;
use crate::error::decode;
use crate::host::YaGamesHost;
use crate::reported;
use crate::types::{YaLeaderboardDescription, YaLeaderboardEntries, YaLeaderboardEntry};

/// Portal leaderboards. Titles are localized with the environment language.
pub struct YaGamesLeaderboard {
    host: Arc<dyn YaGamesHost>,
    app: Arc<YaGamesApp>,
}

impl YaGamesLeaderboard {
    pub fn new(host: Arc<dyn YaGamesHost>, app: Arc<YaGamesApp>) -> Self {
        Self { host, app }
    }
}

impl PlatformService for YaGamesLeaderboard {
    fn platform(&self) -> PlatformId {
        PlatformId::YaGames
    }
}

#[async_trait]
impl LeaderboardApp for YaGamesLeaderboard {
    async fn get_description(&self, id: &str) -> Result<Option<LeaderboardDescription>> {
        let call = bridge("leaderboard.description", |done| {
            self.host.leaderboard_description(id, done)
        });
        let Some(json) = reported("leaderboard.description", call.await)? else {
            return Ok(None);
        };
        let raw = decode::<YaLeaderboardDescription>("leaderboard description", &json)?;
        Ok(Some(raw.into_description(&self.app.lang())))
    }

    async fn set_score(&self, id: &str, score: i64) -> Result<LeaderboardStatus> {
        let call = bridge("leaderboard.set_score", |done| {
            self.host.leaderboard_set_score(id, score, done)
        });
        Ok(match reported("leaderboard.set_score", call.await)? {
            Some(()) => LeaderboardStatus::Success,
            None => LeaderboardStatus::Error,
        })
    }

    async fn get_player_data(
        &self,
        id: &str,
    ) -> Result<(LeaderboardStatus, Option<LeaderboardPlayerData>)> {
        let call = bridge("leaderboard.player_entry", |done| {
            self.host.leaderboard_player_entry(id, done)
        });
        let Some(json) = reported("leaderboard.player_entry", call.await)? else {
            return Ok((LeaderboardStatus::Error, None));
        };
        let entry = decode::<YaLeaderboardEntry>("leaderboard entry", &json)?;
        Ok((LeaderboardStatus::Success, Some(entry.into_player_data(id))))
    }

    async fn get_entries(
        &self,
        parameters: &LeaderboardParameters,
    ) -> Result<(LeaderboardStatus, Option<LeaderboardEntries>)> {
        let call = bridge("leaderboard.entries", |done| {
            self.host.leaderboard_entries(
                &parameters.id,
                parameters.include_user,
                parameters.quantity_around,
                parameters.quantity_top,
                done,
            )
        });
        let Some(json) = reported("leaderboard.entries", call.await)? else {
            return Ok((LeaderboardStatus::Error, None));
        };
        let raw = decode::<YaLeaderboardEntries>("leaderboard entries", &json)?;
        Ok((LeaderboardStatus::Success, Some(raw.into_entries(&self.app.lang()))))
    }
}
