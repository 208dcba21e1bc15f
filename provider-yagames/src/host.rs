//! Native boundary of the web games host.
//!
//! Every asynchronous host call completes exactly one [`Callback`]: `succeed`
//! with the payload, or `fail` with the host's error text. Payloads that
//! carry structured data are JSON documents (see [`crate::types`]).

use bridge_traits::Callback;

/// Host functions exposed by the games portal page.
pub trait YaGamesHost: Send + Sync {
    fn initialize(&self, done: Callback<()>);

    /// Environment JSON, available once `initialize` succeeded.
    fn environment(&self) -> String;

    /// `"mobile"`, `"tablet"`, `"desktop"` or `"tv"`.
    fn device_type(&self) -> String;

    fn ready(&self, done: Callback<()>);

    fn gameplay_start(&self, done: Callback<()>);

    fn gameplay_stop(&self, done: Callback<()>);

    /// Player JSON. With `scopes` the host may ask for personal data access.
    fn get_player(&self, scopes: bool, done: Callback<String>);

    /// Show the portal login dialog; fails when the player closes it.
    fn open_auth_dialog(&self, done: Callback<()>);

    fn leaderboard_description(&self, id: &str, done: Callback<String>);

    fn leaderboard_set_score(&self, id: &str, score: i64, done: Callback<()>);

    fn leaderboard_player_entry(&self, id: &str, done: Callback<String>);

    fn leaderboard_entries(
        &self,
        id: &str,
        include_user: bool,
        quantity_around: u32,
        quantity_top: u32,
        done: Callback<String>,
    );

    fn purchases_initialize(&self, done: Callback<()>);

    fn purchases_catalog(&self, done: Callback<String>);

    fn purchase(&self, id: &str, developer_payload: &str, done: Callback<String>);

    fn purchases_owned(&self, done: Callback<String>);

    fn purchases_consume(&self, token: &str, done: Callback<()>);

    /// Review reply JSON: `{"value": bool, "reason": int}`.
    fn can_review(&self, done: Callback<String>);

    fn request_review(&self, done: Callback<String>);
}
