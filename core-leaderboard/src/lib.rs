//! # Leaderboard Module
//!
//! Facade over the hosts' leaderboard services: board descriptions, score
//! submission, the player's own row and ranked entry windows.
//!
//! The facade initializes behind the core app, and the account-scoped calls
//! (`set_score`, `get_player_data`) run behind an account-session
//! prerequisite that may trigger a single sign-in attempt.

pub mod leaderboard;

pub use leaderboard::Leaderboard;
