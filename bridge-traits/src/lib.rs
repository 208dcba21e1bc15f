//! # Platform Bridge Traits
//!
//! Capability interfaces that every platform adapter implements.
//!
//! ## Overview
//!
//! This crate defines the contract between the SDK facades and the
//! platform-specific backends. Each domain (core app, auth, leaderboard,
//! purchases, storage, feedback, remote config) has one trait; an adapter
//! implements it for exactly one [`PlatformId`].
//!
//! ## Traits
//!
//! ### Lifecycle
//! - [`PlatformService`](platform::PlatformService) - Platform tag, status and `initialize`
//!
//! ### Domains
//! - [`CoreApp`](app::CoreApp) - Device/app environment, ready/start/stop markers
//! - [`AuthApp`](auth::AuthApp) - Guest and account sign-in
//! - [`LeaderboardApp`](leaderboard::LeaderboardApp) - Descriptions, scores, entries
//! - [`PurchasesApp`](purchases::PurchasesApp) - Catalog, purchase, consume
//! - [`StorageApp`](storage::StorageApp) - Key/value save data
//! - [`FeedbackApp`](feedback::FeedbackApp) - Store review prompts
//! - [`RemoteConfigsApp`](remote_config::RemoteConfigsApp) - Remote tuning values
//!
//! ### Utilities
//! - [`bridge`](callback::bridge) - Turn a completion-callback native call into a future
//! - [`LoggerSink`](log::LoggerSink) - Forward SDK logs to the host console
//!
//! ## Error Handling
//!
//! A capability method returning `Err(BridgeError)` is treated as a thrown
//! fault and aborts the facade's current pass. A completed call that reports
//! a non-success status must say so through its domain status instead.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync`; facades share adapters through `Arc`.
//!
//! ## Examples
//!
//! ### Implementing StorageApp
//!
//! ```ignore
//! use bridge_traits::{bridge, PlatformId, PlatformService, StorageApp, StorageStatus};
//! use bridge_traits::error::Result;
//! use async_trait::async_trait;
//!
//! struct CloudSaves { host: Arc<dyn Host> }
//!
//! impl PlatformService for CloudSaves {
//!     fn platform(&self) -> PlatformId { PlatformId::YaGames }
//! }
//!
//! #[async_trait]
//! impl StorageApp for CloudSaves {
//!     async fn save(&self, key: &str, value: &str) -> Result<StorageStatus> {
//!         bridge("storage.save", |cb| self.host.set_data(key, value, cb)).await?;
//!         Ok(StorageStatus::Success)
//!     }
//!     // ...
//! }
//! ```

pub mod app;
pub mod auth;
pub mod callback;
pub mod error;
pub mod feedback;
pub mod leaderboard;
pub mod log;
pub mod platform;
pub mod purchases;
pub mod remote_config;
pub mod storage;

pub use error::BridgeError;

// Re-export commonly used types
pub use app::{CoreApp, DeviceType};
pub use auth::{AuthApp, SignInType};
pub use callback::{bridge, synthetic, CallStatus, Callback, PendingCall};
pub use feedback::{FailReviewReason, FeedbackApp, ReviewOutcome};
pub use leaderboard::{
    LeaderboardApp, LeaderboardDescription, LeaderboardEntries, LeaderboardParameters,
    LeaderboardPlayer, LeaderboardPlayerData, LeaderboardRange, LeaderboardScoreType,
    LeaderboardStatus,
};
pub use log::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use platform::{InitializationStatus, PlatformId, PlatformService};
pub use purchases::{Product, ProductPurchase, PurchaseStatus, PurchasesApp};
pub use remote_config::{ConfigValueSource, RemoteConfigValue, RemoteConfigsApp};
pub use storage::{StorageApp, StorageStatus};
