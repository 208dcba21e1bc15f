//! # Remote Config Module
//!
//! Feature flags and tuning values fetched from the platform backends.
//!
//! Values are fetched during initialization, optionally with targeting
//! parameters, and read synchronously afterwards. When several backends
//! define the same key, the one registered first wins.
//!
//! ```ignore
//! let configs = sdk.remote_configs();
//! configs
//!     .initialize_with_user_parameters(&[("segment".into(), "whales".into())])
//!     .await;
//! let lives = configs.get("lives").and_then(|value| value.as_i64()).unwrap_or(3);
//! ```

pub mod remote_config;

pub use remote_config::RemoteConfigs;
