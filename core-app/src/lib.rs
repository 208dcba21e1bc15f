//! # Core App Module
//!
//! The root facade of the SDK. It knows the game's environment (device
//! class, language, application id, launch payload), runs the
//! initialize/ready phases across every registered host, and relays the
//! gameplay start/stop markers.
//!
//! When no adapter is registered the environment accessors answer from the
//! configured [`QueryDefaults`](core_runtime::config::QueryDefaults).

pub mod app;

pub use app::GameApp;
