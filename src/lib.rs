//! Umbrella crate for the GameSDK workspace.
//!
//! Enable `editor-shims` for local runs or `yagames` for the portal build;
//! either one pulls in `core-service` and re-exports it here.

#[cfg(any(feature = "editor-shims", feature = "yagames"))]
pub use core_service::*;
