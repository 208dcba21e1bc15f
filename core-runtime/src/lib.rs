//! # Core Runtime Module
//!
//! Shared machinery behind every GameSDK facade:
//! - Adapter registry per domain
//! - Initialization state machine with a ready flag
//! - Orchestration policies (all-required, best-of-many, first-success, submit-each)
//! - Dependency bootstrapping between facades
//! - Event bus, configuration and logging
//!
//! ## Overview
//!
//! A domain crate builds its facade around [`Facade`], registers adapters
//! that implement its capability trait from `bridge-traits`, and expresses
//! each public operation as a bootstrap check followed by one orchestration
//! pass. Adapter errors are absorbed into statuses, log lines and events;
//! they never surface to the caller of a facade operation.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod events;
pub mod facade;
pub mod lifecycle;
pub mod logging;
pub mod orchestrate;
pub mod registry;

pub use bootstrap::{ensure, Prerequisite};
pub use config::{QueryDefaults, SdkConfig, SdkConfigBuilder};
pub use error::{Error, Result};
pub use events::{Domain, EventBus, EventStream, SdkEvent};
pub use facade::Facade;
pub use lifecycle::Lifecycle;
pub use orchestrate::{PassOutcome, QueryOutcome, Step, SubmitOutcome};
pub use registry::{AdapterRegistry, AdapterSnapshot};
