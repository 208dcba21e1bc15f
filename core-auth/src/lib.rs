//! # Authentication Module
//!
//! Session facade over the hosts' sign-in capabilities.
//!
//! ## Overview
//!
//! Players start without a session (`SignInType::None`), may hold an
//! anonymous guest session, and can be upgraded to an account session.
//! Some operations in other facades need the account level; they express
//! that need as a [`SessionRequirement`] and let the bootstrapper try one
//! upgrade before giving up.
//!
//! ## Features
//!
//! - Guest and account sign-in across every registered host
//! - Session level taken from the first registered host
//! - Sign-in outcome events on the shared event bus
//! - Session prerequisites for dependent facades

pub mod manager;
pub mod session;

pub use manager::Auth;
pub use session::SessionRequirement;
