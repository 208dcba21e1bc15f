//! # Purchases Module
//!
//! In-app purchase facade: product catalog, purchase, owned purchases and
//! consumption.
//!
//! ## Overview
//!
//! - Catalog and owned-purchase reads ask every host and keep the first
//!   successful answer in registration order.
//! - `purchase` walks the hosts in order and stops at the first one that
//!   completes the purchase, so a player is never charged twice.
//! - `consume` goes back to the host that produced the purchase, identified
//!   by [`ProductPurchase::platform`](bridge_traits::ProductPurchase).

pub mod purchases;

pub use purchases::Purchases;
