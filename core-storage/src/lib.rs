//! Game storage facade.
//!
//! Writes go to every registered backend; reads take the first successful
//! answer in registration order.

pub mod storage;

pub use storage::GameStorage;
