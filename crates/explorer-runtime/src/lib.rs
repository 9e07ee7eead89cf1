//! View controllers for Product Explorer.
//!
//! This crate provides:
//! - `QueryOrchestrator` - Issues the single upstream query for a fetch mode
//! - `Debouncer` - Cancelable quiescence timer for search input
//! - `ListingController` - Listing state, debounced fetches, stale-response guard
//! - `DetailController` - Single product loading and selection state
//!
//! Controllers are owned by one view and mutated through `&mut self`. Fetches
//! run as tokio tasks and report back over a channel, so controller methods
//! that start a fetch must be called from within a tokio runtime.

mod controller;
mod debounce;
mod detail;
mod orchestrator;

#[cfg(test)]
mod testing;

pub use controller::{Applied, ListingConfig, ListingController, LOAD_PRODUCTS_FAILED};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use detail::{DetailController, LOAD_DETAIL_FAILED};
pub use orchestrator::QueryOrchestrator;
