//! Port interfaces for the application layer.
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core business logic
//! independent of the HTTP clients that back it. Both remote services are
//! injected through these traits so tests can substitute fakes.

mod catalog;
mod trending_store;

pub use catalog::{CatalogError, CatalogPort};
pub use trending_store::{TrendingStoreError, TrendingStorePort};
