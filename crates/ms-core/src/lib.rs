//! # ms-core
//!
//! Core domain models and business logic for MovieScout.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod ports;
pub mod search;
pub mod trending;

// Re-export commonly used types at the crate root
pub use catalog::MovieSummary;
pub use config::{AppConfig, CatalogConfig, SearchConfig, TrendingConfig};
pub use search::{FetchFailure, FetchPhase, FetchTicket, SearchState};
pub use trending::TrendingEntry;
