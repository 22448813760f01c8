//! # ms-infra
//!
//! Infrastructure adapters for MovieScout: the reqwest-backed catalog and
//! trending-store clients, and configuration loading (TOML file plus
//! environment overrides).

pub mod config;
pub mod tmdb;
pub mod trending_store;

pub use tmdb::TmdbCatalogClient;
pub use trending_store::HttpTrendingStore;
