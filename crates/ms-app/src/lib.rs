//! # ms-app
//!
//! Application layer for MovieScout: use cases over the ms-core ports, the
//! debounced search controller, and the dependency grouping used to wire
//! everything together.

pub mod controller;
pub mod deps;
pub mod usecases;

pub use controller::{SearchController, SearchHandle};
pub use deps::AppDeps;
pub use usecases::{FetchMovies, LoadTrending, RecordSearch};
