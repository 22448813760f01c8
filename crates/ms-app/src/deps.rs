//! Application dependency grouping.
//!
//! This is NOT a builder: no build steps, no defaults, no hidden logic.
//! The struct groups the injected ports; the methods assemble use cases
//! and the controller from them.

use std::sync::Arc;
use std::time::Duration;

use ms_core::ports::{CatalogPort, TrendingStorePort};

use crate::controller::{SearchController, SearchHandle};
use crate::usecases::{FetchMovies, LoadTrending, RecordSearch};

/// The injected collaborators. Both remote clients are constructed by the
/// caller and carry their own credentials; `trending` is `None` when the
/// trending store is not configured.
pub struct AppDeps {
    pub catalog: Arc<dyn CatalogPort>,
    pub trending: Option<Arc<dyn TrendingStorePort>>,
}

impl AppDeps {
    pub fn fetch_movies(&self) -> FetchMovies {
        FetchMovies::from_arc(Arc::clone(&self.catalog))
    }

    pub fn load_trending(&self, limit: usize) -> Option<LoadTrending> {
        self.trending
            .as_ref()
            .map(|store| LoadTrending::from_arc(Arc::clone(store), limit))
    }

    pub fn record_search(&self) -> Option<Arc<RecordSearch>> {
        self.trending
            .as_ref()
            .map(|store| Arc::new(RecordSearch::from_arc(Arc::clone(store))))
    }

    /// Assemble the debounced search controller. Trending writes are wired
    /// in automatically when the store is present.
    pub fn search_controller(&self, window: Duration) -> (SearchController, SearchHandle) {
        SearchController::new(self.fetch_movies(), self.record_search(), window)
    }
}
