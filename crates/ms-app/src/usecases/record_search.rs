use log::debug;
use std::sync::Arc;
use ms_core::catalog::MovieSummary;
use ms_core::ports::{TrendingStoreError, TrendingStorePort};

/// Use case for counting one search against the trending store.
///
/// This runs as an explicit post-success step after a search fetch, never
/// inline with it, so it can be tested on its own and left out entirely to
/// disable trending writes.
pub struct RecordSearch {
    store: Arc<dyn TrendingStorePort>,
}

impl RecordSearch {
    pub fn from_arc(store: Arc<dyn TrendingStorePort>) -> Self {
        Self { store }
    }

    /// Upsert-increment the entry for `term`, storing `movie` as its
    /// representative result. Terms that are empty after trimming are
    /// skipped; they carry no signal worth counting.
    pub async fn execute(
        &self,
        term: &str,
        movie: &MovieSummary,
    ) -> Result<(), TrendingStoreError> {
        if term.trim().is_empty() {
            debug!("skipping trending record for blank term");
            return Ok(());
        }
        self.store.record_search(term, movie).await
    }
}
