use thiserror::Error;

use crate::catalog::MovieSummary;
use crate::trending::TrendingEntry;

#[derive(Debug, Error)]
pub enum TrendingStoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("trending store error: {0}")]
    Api(String),
}

/// Remote document store counting search terms.
#[async_trait::async_trait]
pub trait TrendingStorePort: Send + Sync {
    /// The top `limit` search terms, ordered by count descending.
    /// Ordering is performed by the store.
    async fn top_searches(&self, limit: usize) -> Result<Vec<TrendingEntry>, TrendingStoreError>;

    /// Record one search for `term`, with `movie` as its representative
    /// result. This is a single atomic conditional upsert: the store
    /// increments the existing count or inserts a new entry with count 1.
    async fn record_search(
        &self,
        term: &str,
        movie: &MovieSummary,
    ) -> Result<(), TrendingStoreError>;
}
