use log::debug;
use std::sync::Arc;
use ms_core::ports::{TrendingStoreError, TrendingStorePort};
use ms_core::trending::TrendingEntry;

/// Use case for reading the trending panel once at startup.
#[derive(Clone)]
pub struct LoadTrending {
    store: Arc<dyn TrendingStorePort>,
    limit: usize,
}

impl LoadTrending {
    pub fn from_arc(store: Arc<dyn TrendingStorePort>, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Top search terms, ordered by count descending. The ordering comes
    /// from the store; it is not re-sorted here.
    pub async fn execute(&self) -> Result<Vec<TrendingEntry>, TrendingStoreError> {
        let entries = self.store.top_searches(self.limit).await?;
        debug!("trending store returned {} entries", entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::catalog::MovieSummary;

    struct MockStore {
        entries: Vec<TrendingEntry>,
        requested_limit: std::sync::Mutex<Option<usize>>,
    }

    #[async_trait::async_trait]
    impl TrendingStorePort for MockStore {
        async fn top_searches(
            &self,
            limit: usize,
        ) -> Result<Vec<TrendingEntry>, TrendingStoreError> {
            *self.requested_limit.lock().unwrap() = Some(limit);
            Ok(self.entries.iter().take(limit).cloned().collect())
        }

        async fn record_search(
            &self,
            _term: &str,
            _movie: &MovieSummary,
        ) -> Result<(), TrendingStoreError> {
            unimplemented!()
        }
    }

    fn entry(term: &str, count: u64) -> TrendingEntry {
        TrendingEntry {
            term: term.to_string(),
            count,
            movie_id: 1,
            title: term.to_string(),
            poster_url: None,
        }
    }

    #[tokio::test]
    async fn test_execute_passes_limit_and_preserves_order() {
        let store = Arc::new(MockStore {
            entries: vec![entry("batman", 12), entry("dune", 7), entry("alien", 3)],
            requested_limit: std::sync::Mutex::new(None),
        });
        let use_case = LoadTrending::from_arc(store.clone(), 2);

        let result = use_case.execute().await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].term, "batman");
        assert_eq!(result[1].term, "dune");
        assert_eq!(*store.requested_limit.lock().unwrap(), Some(2));
    }
}
