//! Hosted document-store client for trending search terms.
//!
//! The store keeps one document per search term in a collection. Reads list
//! the top documents ordered by their `count` field; writes go through the
//! store's keyed upsert endpoint, which increments the count of an existing
//! document or inserts a fresh one with count 1 in a single operation.

use log::debug;
use serde::{Deserialize, Serialize};

use ms_core::catalog::MovieSummary;
use ms_core::config::TrendingConfig;
use ms_core::ports::{TrendingStoreError, TrendingStorePort};
use ms_core::trending::TrendingEntry;

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingEntry>,
}

/// Body of the upsert-by-term write. The store owns the count: it is
/// incremented server-side, never read and written back from here.
#[derive(Debug, Serialize)]
struct UpsertSearchTerm<'a> {
    term: &'a str,
    movie_id: i64,
    title: &'a str,
    poster_url: Option<String>,
}

pub struct HttpTrendingStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    collection: String,
}

impl HttpTrendingStore {
    pub fn new(config: &TrendingConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            collection: config.collection.clone(),
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/v1/collections/{}/documents",
            self.base_url, self.collection
        )
    }
}

#[async_trait::async_trait]
impl TrendingStorePort for HttpTrendingStore {
    async fn top_searches(&self, limit: usize) -> Result<Vec<TrendingEntry>, TrendingStoreError> {
        let response = self
            .http
            .get(self.documents_url())
            .query(&[("order", "count.desc"), ("limit", &limit.to_string())])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| TrendingStoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrendingStoreError::Api(format!(
                "unexpected status {}",
                status
            )));
        }

        let body: DocumentList = response
            .json()
            .await
            .map_err(|e| TrendingStoreError::Api(format!("invalid response body: {}", e)))?;

        debug!("trending store listed {} documents", body.documents.len());
        Ok(body.documents)
    }

    async fn record_search(
        &self,
        term: &str,
        movie: &MovieSummary,
    ) -> Result<(), TrendingStoreError> {
        let body = UpsertSearchTerm {
            term,
            movie_id: movie.id,
            title: &movie.title,
            poster_url: movie.poster_url(),
        };

        let response = self
            .http
            .put(format!("{}/by-term", self.documents_url()))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TrendingStoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrendingStoreError::Api(format!(
                "unexpected status {}",
                status
            )));
        }
        debug!("recorded search {:?} (movie {})", term, movie.id);
        Ok(())
    }
}
