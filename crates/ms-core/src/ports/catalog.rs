use thiserror::Error;

use crate::catalog::MovieSummary;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The transport failed before a response was obtained.
    #[error("network error: {0}")]
    Network(String),

    /// The catalog answered with a non-success HTTP status.
    #[error("catalog error: {0}")]
    Api(String),

    /// The catalog answered successfully at the HTTP level but flagged the
    /// request as failed in the body. The message is the body's own error
    /// text.
    #[error("{0}")]
    Rejected(String),
}

/// Remote movie catalog.
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetch movies for `query`. An empty query means "no filter": the
    /// catalog returns a default popularity-sorted listing instead of a
    /// search. A successful response with no matches yields an empty list,
    /// not an error.
    async fn fetch_movies(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError>;
}
