use log::debug;
use std::sync::Arc;
use ms_core::catalog::MovieSummary;
use ms_core::ports::{CatalogError, CatalogPort};

/// Use case for fetching the movie list shown to the user.
///
/// An empty query asks the catalog for its default popularity-sorted
/// listing; a non-empty query runs a search.
#[derive(Clone)]
pub struct FetchMovies {
    catalog: Arc<dyn CatalogPort>,
}

impl FetchMovies {
    pub fn from_arc(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        let movies = self.catalog.fetch_movies(query).await?;
        debug!("catalog returned {} movies for {:?}", movies.len(), query);
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockCatalog {
        movies: Vec<MovieSummary>,
        should_fail: bool,
    }

    #[async_trait::async_trait]
    impl CatalogPort for MockCatalog {
        async fn fetch_movies(&self, _query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
            if self.should_fail {
                return Err(CatalogError::Network("connection refused".to_string()));
            }
            Ok(self.movies.clone())
        }
    }

    fn movie(id: i64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            poster_path: None,
            popularity: 0.0,
            vote_average: 0.0,
            release_date: None,
            original_language: None,
        }
    }

    #[tokio::test]
    async fn test_execute_returns_movies() {
        let catalog: Arc<dyn CatalogPort> = Arc::new(MockCatalog {
            movies: vec![movie(1, "Batman")],
            should_fail: false,
        });
        let use_case = FetchMovies::from_arc(catalog);
        let result = use_case.execute("batman").await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Batman");
    }

    #[tokio::test]
    async fn test_execute_propagates_catalog_errors() {
        let catalog: Arc<dyn CatalogPort> = Arc::new(MockCatalog {
            movies: vec![],
            should_fail: true,
        });
        let use_case = FetchMovies::from_arc(catalog);
        let result = use_case.execute("batman").await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("connection refused"));
    }
}
