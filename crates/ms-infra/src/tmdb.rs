//! TMDB-style movie catalog client.

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use ms_core::catalog::MovieSummary;
use ms_core::config::CatalogConfig;
use ms_core::ports::{CatalogError, CatalogPort};

const DEFAULT_FAILURE_MESSAGE: &str = "Failed to fetch movies.";

/// Wire shape of a catalog listing. On logical failure the catalog still
/// answers 200 but sets `Response` to the string `"False"` and carries the
/// message in `Error`.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    results: Vec<MovieSummary>,

    #[serde(rename = "Response")]
    response: Option<String>,

    #[serde(rename = "Error")]
    error: Option<String>,
}

pub struct TmdbCatalogClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl TmdbCatalogClient {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token.clone(),
        })
    }
}

#[async_trait::async_trait]
impl CatalogPort for TmdbCatalogClient {
    async fn fetch_movies(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        // Empty query: no filter, take the popularity-sorted discover feed.
        let request = if query.is_empty() {
            self.http
                .get(format!("{}/discover/movie", self.base_url))
                .query(&[("sort_by", "popularity.desc")])
        } else {
            self.http
                .get(format!("{}/search/movie", self.base_url))
                .query(&[("query", query)])
        };

        let response = request
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Api(format!("unexpected status {}", status)));
        }

        let body: CatalogResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Api(format!("invalid response body: {}", e)))?;

        if body.response.as_deref() == Some("False") {
            return Err(CatalogError::Rejected(
                body.error
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            ));
        }

        debug!("catalog fetch for {:?} returned {} results", query, body.results.len());
        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn build_client(base_url: String) -> TmdbCatalogClient {
        TmdbCatalogClient::new(&CatalogConfig {
            base_url,
            bearer_token: "test-token".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn search_endpoint_is_used_for_non_empty_query_with_encoding() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::UrlEncoded(
                "query".into(),
                "batman begins".into(),
            ))
            .match_header("authorization", "Bearer test-token")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": [{"id": 1, "title": "Batman Begins"}]}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let movies = client.fetch_movies("batman begins").await.unwrap();

        mock.assert_async().await;
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Batman Begins");
    }

    #[tokio::test]
    async fn discover_endpoint_is_used_for_empty_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/discover/movie")
            .match_query(Matcher::UrlEncoded(
                "sort_by".into(),
                "popularity.desc".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let movies = client.fetch_movies("").await.unwrap();

        mock.assert_async().await;
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn missing_results_field_means_empty_list() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/discover/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let movies = client.fetch_movies("").await.unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let client = build_client(server.url());
        let err = client.fetch_movies("batman").await.unwrap_err();
        match err {
            CatalogError::Api(message) => assert!(message.contains("401"), "got: {message}"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn body_sentinel_yields_rejection_with_body_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"Response": "False", "Error": "Invalid API key"}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let err = client.fetch_movies("batman").await.unwrap_err();
        match err {
            CatalogError::Rejected(message) => assert_eq!(message, "Invalid API key"),
            other => panic!("expected Rejected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn body_sentinel_without_message_uses_default() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"Response": "False"}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let err = client.fetch_movies("batman").await.unwrap_err();
        match err {
            CatalogError::Rejected(message) => assert_eq!(message, "Failed to fetch movies."),
            other => panic!("expected Rejected error, got {other:?}"),
        }
    }
}
