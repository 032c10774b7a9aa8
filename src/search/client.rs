//! Movie search API client
//!
//! `MovieSource` is the seam between the worker and the network. The HTTP
//! implementation issues a single GET per search.

use futures::future::BoxFuture;

use super::SearchError;
use crate::movie::{Movie, parse_search_body};

/// Default search endpoint
pub const DEFAULT_API_URL: &str = "https://imdb.iamidiotareyoutoo.com/search";

/// Query parameter carrying the search term
const QUERY_PARAM: &str = "q";

/// Something that can look up movies by title
pub trait MovieSource: Send + Sync {
    /// Look up movies matching `query`, in the order the source ranks them
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Movie>, SearchError>>;
}

/// Search API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpMovieSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMovieSource {
    /// Create a client for the given endpoint
    ///
    /// No request timeout is configured; a request settles when the transport
    /// resolves or fails it.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a search term
    ///
    /// The term is embedded as typed, untrimmed and without pre-encoding; URL
    /// parsing escapes characters that cannot appear in a URL at all. A base
    /// URL that already has a query string gets the term appended to it.
    pub fn request_url(&self, query: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}={}", self.base_url, separator, QUERY_PARAM, query)
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Movie>, SearchError> {
        let url = self.request_url(query);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        parse_search_body(&body)
    }
}

impl MovieSource for HttpMovieSource {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Movie>, SearchError>> {
        Box::pin(self.fetch(query))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
