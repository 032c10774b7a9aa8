//! Search controller
//!
//! Owns the query, the result set, and the loading flag. Every dispatched
//! search takes a new request id; a response is applied only if its id is
//! still the latest one, so overlapping searches cannot overwrite each other.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::worker::{SearchRequest, SearchResponse, spawn_worker};
use super::{MovieSource, SearchError};
use crate::movie::Movie;

/// Query used at startup and after a reset
pub const DEFAULT_QUERY: &str = "Spiderman";

/// State change produced by a settled search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchUpdate {
    /// Result set was replaced with `count` movies
    Replaced { count: usize },
    /// Search failed and the result set was cleared
    Failed(SearchError),
}

pub struct SearchController {
    /// Current query text, edited on every keystroke
    query: String,
    /// Movies from the last applied search
    results: Vec<Movie>,
    /// True while the latest issued request is outstanding
    loading: bool,
    /// Whether any search has been applied since startup or reset
    has_searched: bool,
    seed_query: String,
    /// Generation token, incremented for each search and on reset
    request_id: u64,
    in_flight_request_id: Option<u64>,
    request_tx: Option<UnboundedSender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl SearchController {
    /// Create a controller with no worker attached
    ///
    /// Searches fail with `WorkerUnavailable` until channels are set.
    pub fn new(seed_query: impl Into<String>) -> Self {
        let seed_query = seed_query.into();
        Self {
            query: seed_query.clone(),
            results: Vec::new(),
            loading: false,
            has_searched: false,
            seed_query,
            request_id: 0,
            in_flight_request_id: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Create a controller backed by a worker thread searching `source`
    pub fn spawn(seed_query: impl Into<String>, source: Arc<dyn MovieSource>) -> Self {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        spawn_worker(source, request_rx, response_tx);

        let mut controller = Self::new(seed_query);
        controller.set_channels(request_tx, response_rx);
        controller
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Movie] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn seed_query(&self) -> &str {
        &self.seed_query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Run the startup search with the seed query
    pub fn initialize(&mut self) -> Result<u64, SearchError> {
        self.query = self.seed_query.clone();
        self.search()
    }

    /// Search for the current query
    ///
    /// A blank query is rejected without touching any state. Otherwise a new
    /// request id is issued, loading is set, and the raw query goes to the
    /// worker. Searching while loading is allowed; the older request becomes
    /// stale. Returns the id of the dispatched request.
    pub fn search(&mut self) -> Result<u64, SearchError> {
        if self.query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        self.loading = true;
        self.in_flight_request_id = Some(request_id);

        let request = SearchRequest {
            query: self.query.clone(),
            request_id,
        };

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());

        if !sent {
            log::warn!("Search worker unavailable, failing request {}", request_id);
            self.apply_response(SearchResponse::Failure {
                request_id,
                error: SearchError::WorkerUnavailable,
            });
            return Err(SearchError::WorkerUnavailable);
        }

        log::debug!("Issued search {} for {:?}", request_id, self.query);
        Ok(request_id)
    }

    /// Restore the seed query and drop all results
    ///
    /// Requests still in flight become stale and are ignored when they settle.
    pub fn reset(&mut self) {
        self.query = self.seed_query.clone();
        self.results.clear();
        self.has_searched = false;
        self.loading = false;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = None;
    }

    /// Drain settled responses from the worker without blocking
    ///
    /// Returns the update applied from the latest request, if it settled.
    pub fn poll_response(&mut self) -> Option<SearchUpdate> {
        let mut responses = Vec::new();
        let mut disconnected = false;

        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        let mut update = None;
        for response in responses {
            if let Some(applied) = self.apply_response(response) {
                update = Some(applied);
            }
        }

        if disconnected {
            self.response_rx = None;
            if let Some(request_id) = self.in_flight_request_id {
                log::warn!("Search worker exited with request {} in flight", request_id);
                update = self.apply_response(SearchResponse::Failure {
                    request_id,
                    error: SearchError::WorkerUnavailable,
                });
            }
        }

        update
    }

    /// Apply one settled response if it belongs to the latest request
    pub fn apply_response(&mut self, response: SearchResponse) -> Option<SearchUpdate> {
        let request_id = response.request_id();
        if self.in_flight_request_id != Some(request_id) {
            log::debug!(
                "Discarding stale response {} (latest: {})",
                request_id,
                self.request_id
            );
            return None;
        }

        self.in_flight_request_id = None;
        self.loading = false;
        self.has_searched = true;

        match response {
            SearchResponse::Success { movies, .. } => {
                self.results = movies;
                Some(SearchUpdate::Replaced {
                    count: self.results.len(),
                })
            }
            SearchResponse::Failure { error, .. } => {
                self.results.clear();
                Some(SearchUpdate::Failed(error))
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
