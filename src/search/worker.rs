//! Search worker thread
//!
//! Runs lookups off the UI thread. Each request becomes its own task on a
//! current-thread tokio runtime, so a slow search never holds up a newer one.
//! Responses carry the id of the request that produced them; deciding which
//! ones still matter is the controller's job.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use super::{MovieSource, SearchError};
use crate::movie::Movie;

/// Request sent from the controller to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Raw query text as typed
    pub query: String,
    /// Generation token of this request
    pub request_id: u64,
}

/// Outcome of one request, sent back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    Success {
        request_id: u64,
        movies: Vec<Movie>,
    },
    Failure {
        request_id: u64,
        error: SearchError,
    },
}

impl SearchResponse {
    /// Request id this response belongs to
    pub fn request_id(&self) -> u64 {
        match self {
            SearchResponse::Success { request_id, .. }
            | SearchResponse::Failure { request_id, .. } => *request_id,
        }
    }
}

/// Spawn the search worker thread
///
/// The worker lives until `request_rx` is closed, i.e. until the controller
/// holding the sender is dropped.
pub fn spawn_worker(
    source: Arc<dyn MovieSource>,
    request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                // Dropping request_rx here makes every later send fail, which
                // the controller reports as a request failure
                log::error!("Failed to start search runtime: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(source, request_rx, response_tx));
    });
}

/// Accept requests until the channel closes, running each one concurrently
async fn worker_loop(
    source: Arc<dyn MovieSource>,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        log::debug!(
            "Dispatching search {} for {:?}",
            request.request_id,
            request.query
        );
        tokio::spawn(handle_request(
            Arc::clone(&source),
            request,
            response_tx.clone(),
        ));
    }

    log::debug!("Search worker shutting down");
}

async fn handle_request(
    source: Arc<dyn MovieSource>,
    request: SearchRequest,
    response_tx: Sender<SearchResponse>,
) {
    let SearchRequest { query, request_id } = request;

    let response = match source.search(&query).await {
        Ok(movies) => {
            log::debug!("Search {} returned {} movies", request_id, movies.len());
            SearchResponse::Success { request_id, movies }
        }
        Err(error) => {
            log::warn!("Search {} failed: {}", request_id, error);
            SearchResponse::Failure { request_id, error }
        }
    };

    if response_tx.send(response).is_err() {
        log::debug!("UI gone, dropping response for search {}", request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
