//! Movie search
//!
//! The controller owns the query, results, and loading flag. Lookups run on a
//! background worker and come back tagged with the request id that issued them,
//! so only the latest search can change what is on screen.

pub mod client;
mod controller;
mod search_error;
pub mod worker;

pub use client::{HttpMovieSource, MovieSource};
pub use controller::{DEFAULT_QUERY, SearchController, SearchUpdate};
pub use search_error::{EMPTY_QUERY_MESSAGE, REQUEST_FAILURE_MESSAGE, SearchError};
pub use worker::{SearchRequest, SearchResponse};
