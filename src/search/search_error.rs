use thiserror::Error;

/// Shown when the user searches with a blank query
pub const EMPTY_QUERY_MESSAGE: &str = "Please Enter a Movie Name!";

/// Shown for every failure after the request left the controller
pub const REQUEST_FAILURE_MESSAGE: &str = "Failed to fetch movies. Please try again later.";

/// Errors that can end a search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Query was empty after trimming; nothing was sent
    #[error("Search query is empty")]
    EmptyQuery,

    /// Transport failure (DNS, connect, TLS, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("API error ({0})")]
    Status(u16),

    /// Body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Search worker is not running
    #[error("Search worker unavailable")]
    WorkerUnavailable,
}

impl SearchError {
    /// Whether this error happened after validation, on the request path
    pub fn is_request_failure(&self) -> bool {
        !matches!(self, SearchError::EmptyQuery)
    }

    /// Fixed dialog text for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => EMPTY_QUERY_MESSAGE,
            _ => REQUEST_FAILURE_MESSAGE,
        }
    }
}
