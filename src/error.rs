use thiserror::Error;

/// Application-level errors for moviedeck
#[derive(Debug, Error)]
pub enum MovieDeckError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
