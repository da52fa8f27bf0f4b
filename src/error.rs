use thiserror::Error;

/// Custom error types for urlbar-suggestions
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Invalid suggestion list: {0}")]
    InvalidSuggestions(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
